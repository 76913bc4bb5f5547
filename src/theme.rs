use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

pub fn read_stored_theme(store: &dyn PreferenceStore) -> Option<Theme> {
    let value = store.get(THEME_KEY)?;
    Theme::from_str(&value)
}

pub fn resolve_theme(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Theme {
    read_stored_theme(store).unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

pub fn persist_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

pub fn toggle_theme(store: &dyn PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    persist_theme(store, next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system_setting() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "light");
        assert_eq!(resolve_theme(&store, true), Theme::Light);
    }

    #[test]
    fn system_setting_applies_when_nothing_is_stored() {
        let store = MemoryStore::default();
        assert_eq!(resolve_theme(&store, true), Theme::Dark);
        assert_eq!(resolve_theme(&store, false), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        assert_eq!(resolve_theme(&store, true), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_stored_value_and_class() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "light");
        let original = resolve_theme(&store, false);

        let once = toggle_theme(&store, original);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert!(once.is_dark());

        let twice = toggle_theme(&store, once);
        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(twice.is_dark(), original.is_dark());
    }

    #[test]
    fn icon_and_label_track_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
