#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    HamburgerClicked,
    NavLinkClicked { narrow_viewport: bool },
    DocumentClicked { inside_menu: bool },
    EscapePressed,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        let open = match event {
            MenuEvent::HamburgerClicked => !self.open,
            MenuEvent::NavLinkClicked { narrow_viewport } => self.open && !narrow_viewport,
            MenuEvent::DocumentClicked { inside_menu } => self.open && inside_menu,
            MenuEvent::EscapePressed => false,
        };
        Self { open }
    }

    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            "auto"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles() {
        let menu = MobileMenu::default().apply(MenuEvent::HamburgerClicked);
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");
        assert!(!menu.apply(MenuEvent::HamburgerClicked).is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_keeps() {
        let open = MobileMenu::default().apply(MenuEvent::HamburgerClicked);
        assert!(open.apply(MenuEvent::DocumentClicked { inside_menu: true }).is_open());
        assert!(!open.apply(MenuEvent::DocumentClicked { inside_menu: false }).is_open());
    }

    #[test]
    fn nav_link_closes_only_on_narrow_viewports() {
        let open = MobileMenu::default().apply(MenuEvent::HamburgerClicked);
        assert!(!open.apply(MenuEvent::NavLinkClicked { narrow_viewport: true }).is_open());
        assert!(open.apply(MenuEvent::NavLinkClicked { narrow_viewport: false }).is_open());
    }

    #[test]
    fn escape_always_closes() {
        let open = MobileMenu::default().apply(MenuEvent::HamburgerClicked);
        assert!(!open.apply(MenuEvent::EscapePressed).is_open());
        assert_eq!(MobileMenu::default().apply(MenuEvent::EscapePressed).body_overflow(), "auto");
    }
}
