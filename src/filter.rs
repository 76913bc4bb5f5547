use std::time::Duration;

pub const SHOW_STAGGER: Duration = Duration::from_millis(100);
pub const SHOW_SETTLE: Duration = Duration::from_millis(10);
pub const HIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn from_attribute(value: &str) -> Self {
        match value {
            "all" => Self::All,
            category => Self::Category(category.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    Show { delay: Duration },
    Hide,
}

pub fn plan_transitions<'a, I>(filter: &ProjectFilter, categories: I) -> Vec<CardTransition>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            if filter.matches(category) {
                CardTransition::Show {
                    delay: SHOW_STAGGER * index as u32,
                }
            } else {
                CardTransition::Hide
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Option<&str>; 4] = [Some("frontend"), Some("backend"), Some("frontend"), None];

    #[test]
    fn category_filter_shows_only_exact_matches() {
        let plan = plan_transitions(&ProjectFilter::from_attribute("frontend"), CARDS);

        assert_eq!(
            plan,
            [
                CardTransition::Show { delay: Duration::ZERO },
                CardTransition::Hide,
                CardTransition::Show { delay: Duration::from_millis(200) },
                CardTransition::Hide,
            ]
        );
    }

    #[test]
    fn all_shows_every_card_with_stagger() {
        let plan = plan_transitions(&ProjectFilter::All, CARDS);

        assert!(plan.iter().all(|transition| matches!(transition, CardTransition::Show { .. })));
        assert_eq!(plan[3], CardTransition::Show { delay: Duration::from_millis(300) });
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let filter = ProjectFilter::from_attribute("Frontend");
        assert!(!filter.matches(Some("frontend")));
        assert_eq!(filter.as_str(), "Frontend");
    }
}
