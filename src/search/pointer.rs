//! Global pointer events and outside-click detection

use tokio::sync::broadcast;

/// Where a pointer press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The search input box
    Input,
    /// The suggestions dropdown under the input
    Suggestions,
    /// A category shortcut
    Category,
    /// An entry in the results list
    Result,
    /// Anywhere else on the page
    Page,
}

impl ClickTarget {
    /// Whether the press landed inside the search box region
    pub fn within_search_box(self) -> bool {
        matches!(self, Self::Input | Self::Suggestions)
    }
}

impl std::str::FromStr for ClickTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "dropdown" | "suggestions" => Ok(Self::Suggestions),
            "category" => Ok(Self::Category),
            "result" => Ok(Self::Result),
            "outside" | "page" => Ok(Self::Page),
            other => Err(format!("unknown click target '{}'", other)),
        }
    }
}

/// Page-wide pointer event source that mounted clients subscribe to
pub type PointerBus = broadcast::Sender<ClickTarget>;

/// Create a pointer bus
pub fn pointer_bus() -> PointerBus {
    broadcast::channel(64).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_box_region() {
        assert!(ClickTarget::Input.within_search_box());
        assert!(ClickTarget::Suggestions.within_search_box());
        assert!(!ClickTarget::Page.within_search_box());
        assert!(!ClickTarget::Category.within_search_box());
        assert!(!ClickTarget::Result.within_search_box());
    }

    #[test]
    fn test_parse() {
        assert_eq!("outside".parse::<ClickTarget>(), Ok(ClickTarget::Page));
        assert_eq!("Dropdown".parse::<ClickTarget>(), Ok(ClickTarget::Suggestions));
        assert!("header".parse::<ClickTarget>().is_err());
    }
}
