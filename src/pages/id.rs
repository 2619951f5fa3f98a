//! Page identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    Videos,
    Articles,
    Myths,
    Settings,
    Chat,
}

impl PageId {
    /// Every page, in declaration order.
    ///
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::Videos,
        PageId::Articles,
        PageId::Myths,
        PageId::Settings,
        PageId::Chat,
    ];

    /// Return the lowercase name used in config files and on the command line.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Videos => "videos",
            PageId::Articles => "articles",
            PageId::Myths => "myths",
            PageId::Settings => "settings",
            PageId::Chat => "chat",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Videos => 1,
            PageId::Articles => 2,
            PageId::Myths => 3,
            PageId::Settings => 4,
            PageId::Chat => 5,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when parsing a page identifier.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageIdError {
    /// Identifier outside the closed page set
    #[error("Unknown page: {0}")]
    Unknown(String),
}

impl FromStr for PageId {
    type Err = PageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .iter()
            .find(|page| page.as_str() == s)
            .copied()
            .ok_or_else(|| PageIdError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_pages() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
        }
    }

    #[test]
    fn test_parse_unknown_page() {
        let error = "unknown".parse::<PageId>().unwrap_err();
        assert_eq!(error, PageIdError::Unknown("unknown".to_string()));
        assert!(error.to_string().contains("Unknown page"));
        assert!("Home".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, page) in PageId::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let serialized = serde_yaml::to_string(&PageId::Myths).unwrap();
        assert!(serialized.contains("myths"));
        let deserialized: PageId = serde_yaml::from_str("chat").unwrap();
        assert_eq!(deserialized, PageId::Chat);
    }
}
