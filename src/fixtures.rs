//! Static page content.
//!
//! Everything shown inside a page lives here so that the renderers only
//! decide layout and styling.

use crate::pages::PageId;

/// Accent used to tint a home tile.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Accent {
    Blue,
    Green,
    Yellow,
    Purple,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tile {
    pub glyph: &'static str,
    pub label: &'static str,
    pub page: PageId,
    pub accent: Accent,
}

/// Number of tile columns on the home page.
///
pub const TILE_COLUMNS: usize = 2;

pub const HOME_TILES: [Tile; 4] = [
    Tile {
        glyph: "▶",
        label: "Videos",
        page: PageId::Videos,
        accent: Accent::Blue,
    },
    Tile {
        glyph: "▤",
        label: "Articles",
        page: PageId::Articles,
        accent: Accent::Green,
    },
    Tile {
        glyph: "?",
        label: "Myths",
        page: PageId::Myths,
        accent: Accent::Yellow,
    },
    Tile {
        glyph: "✉",
        label: "Chat",
        page: PageId::Chat,
        accent: Accent::Purple,
    },
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tab {
    pub glyph: &'static str,
    pub label: &'static str,
    pub page: PageId,
}

/// Entries of the bottom tab bar. Myths is only reachable from home.
///
pub const TABS: [Tab; 5] = [
    Tab {
        glyph: "⌂",
        label: "Home",
        page: PageId::Home,
    },
    Tab {
        glyph: "▶",
        label: "Videos",
        page: PageId::Videos,
    },
    Tab {
        glyph: "▤",
        label: "Articles",
        page: PageId::Articles,
    },
    Tab {
        glyph: "✉",
        label: "Chat",
        page: PageId::Chat,
    },
    Tab {
        glyph: "⚙",
        label: "Settings",
        page: PageId::Settings,
    },
];

pub const FEATURED_VIDEO: &str = "Understanding Anxiety: A Comprehensive Guide";

pub const VIDEOS: [&str; 4] = [
    "Stress Management",
    "Mindfulness Techniques",
    "Coping with Depression",
    "Building Resilience",
];

pub struct Featured {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const FEATURED_ARTICLE: Featured = Featured {
    title: "Featured: Managing Stress",
    summary: "Learn effective techniques to reduce daily stress",
};

pub const ARTICLES: [&str; 4] = [
    "Coping with Change",
    "Mental Health Stigma",
    "Self-care Tips",
    "Mindfulness Practices",
];

pub const ARTICLE_READ_TIME: &str = "5 min read";

pub struct MythFact {
    pub myth: &'static str,
    pub fact: &'static str,
}

pub const MYTH: MythFact = MythFact {
    myth: "Mental health problems don't affect me.",
    fact: "Mental health issues are more common than you might think. They affect people of all ages and backgrounds.",
};

pub const DID_YOU_KNOW: &str = "1 in 5 adults experience a mental health condition each year.";

pub struct Setting {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETTINGS: [Setting; 3] = [
    Setting {
        glyph: "◆",
        title: "Notification Preferences",
        description: "Manage your notification settings",
    },
    Setting {
        glyph: "●",
        title: "Account Settings",
        description: "Update your profile and account information",
    },
    Setting {
        glyph: "■",
        title: "Privacy Settings",
        description: "Control your data and privacy options",
    },
];

pub struct ChatMessage {
    pub name: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

pub const CHAT_TRANSCRIPT: [ChatMessage; 5] = [
    ChatMessage {
        name: "John",
        message: "Hi everyone, how are you all doing today?",
        time: "10:00 AM",
    },
    ChatMessage {
        name: "Sarah",
        message: "I'm feeling a bit anxious about work, but trying to stay positive.",
        time: "10:05 AM",
    },
    ChatMessage {
        name: "Mike",
        message: "Hang in there, Sarah! Remember to take deep breaths when you feel overwhelmed.",
        time: "10:07 AM",
    },
    ChatMessage {
        name: "Emily",
        message: "I find that going for a short walk helps me clear my mind. Maybe you could try that?",
        time: "10:10 AM",
    },
    ChatMessage {
        name: "Sarah",
        message: "Thanks for the support, everyone. I'll try those suggestions!",
        time: "10:12 AM",
    },
];

pub const COMPOSER_PLACEHOLDER: &str = "Type your message...";

pub const UNAVAILABLE: &str = "Page content not available.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_point_at_distinct_pages() {
        let mut pages: Vec<_> = HOME_TILES.iter().map(|t| t.page).collect();
        pages.dedup();
        assert_eq!(pages.len(), HOME_TILES.len());
        assert!(!pages.contains(&PageId::Home));
    }

    #[test]
    fn test_tab_bar_skips_myths() {
        assert!(TABS.iter().all(|t| t.page != PageId::Myths));
        assert_eq!(TABS[0].page, PageId::Home);
    }
}
