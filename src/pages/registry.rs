use super::{PageId, TransitionProfile};

/// Title shown when a page cannot be resolved.
///
pub const FALLBACK_TITLE: &str = "Mental Health App";

/// Opaque handle to the data a page renders. The presentation layer decides
/// what each handle looks like on screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ContentRef {
    Page(PageId),
    Unavailable,
}

/// Static description of one page.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PageDescriptor {
    pub id: Option<PageId>,
    pub title: &'static str,
    pub content: ContentRef,
}

impl PageDescriptor {
    fn new(id: PageId, title: &'static str) -> Self {
        PageDescriptor {
            id: Some(id),
            title,
            content: ContentRef::Page(id),
        }
    }

    /// Return true if this is the stand-in for an unknown page.
    ///
    pub fn is_fallback(&self) -> bool {
        self.id.is_none()
    }
}

/// Immutable lookup from page identifiers to descriptors and transitions.
///
/// Every lookup is total: known pages always resolve, unknown identifiers
/// resolve to the fallback descriptor and no transition.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    descriptors: [PageDescriptor; 6],
    profiles: [TransitionProfile; 6],
    fallback: PageDescriptor,
}

impl PageRegistry {
    /// Return the registry of the six application pages.
    ///
    pub fn new() -> Self {
        PageRegistry {
            descriptors: [
                PageDescriptor::new(PageId::Home, "Mental Health Resources"),
                PageDescriptor::new(PageId::Videos, "Mental Health Videos"),
                PageDescriptor::new(PageId::Articles, "Mental Health Articles"),
                PageDescriptor::new(PageId::Myths, "Mental Health Myths"),
                PageDescriptor::new(PageId::Settings, "Settings"),
                PageDescriptor::new(PageId::Chat, "Group Chat"),
            ],
            profiles: [
                TransitionProfile::zoom_in(),
                TransitionProfile::slide_left(),
                TransitionProfile::slide_up(),
                TransitionProfile::spin(),
                TransitionProfile::zoom_out(),
                TransitionProfile::slide_down(),
            ],
            fallback: PageDescriptor {
                id: None,
                title: FALLBACK_TITLE,
                content: ContentRef::Unavailable,
            },
        }
    }

    /// Describe the page named `id`, or the fallback page if the name is
    /// not a known page.
    ///
    pub fn describe(&self, id: &str) -> &PageDescriptor {
        match id.parse::<PageId>() {
            Ok(page) => self.page(page),
            Err(_) => &self.fallback,
        }
    }

    /// Return the transition for the page named `id`, if it is known.
    ///
    pub fn transition_for(&self, id: &str) -> Option<&TransitionProfile> {
        id.parse::<PageId>().ok().map(|page| self.profile(page))
    }

    /// Return the descriptor of a known page.
    ///
    pub fn page(&self, id: PageId) -> &PageDescriptor {
        &self.descriptors[id.index()]
    }

    /// Return the transition profile of a known page.
    ///
    pub fn profile(&self, id: PageId) -> &TransitionProfile {
        &self.profiles[id.index()]
    }

    /// Return the descriptor used for unknown page ids.
    ///
    pub fn fallback(&self) -> &PageDescriptor {
        &self.fallback
    }

    /// Iterate over every page descriptor in declaration order.
    ///
    pub fn pages(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
