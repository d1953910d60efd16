//! Navigation history with scroll restoration and a title hook.

use crate::error::Result;
use crate::resolve::{ResolvedRoute, Router};
use playlist_core::Document;
use tracing::debug;

/// Scroll offset of a view, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    pub left: u32,
    pub top: u32,
}

impl ScrollPosition {
    pub const TOP: Self = Self { left: 0, top: 0 };

    pub fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Back,
    Forward,
}

/// A completed navigation: where we landed and where to scroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub kind: NavigationKind,
    pub route: ResolvedRoute,
    pub scroll: ScrollPosition,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    route: ResolvedRoute,
    scroll: Option<ScrollPosition>,
}

/// Browser-style history over a [`Router`].
///
/// Every navigation runs the before-each hook, which sets the document
/// title from the target route.
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Router,
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Navigator {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            entries: Vec::new(),
            index: 0,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.entries.get(self.index).map(|e| &e.route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Navigate to a new location. Forward entries are discarded and the
    /// view scrolls to the top.
    pub fn push(&mut self, location: &str, document: &mut dyn Document) -> Result<Navigation> {
        let route = self.router.resolve(location)?;
        before_each(document, &route);

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(HistoryEntry {
            route: route.clone(),
            scroll: None,
        });
        self.index = self.entries.len() - 1;

        Ok(Navigation {
            kind: NavigationKind::Push,
            route,
            scroll: ScrollPosition::TOP,
        })
    }

    /// Record the scroll offset of the current entry
    pub fn save_scroll(&mut self, position: ScrollPosition) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            entry.scroll = Some(position);
        }
    }

    /// Step back one entry. `None` at the start of history.
    pub fn back(&mut self, document: &mut dyn Document) -> Option<Navigation> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.restore(NavigationKind::Back, document))
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self, document: &mut dyn Document) -> Option<Navigation> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.restore(NavigationKind::Forward, document))
    }

    fn restore(&self, kind: NavigationKind, document: &mut dyn Document) -> Navigation {
        let entry = &self.entries[self.index];
        before_each(document, &entry.route);
        Navigation {
            kind,
            route: entry.route.clone(),
            scroll: entry.scroll.unwrap_or(ScrollPosition::TOP),
        }
    }
}

fn before_each(document: &mut dyn Document, route: &ResolvedRoute) {
    debug!(path = %route.path, title = route.title(), "Navigating");
    document.set_title(route.title());
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_core::HeadlessDocument;

    #[test]
    fn empty_history_cannot_move() {
        let mut nav = Navigator::new(Router::new());
        let mut doc = HeadlessDocument::new();

        assert!(nav.is_empty());
        assert!(nav.current().is_none());
        assert!(nav.back(&mut doc).is_none());
        assert!(nav.forward(&mut doc).is_none());
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut nav = Navigator::new(Router::new());
        let mut doc = HeadlessDocument::new();

        nav.push("/", &mut doc).unwrap();
        nav.push("/dashboard", &mut doc).unwrap();
        nav.push("/playlist/1", &mut doc).unwrap();
        nav.back(&mut doc).unwrap();
        nav.back(&mut doc).unwrap();
        nav.push("/playlist/2", &mut doc).unwrap();

        assert_eq!(nav.len(), 2);
        assert!(!nav.can_go_forward());
        assert_eq!(nav.current().unwrap().path, "/playlist/2");
    }

    #[test]
    fn failed_push_keeps_history() {
        static NONE: &[crate::routes::RouteDef] = &[];
        let mut nav = Navigator::new(Router::with_routes(NONE));
        let mut doc = HeadlessDocument::new();

        assert!(nav.push("/", &mut doc).is_err());
        assert!(nav.is_empty());
        assert_eq!(doc.title(), "");
    }
}
