//! Presentation surface
//!
//! The store and the router never touch a real window. They push their side
//! effects (page title, theme attribute, body classes) through [`Document`],
//! which a front end implements and tests can record or mock.

use std::collections::{BTreeMap, BTreeSet};

/// Attribute carrying the active theme name
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Body class toggled on while the dark theme is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Receiver for presentation side effects
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Document: Send {
    /// Set the visible page title
    fn set_title(&mut self, title: &str);

    /// Set an attribute on the root element
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Add or remove a class on the body element
    fn toggle_class(&mut self, class: &str, enabled: bool);
}

/// In-memory document that records the last value of every side effect.
///
/// Used by the CLI, which has no window, and by tests that assert on the
/// resulting presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessDocument {
    title: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Value of a root attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether a body class is set
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl Document for HeadlessDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_document_records_side_effects() {
        let mut doc = HeadlessDocument::new();
        doc.set_title("Home Page");
        doc.set_attribute(THEME_ATTRIBUTE, "dark");
        doc.toggle_class(DARK_MODE_CLASS, true);

        assert_eq!(doc.title(), "Home Page");
        assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("dark"));
        assert!(doc.has_class(DARK_MODE_CLASS));

        doc.toggle_class(DARK_MODE_CLASS, false);
        assert!(!doc.has_class(DARK_MODE_CLASS));
    }

    #[test]
    fn mock_document_can_expect_calls() {
        let mut doc = MockDocument::new();
        doc.expect_set_title()
            .withf(|title| title == "User Dashboard")
            .times(1)
            .return_const(());

        doc.set_title("User Dashboard");
    }
}
