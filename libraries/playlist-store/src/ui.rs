//! UI state module (theme)
//!
//! The theme lives in three places: module state, durable storage under
//! [`THEME_KEY`], and the document's `data-theme` attribute / `dark-mode`
//! class. [`UiModule::commit`] writes all three through one path, so the
//! in-memory and persisted values agree after every mutation.

use crate::error::Result;
use crate::storage::{KeyValueStore, THEME_KEY};
use playlist_core::document::{DARK_MODE_CLASS, THEME_ATTRIBUTE};
use playlist_core::{Document, Theme};
use tracing::{debug, warn};

/// State writers for the UI module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMutation {
    SetTheme(Theme),
}

/// In-memory UI state
#[derive(Debug, Clone, Default)]
pub struct UiModule {
    theme: Theme,
}

impl UiModule {
    /// Read the persisted theme once. Absent or unknown values fall back to light.
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        let theme = match storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Ignoring unknown persisted theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted theme");
                Theme::default()
            }
        };

        debug!(theme = %theme, "Loaded theme");
        Self { theme }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.is_dark()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Apply a mutation. This is the only code path that writes state.
    ///
    /// If persisting fails, state and document are left untouched.
    pub fn commit(
        &mut self,
        mutation: UiMutation,
        storage: &mut dyn KeyValueStore,
        document: &mut dyn Document,
    ) -> Result<()> {
        match mutation {
            UiMutation::SetTheme(theme) => self.persist_and_apply(theme, storage, document),
        }
    }

    fn persist_and_apply(
        &mut self,
        theme: Theme,
        storage: &mut dyn KeyValueStore,
        document: &mut dyn Document,
    ) -> Result<()> {
        storage.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        apply_theme(document, theme);
        debug!(theme = %theme, "Theme set");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn set_theme(
        &mut self,
        theme: Theme,
        storage: &mut dyn KeyValueStore,
        document: &mut dyn Document,
    ) -> Result<()> {
        self.commit(UiMutation::SetTheme(theme), storage, document)
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(
        &mut self,
        storage: &mut dyn KeyValueStore,
        document: &mut dyn Document,
    ) -> Result<Theme> {
        let next = self.theme.toggled();
        self.commit(UiMutation::SetTheme(next), storage, document)?;
        Ok(next)
    }

    /// Reapply the current theme to the document at startup.
    ///
    /// Storage is not rewritten: the value was read from it.
    pub fn initialize_theme(&self, document: &mut dyn Document) {
        apply_theme(document, self.theme);
    }
}

fn apply_theme(document: &mut dyn Document, theme: Theme) {
    document.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    document.toggle_class(DARK_MODE_CLASS, theme.is_dark());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;
    use playlist_core::{HeadlessDocument, MockDocument};

    /// Storage whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn set_theme_writes_state_storage_and_document() {
        let mut storage = MemoryStore::new();
        let mut doc = HeadlessDocument::new();
        let mut ui = UiModule::load(&storage);

        ui.set_theme(Theme::Dark, &mut storage, &mut doc).unwrap();

        assert_eq!(ui.theme(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("dark"));
        assert!(doc.has_class(DARK_MODE_CLASS));
    }

    #[test]
    fn toggle_from_dark_yields_light() {
        let mut storage = MemoryStore::new();
        storage.set(THEME_KEY, "dark").unwrap();
        let mut doc = HeadlessDocument::new();
        let mut ui = UiModule::load(&storage);

        let next = ui.toggle_theme(&mut storage, &mut doc).unwrap();

        assert_eq!(next, Theme::Light);
        assert!(!ui.is_dark_theme());
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(!doc.has_class(DARK_MODE_CLASS));
    }

    #[test]
    fn load_falls_back_to_light() {
        let mut storage = MemoryStore::new();
        assert_eq!(UiModule::load(&storage).theme(), Theme::Light);

        storage.set(THEME_KEY, "ocean").unwrap();
        assert_eq!(UiModule::load(&storage).theme(), Theme::Light);
    }

    #[test]
    fn failed_persist_leaves_state_unchanged() {
        let mut storage = ReadOnlyStore;
        let mut doc = HeadlessDocument::new();
        let mut ui = UiModule::default();

        assert!(ui.set_theme(Theme::Dark, &mut storage, &mut doc).is_err());
        assert_eq!(ui.theme(), Theme::Light);
        assert_eq!(doc.attribute(THEME_ATTRIBUTE), None);
    }

    #[test]
    fn initialize_twice_applies_same_side_effect_without_persisting() {
        let mut storage = MemoryStore::new();
        storage.set(THEME_KEY, "dark").unwrap();
        let ui = UiModule::load(&storage);

        let mut doc = MockDocument::new();
        doc.expect_set_attribute()
            .withf(|name, value| name == THEME_ATTRIBUTE && value == "dark")
            .times(2)
            .return_const(());
        doc.expect_toggle_class()
            .withf(|class, enabled| class == DARK_MODE_CLASS && *enabled)
            .times(2)
            .return_const(());

        ui.initialize_theme(&mut doc);
        ui.initialize_theme(&mut doc);

        assert_eq!(ui.theme(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
