use thiserror::Error;

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

    pub fn parse(value: &str) -> Option<Self> {
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

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn button_text(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("client storage is not available")]
    Unavailable,
    #[error("client storage rejected the operation: {0}")]
    Rejected(String),
}

pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Stored preference first, then the system's colour scheme, then dark.
pub fn resolve_initial_theme(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> Theme {
    stored.unwrap_or(match system_prefers_dark {
        Some(false) => Theme::Light,
        Some(true) | None => Theme::Dark,
    })
}

pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn load(store: S, system_prefers_dark: Option<bool>) -> Self {
        let stored = match store.load() {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                log::debug!("theme preference unreadable: {err}");
                None
            }
        };

        Self {
            current: resolve_initial_theme(stored, system_prefers_dark),
            store,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.persist();
        self.current
    }

    pub fn persist(&self) -> bool {
        match self.store.save(self.current.as_str()) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("theme preference not persisted: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            let store = Self::default();
            *store.value.borrow_mut() = Some(value.to_string());
            store
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Rejected("quota exceeded".to_string()));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        for system in [Some(true), Some(false), None] {
            let dark = ThemeController::load(MemoryStore::with("dark"), system);
            let light = ThemeController::load(MemoryStore::with("light"), system);

            assert_eq!(dark.current(), Theme::Dark);
            assert_eq!(light.current(), Theme::Light);
        }
    }

    #[test]
    fn absent_value_falls_back_to_system_then_dark() {
        let cases = [
            (Some(true), Theme::Dark),
            (Some(false), Theme::Light),
            (None, Theme::Dark),
        ];

        for (system, expected) in cases {
            let controller = ThemeController::load(MemoryStore::default(), system);
            assert_eq!(controller.current(), expected);
        }
    }

    #[test]
    fn unrecognised_stored_value_is_treated_as_absent() {
        let controller = ThemeController::load(MemoryStore::with("sepia"), Some(false));

        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn toggle_parity_and_persistence() {
        for initial in [Theme::Dark, Theme::Light] {
            for count in 0..6 {
                let store = MemoryStore::with(initial.as_str());
                let mut controller = ThemeController::load(store.clone(), None);

                for _ in 0..count {
                    controller.toggle();
                }

                let expected = if count % 2 == 0 { initial } else { initial.toggled() };
                assert_eq!(controller.current(), expected);
                assert_eq!(store.stored().as_deref(), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn broken_storage_still_switches_mode() {
        let mut controller = ThemeController::load(MemoryStore::broken(), Some(false));
        assert_eq!(controller.current(), Theme::Light);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(!controller.persist());
    }

    #[test]
    fn toggle_label_names_the_next_mode() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
