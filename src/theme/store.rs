//! Theme preference state and its persistence.
//!
//! `ThemeStore` owns the single light/dark/system preference. It is loaded
//! once from a [`ThemeStorage`] backend, and every write goes straight back
//! to that backend. Storage trouble is logged and never reaches the UI.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// `dark` goes to `light`; everything else, `system` included, goes to `dark`.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light | ThemePreference::System => ThemePreference::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedTheme {
    theme: ThemePreference,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{0}` from storage")]
    Read(String),
    #[error("failed to write `{0}` to storage")]
    Write(String),
    #[error("stored theme is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait ThemeStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Process-local storage. Used when the browser refuses `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Picks `localStorage` when the browser exposes it, memory otherwise.
#[derive(Clone, Debug)]
pub enum BrowserStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        match LocalStorage::storage() {
            Ok(_) => BrowserStorage::Local(LocalStorage),
            Err(e) => {
                warn!("{}, theme preference will not survive reloads", e);
                BrowserStorage::Memory(MemoryStorage::default())
            }
        }
    }
}

impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(s) => s.load(key),
            BrowserStorage::Memory(s) => s.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(s) => s.save(key, value),
            BrowserStorage::Memory(s) => s.save(key, value),
        }
    }
}

pub struct ThemeStore<S: ThemeStorage> {
    storage: S,
    key: String,
    theme: ThemePreference,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Reads the persisted preference, defaulting to `system` when nothing
    /// usable is stored.
    pub fn load(storage: S, key: &str) -> Self {
        let theme = match read_preference(&storage, key) {
            Ok(Some(theme)) => theme,
            Ok(None) => ThemePreference::System,
            Err(e) => {
                warn!("ignoring stored theme: {}", e);
                ThemePreference::System
            }
        };
        Self {
            storage,
            key: key.to_string(),
            theme,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        info!("theme preference set to {}", theme.as_str());
        if let Err(e) = self.persist() {
            warn!("could not persist theme preference: {}", e);
        }
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    fn persist(&self) -> Result<(), StorageError> {
        let value = serde_json::to_string(&PersistedTheme { theme: self.theme })?;
        self.storage.save(&self.key, &value)
    }
}

fn read_preference<S: ThemeStorage>(
    storage: &S,
    key: &str,
) -> Result<Option<ThemePreference>, StorageError> {
    match storage.load(key)? {
        Some(raw) => {
            let persisted: PersistedTheme = serde_json::from_str(&raw)?;
            Ok(Some(persisted.theme))
        }
        None => Ok(None),
    }
}
