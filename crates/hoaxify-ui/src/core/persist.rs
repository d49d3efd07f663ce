//! Persisted session and language preferences.
//!
//! # Design
//! - Storage is injected through [`KeyValueStore`] so the load/save rules run
//!   against an in-memory map in tests and `localStorage` in the browser.
//! - Values are raw strings: `auth` holds a JSON user, `app-lang` a bare code.
//! - Unreadable entries count as absent; they never block startup.

use crate::i18n::LocaleCode;
use hoaxify_api_models::AuthUser;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage key for the logged-in user.
pub const AUTH_KEY: &str = "auth";
/// Storage key for the chosen language code.
pub const LOCALE_KEY: &str = "app-lang";

/// Failure writing a preference.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The value could not be serialized.
    #[error("failed to encode {key}: {source}")]
    Encode {
        /// Storage key being written.
        key: &'static str,
        /// Underlying serializer error.
        source: serde_json::Error,
    },
    /// The backing store rejected the write (quota, privacy mode).
    #[error("storage rejected {key}: {detail}")]
    Storage {
        /// Storage key being written.
        key: &'static str,
        /// Backend-specific detail.
        detail: String,
    },
}

/// Minimal string key/value storage.
pub trait KeyValueStore {
    /// Read a raw value.
    fn read(&self, key: &str) -> Option<String>;
    /// Write a raw value.
    ///
    /// # Errors
    /// Returns [`PersistError::Storage`] when the backend refuses the write.
    fn write(&self, key: &'static str, value: &str) -> Result<(), PersistError>;
    /// Remove a value; missing keys are ignored.
    fn remove(&self, key: &str);
}

/// In-memory store used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), PersistError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Load/save rules for the two persisted preferences.
#[derive(Debug)]
pub struct Preferences<S> {
    storage: S,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wrap a storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Logged-in user saved by a previous session.
    #[must_use]
    pub fn load_auth(&self) -> Option<AuthUser> {
        let raw = self.storage.read(AUTH_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Save or clear the logged-in user.
    ///
    /// # Errors
    /// Returns an error when encoding or the storage write fails.
    pub fn save_auth(&self, user: Option<&AuthUser>) -> Result<(), PersistError> {
        match user {
            Some(user) => {
                let encoded = serde_json::to_string(user).map_err(|source| {
                    PersistError::Encode {
                        key: AUTH_KEY,
                        source,
                    }
                })?;
                self.storage.write(AUTH_KEY, &encoded)
            }
            None => {
                self.storage.remove(AUTH_KEY);
                Ok(())
            }
        }
    }

    /// Language chosen in a previous session.
    #[must_use]
    pub fn load_locale(&self) -> Option<LocaleCode> {
        self.storage
            .read(LOCALE_KEY)
            .and_then(|raw| LocaleCode::from_lang_tag(&raw))
    }

    /// Save the chosen language code.
    ///
    /// # Errors
    /// Returns an error when the storage write fails.
    pub fn save_locale(&self, locale: LocaleCode) -> Result<(), PersistError> {
        self.storage.write(LOCALE_KEY, locale.code())
    }
}
