//! Persistence and environment helpers for the app shell.

use crate::core::persist::{KeyValueStore, PersistError, Preferences};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// `localStorage` with raw string values (no JSON quoting), so `app-lang`
/// holds `tr` rather than `"tr"`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), PersistError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| PersistError::Storage {
                key,
                detail: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            console::warn!("storage remove failed", key.to_string());
        }
    }
}

pub(crate) const fn preferences() -> Preferences<BrowserStorage> {
    Preferences::new(BrowserStorage)
}

pub(crate) fn browser_language() -> Option<String> {
    window().navigator().language()
}

pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| String::new())
}

pub(crate) fn log_persist_error(err: &PersistError) {
    console::error!("storage operation failed", err.to_string());
}
