//! Cross-platform persistent storage and the bearer-token store.
//!
//! Raw storage backends:
//! - Web: `localStorage`
//! - Desktop: one file per key in the platform config directory:
//!   - Linux: `~/.config/vitrine/`
//!   - macOS: `~/Library/Application Support/vitrine/`
//!   - Windows: `%APPDATA%\vitrine\`
//!
//! The token is stored as the raw string, not JSON-encoded, so a token
//! written by the web build is readable by any other client of the same
//! `localStorage` key.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TOKEN_STORAGE_KEY;

/// Persistence for the session's bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by the platform storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        load_raw(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
    }

    fn save(&self, token: &str) {
        if !save_raw(TOKEN_STORAGE_KEY, token) {
            crate::log_warn!("Could not persist session token");
        }
    }

    fn clear(&self) {
        remove_raw(TOKEN_STORAGE_KEY);
    }
}

/// In-memory token store for headless use and tests. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return storage.set_item(key, value).is_ok();
        }
    }
    false
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn get_config_dir() -> Option<std::path::PathBuf> {
    let app_dir = dirs::config_dir()?.join("vitrine");
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir).ok()?;
    }
    Some(app_dir)
}

#[cfg(not(target_arch = "wasm32"))]
fn get_file_path(key: &str) -> Option<std::path::PathBuf> {
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(get_config_dir()?.join(safe_key))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> bool {
    let Some(path) = get_file_path(key) else {
        return false;
    };
    std::fs::write(path, value).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    let path = get_file_path(key)?;
    std::fs::read_to_string(path).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = get_file_path(key) {
        let _ = std::fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_the_token() {
        let store = MemoryTokenStore::default();
        let view = store.clone();
        assert_eq!(view.load(), None);

        store.save("abc");
        assert_eq!(view.load().as_deref(), Some("abc"));

        view.clear();
        assert_eq!(store.load(), None);
    }
}
