//! Theme persistence in local storage.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use oxygen_core::{ThemeConfig, ThemeMode};
use serde::Serialize;

use crate::demo::{OVERRIDES_KEY, THEME_KEY, stored_overrides, stored_theme};

pub(crate) fn load_theme() -> ThemeMode {
    let stored = LocalStorage::get::<String>(THEME_KEY).ok();
    stored_theme(stored.as_deref())
}

pub(crate) fn save_theme(mode: ThemeMode) {
    set_storage(THEME_KEY, mode.as_str());
}

pub(crate) fn load_overrides() -> ThemeConfig {
    let stored = LocalStorage::get::<String>(OVERRIDES_KEY).ok();
    let (config, error) = stored_overrides(stored.as_deref());
    if let Some(detail) = error {
        console::warn!("ignoring stored theme overrides", OVERRIDES_KEY, detail);
    }
    config
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", "set", key, err.to_string());
    }
}
