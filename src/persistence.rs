use web_sys::Storage;

use crate::core::KeyValueStore;

/// `window.localStorage`. Reads fall back to "absent" and writes are
/// dropped when storage is unavailable.
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = storage();
        if inner.is_none() {
            log::warn!("localStorage unavailable, level progress will not persist");
        }
        Self { inner }
    }
}

fn storage() -> Option<Storage> {
    let window = web_sys::window()?;
    window.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(store) = self.inner.as_ref() else {
            return;
        };
        if store.set_item(key, value).is_err() {
            log::warn!("Failed to write {key} to localStorage");
        }
    }
}
