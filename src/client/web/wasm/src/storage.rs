/* src/client/web/wasm/src/storage.rs */

use landing_core::{KeyValueBackend, LandingError, Result};
use web_sys::Storage;

/// `window.localStorage`, scoped to the page origin.
pub struct LocalStorageBackend {
  storage: Storage,
}

impl LocalStorageBackend {
  /// `None` when storage is disabled by the browser or its policy; touching
  /// `localStorage` throws in that case rather than returning null.
  pub fn open() -> Option<Self> {
    let storage = web_sys::window()?.local_storage().ok()??;
    Some(Self { storage })
  }
}

impl KeyValueBackend for LocalStorageBackend {
  fn read(&self, key: &str) -> Result<Option<String>> {
    self.storage.get_item(key).map_err(|e| LandingError::storage(format!("read {key}: {e:?}")))
  }

  fn write(&mut self, key: &str, value: &str) -> Result<()> {
    self.storage.set_item(key, value).map_err(|e| LandingError::storage(format!("write {key}: {e:?}")))
  }
}
