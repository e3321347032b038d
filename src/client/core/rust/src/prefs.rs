/* src/client/core/rust/src/prefs.rs */

//! Persistent page preferences (language, theme).
//!
//! Values go through a `KeyValueBackend` (localStorage in the browser). A
//! session map shadows the backend so a refused read or write degrades the
//! store to memory-only for the rest of the page lifetime instead of failing.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::{DefaultsSection, StorageSection};
use crate::error::Result;
use crate::locale::Language;
use crate::theme::Theme;

pub trait KeyValueBackend {
  fn read(&self, key: &str) -> Result<Option<String>>;
  fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Backend that lives only as long as the value itself.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
  entries: HashMap<String, String>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueBackend for MemoryBackend {
  fn read(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn write(&mut self, key: &str, value: &str) -> Result<()> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

pub struct PreferenceStore {
  backend: Option<Box<dyn KeyValueBackend>>,
  session: HashMap<String, String>,
  keys: StorageSection,
  defaults: DefaultsSection,
}

impl PreferenceStore {
  /// `None` backend means storage is unavailable from the start.
  pub fn new(
    backend: Option<Box<dyn KeyValueBackend>>,
    keys: StorageSection,
    defaults: DefaultsSection,
  ) -> Self {
    if backend.is_none() {
      warn!("preference storage unavailable, keeping preferences in memory");
    }
    Self { backend, session: HashMap::new(), keys, defaults }
  }

  pub fn in_memory() -> Self {
    Self::new(Some(Box::new(MemoryBackend::new())), StorageSection::default(), DefaultsSection::default())
  }

  pub fn is_persistent(&self) -> bool {
    self.backend.is_some()
  }

  /// Hand the backend back, e.g. to build a fresh store over the same data.
  pub fn into_backend(self) -> Option<Box<dyn KeyValueBackend>> {
    self.backend
  }

  pub fn get(&mut self, key: &str) -> Option<String> {
    if let Some(value) = self.session.get(key) {
      return Some(value.clone());
    }
    let backend = self.backend.as_ref()?;
    match backend.read(key) {
      Ok(value) => value,
      Err(e) => {
        self.degrade(&e.to_string());
        None
      }
    }
  }

  pub fn get_or(&mut self, key: &str, default: &str) -> String {
    self.get(key).unwrap_or_else(|| default.to_string())
  }

  pub fn set(&mut self, key: &str, value: &str) {
    self.session.insert(key.to_string(), value.to_string());
    let Some(backend) = self.backend.as_mut() else { return };
    match backend.write(key, value) {
      Ok(()) => debug!("preference {key} = {value}"),
      Err(e) => self.degrade(&e.to_string()),
    }
  }

  // --- Typed accessors ---

  /// Stored language, or the configured default when unset or unrecognized.
  pub fn language(&mut self) -> Language {
    let key = self.keys.language_key.clone();
    self.get(&key).and_then(|v| Language::parse(&v)).unwrap_or(self.defaults.language)
  }

  pub fn set_language(&mut self, lang: Language) {
    let key = self.keys.language_key.clone();
    self.set(&key, lang.as_str());
  }

  pub fn theme(&mut self) -> Theme {
    let key = self.keys.theme_key.clone();
    self.get(&key).and_then(|v| Theme::parse(&v)).unwrap_or(self.defaults.theme)
  }

  pub fn set_theme(&mut self, theme: Theme) {
    let key = self.keys.theme_key.clone();
    self.set(&key, theme.as_str());
  }

  fn degrade(&mut self, reason: &str) {
    warn!("preference storage failed ({reason}), keeping preferences in memory");
    self.backend = None;
  }
}

#[cfg(test)]
pub(crate) mod testing {
  use std::cell::Cell;
  use std::rc::Rc;

  use super::*;
  use crate::error::LandingError;

  /// Backend that refuses every operation; counts the attempts.
  #[derive(Debug, Default, Clone)]
  pub struct RefusingBackend {
    pub attempts: Rc<Cell<usize>>,
  }

  impl KeyValueBackend for RefusingBackend {
    fn read(&self, _key: &str) -> Result<Option<String>> {
      self.attempts.set(self.attempts.get() + 1);
      Err(LandingError::storage("SecurityError: storage disabled"))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
      self.attempts.set(self.attempts.get() + 1);
      Err(LandingError::storage("QuotaExceededError"))
    }
  }
}
