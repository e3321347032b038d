/* src/client/core/rust/src/language.rs */

use log::{debug, warn};

use crate::locale::{Language, Localized};
use crate::prefs::PreferenceStore;
use crate::surface::{Surface, TextSlot};

pub const ACTIVE_CLASS: &str = "active";

/// One translatable element, captured once at startup.
#[derive(Debug, Clone)]
pub struct TranslatableEntry<N> {
  pub node: N,
  pub slot: TextSlot,
  pub text: Localized,
}

/// A control that switches to a fixed language when clicked.
#[derive(Debug, Clone)]
pub struct SelectorEntry<N> {
  pub node: N,
  pub language: Language,
}

/// Element registry for the language switcher. Built once from the page and
/// iterated directly on every switch.
#[derive(Debug, Clone)]
pub struct TextRegistry<N> {
  entries: Vec<TranslatableEntry<N>>,
  selectors: Vec<SelectorEntry<N>>,
}

impl<N> Default for TextRegistry<N> {
  fn default() -> Self {
    Self { entries: Vec::new(), selectors: Vec::new() }
  }
}

impl<N> TextRegistry<N> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn translatable(&mut self, node: N, slot: TextSlot, text: Localized) -> &mut Self {
    if !text.is_complete() {
      warn!("translatable element is missing a language variant: {text:?}");
    }
    self.entries.push(TranslatableEntry { node, slot, text });
    self
  }

  pub fn selector(&mut self, node: N, language: Language) -> &mut Self {
    self.selectors.push(SelectorEntry { node, language });
    self
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn selectors(&self) -> &[SelectorEntry<N>] {
    &self.selectors
  }
}

pub struct LanguageSwitcher<N> {
  current: Language,
  registry: TextRegistry<N>,
}

impl<N: Clone> LanguageSwitcher<N> {
  pub fn new(prefs: &mut PreferenceStore, registry: TextRegistry<N>) -> Self {
    Self { current: prefs.language(), registry }
  }

  pub fn current(&self) -> Language {
    self.current
  }

  pub fn registry(&self) -> &TextRegistry<N> {
    &self.registry
  }

  pub fn set_language<S>(&mut self, lang: Language, prefs: &mut PreferenceStore, surface: &mut S)
  where
    S: Surface<Node = N>,
  {
    self.current = lang;
    prefs.set_language(lang);

    for selector in &self.registry.selectors {
      surface.toggle_class(&selector.node, ACTIVE_CLASS, selector.language == lang);
    }

    let mut skipped = 0usize;
    for entry in &self.registry.entries {
      // Missing variant: keep whatever the element shows now
      let Some(text) = entry.text.get(lang) else {
        skipped += 1;
        continue;
      };
      match entry.slot {
        TextSlot::Content => surface.set_text(&entry.node, text),
        TextSlot::Placeholder => surface.set_placeholder(&entry.node, text),
      }
    }
    debug!("language applied: {lang} ({} elements, {skipped} skipped)", self.registry.len());
  }

  /// Re-apply the current language, e.g. right after startup.
  pub fn refresh<S>(&mut self, prefs: &mut PreferenceStore, surface: &mut S)
  where
    S: Surface<Node = N>,
  {
    self.set_language(self.current, prefs, surface);
  }
}
