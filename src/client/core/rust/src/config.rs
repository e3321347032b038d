/* src/client/core/rust/src/config.rs */

//! Page configuration, handed over as JSON by the boot script.
//! Every field has a default so an empty object is a valid config.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::{LandingError, Result};
use crate::locale::Language;
use crate::theme::Theme;

#[derive(Debug, Clone, Deserialize)]
pub struct LandingConfig {
  #[serde(default)]
  pub storage: StorageSection,
  #[serde(default)]
  pub defaults: DefaultsSection,
  #[serde(default)]
  pub reveal: RevealSection,
  #[serde(default)]
  pub toast: ToastSection,
  #[serde(default)]
  pub touch: TouchSection,
  /// Entries are merged over the built-in platforms; unlisted ones keep
  /// their placeholder.
  #[serde(default = "default_social", deserialize_with = "merge_social")]
  pub social: BTreeMap<String, SocialLinkConfig>,
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for LandingConfig {
  fn default() -> Self {
    Self {
      storage: StorageSection::default(),
      defaults: DefaultsSection::default(),
      reveal: RevealSection::default(),
      toast: ToastSection::default(),
      touch: TouchSection::default(),
      social: default_social(),
      log_level: default_log_level(),
    }
  }
}

impl LandingConfig {
  /// Parse a JSON config. Empty or whitespace-only input means defaults.
  pub fn from_json(json: &str) -> Result<Self> {
    if json.trim().is_empty() {
      return Ok(Self::default());
    }
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    let storage = &self.storage;
    if storage.language_key.is_empty() || storage.theme_key.is_empty() {
      return Err(LandingError::config("storage keys must not be empty"));
    }
    if storage.language_key == storage.theme_key {
      return Err(LandingError::config(format!(
        "storage.language_key and storage.theme_key are both \"{}\"",
        storage.language_key
      )));
    }
    if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
      return Err(LandingError::config(format!(
        "reveal.threshold must be in (0, 1], got {}",
        self.reveal.threshold
      )));
    }
    if self.toast.confirm_ms == 0 || self.toast.qr_hint_ms == 0 {
      return Err(LandingError::config("toast delays must be positive"));
    }
    Ok(())
  }
}

// --- Sections ---

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
  #[serde(default = "default_language_key")]
  pub language_key: String,
  #[serde(default = "default_theme_key")]
  pub theme_key: String,
}

impl Default for StorageSection {
  fn default() -> Self {
    Self { language_key: default_language_key(), theme_key: default_theme_key() }
  }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DefaultsSection {
  #[serde(default)]
  pub language: Language,
  #[serde(default)]
  pub theme: Theme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevealSection {
  #[serde(default = "default_reveal_selector")]
  pub selector: String,
  /// Fraction of the section that must be visible before it reveals.
  #[serde(default = "default_reveal_threshold")]
  pub threshold: f64,
  #[serde(default = "default_reveal_offset")]
  pub offset_px: u32,
  #[serde(default = "default_reveal_duration")]
  pub duration_ms: u32,
}

impl Default for RevealSection {
  fn default() -> Self {
    Self {
      selector: default_reveal_selector(),
      threshold: default_reveal_threshold(),
      offset_px: default_reveal_offset(),
      duration_ms: default_reveal_duration(),
    }
  }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ToastSection {
  #[serde(default = "default_confirm_ms")]
  pub confirm_ms: u32,
  #[serde(default = "default_qr_hint_ms")]
  pub qr_hint_ms: u32,
  /// Grace period before an outside click may close a tooltip, so the
  /// click that opened it does not close it again.
  #[serde(default = "default_outside_click_arm_ms")]
  pub outside_click_arm_ms: u32,
}

impl Default for ToastSection {
  fn default() -> Self {
    Self {
      confirm_ms: default_confirm_ms(),
      qr_hint_ms: default_qr_hint_ms(),
      outside_click_arm_ms: default_outside_click_arm_ms(),
    }
  }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TouchSection {
  #[serde(default = "default_double_tap_ms")]
  pub double_tap_ms: u32,
  #[serde(default = "default_release_reset_ms")]
  pub release_reset_ms: u32,
}

impl Default for TouchSection {
  fn default() -> Self {
    Self { double_tap_ms: default_double_tap_ms(), release_reset_ms: default_release_reset_ms() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLinkConfig {
  /// Link target; `#` (or empty) marks a platform that is not set up yet.
  #[serde(default = "default_href")]
  pub href: String,
  /// Shown in the "coming soon" tooltip while `href` is a placeholder.
  #[serde(default)]
  pub placeholder: Option<String>,
}

fn default_language_key() -> String {
  "language".to_string()
}

fn default_theme_key() -> String {
  "theme".to_string()
}

fn default_reveal_selector() -> String {
  ".section".to_string()
}

fn default_reveal_threshold() -> f64 {
  0.1
}

fn default_reveal_offset() -> u32 {
  20
}

fn default_reveal_duration() -> u32 {
  600
}

fn default_confirm_ms() -> u32 {
  2000
}

fn default_qr_hint_ms() -> u32 {
  3000
}

fn default_outside_click_arm_ms() -> u32 {
  100
}

fn default_double_tap_ms() -> u32 {
  300
}

fn default_release_reset_ms() -> u32 {
  150
}

fn default_href() -> String {
  "#".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_social() -> BTreeMap<String, SocialLinkConfig> {
  [
    ("bilibili", "https://space.bilibili.com/[???]"),
    ("douyin", "https://www.douyin.com/user/[???]"),
    ("weibo", "https://weibo.com/[???]"),
    ("github", "https://github.com/[???]"),
  ]
  .into_iter()
  .map(|(id, placeholder)| {
    (id.to_string(), SocialLinkConfig { href: default_href(), placeholder: Some(placeholder.into()) })
  })
  .collect()
}

fn merge_social<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, SocialLinkConfig>, D::Error>
where
  D: Deserializer<'de>,
{
  let overrides = BTreeMap::<String, SocialLinkConfig>::deserialize(deserializer)?;
  let mut social = default_social();
  social.extend(overrides);
  Ok(social)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_uses_defaults() {
    let config = LandingConfig::from_json("").unwrap();
    assert_eq!(config.storage.language_key, "language");
    assert_eq!(config.storage.theme_key, "theme");
    assert_eq!(config.defaults.language, Language::Zh);
    assert_eq!(config.defaults.theme, Theme::Light);
    assert_eq!(config.reveal.selector, ".section");
    assert!((config.reveal.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.toast.confirm_ms, 2000);
    assert_eq!(config.toast.qr_hint_ms, 3000);
    assert_eq!(config.touch.double_tap_ms, 300);
    assert_eq!(config.log_level, "info");
  }

  #[test]
  fn default_impl_matches_empty_object() {
    let from_json = LandingConfig::from_json("{}").unwrap();
    let built = LandingConfig::default();
    assert_eq!(from_json.social, built.social);
    assert_eq!(from_json.log_level, built.log_level);
    assert_eq!(from_json.reveal.offset_px, built.reveal.offset_px);
    assert!(built.validate().is_ok());
  }

  #[test]
  fn default_social_platforms_are_placeholders() {
    let config = LandingConfig::from_json("{}").unwrap();
    let ids: Vec<&str> = config.social.keys().map(String::as_str).collect();
    assert_eq!(ids, ["bilibili", "douyin", "github", "weibo"]);
    let github = &config.social["github"];
    assert_eq!(github.href, "#");
    assert_eq!(github.placeholder.as_deref(), Some("https://github.com/[???]"));
  }

  #[test]
  fn partial_sections_keep_field_defaults() {
    let config = LandingConfig::from_json(
      r#"{"defaults": {"language": "en"}, "toast": {"confirm_ms": 1500}}"#,
    )
    .unwrap();
    assert_eq!(config.defaults.language, Language::En);
    assert_eq!(config.defaults.theme, Theme::Light);
    assert_eq!(config.toast.confirm_ms, 1500);
    assert_eq!(config.toast.qr_hint_ms, 3000);
  }

  #[test]
  fn social_entries_merge_over_defaults() {
    let config =
      LandingConfig::from_json(r#"{"social": {"github": {"href": "https://github.com/canmi21"}}}"#)
        .unwrap();
    assert_eq!(config.social["github"].href, "https://github.com/canmi21");
    assert_eq!(config.social["github"].placeholder, None);
    // Platforms left out keep their placeholder tooltip
    assert_eq!(config.social.len(), 4);
    assert_eq!(config.social["weibo"].placeholder.as_deref(), Some("https://weibo.com/[???]"));
  }

  #[test]
  fn social_entries_can_add_platforms() {
    let config = LandingConfig::from_json(r#"{"social": {"mastodon": {"href": "https://mastodon.social/@me"}}}"#)
      .unwrap();
    assert_eq!(config.social.len(), 5);
    assert_eq!(config.social["mastodon"].href, "https://mastodon.social/@me");
    assert_eq!(config.social["github"].href, "#");
  }

  #[test]
  fn rejects_shared_storage_key() {
    let err = LandingConfig::from_json(r#"{"storage": {"language_key": "prefs", "theme_key": "prefs"}}"#)
      .unwrap_err();
    assert!(err.to_string().contains("both \"prefs\""));
  }

  #[test]
  fn rejects_out_of_range_threshold() {
    assert!(LandingConfig::from_json(r#"{"reveal": {"threshold": 0}}"#).is_err());
    assert!(LandingConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).is_err());
    assert!(LandingConfig::from_json(r#"{"reveal": {"threshold": 1}}"#).is_ok());
  }

  #[test]
  fn rejects_zero_toast_delay() {
    assert!(LandingConfig::from_json(r#"{"toast": {"qr_hint_ms": 0}}"#).is_err());
  }

  #[test]
  fn rejects_unknown_default_language() {
    let err = LandingConfig::from_json(r#"{"defaults": {"language": "fr"}}"#).unwrap_err();
    assert!(matches!(err, LandingError::Config(_)));
  }
}
