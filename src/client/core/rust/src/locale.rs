/* src/client/core/rust/src/locale.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language of the page. Stored under the `language` preference key
/// and used as the `data-*` attribute suffix of translatable elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Zh,
  En,
}

impl Language {
  pub const ALL: [Language; 2] = [Language::Zh, Language::En];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Zh => "zh",
      Self::En => "en",
    }
  }

  /// Parse a stored or attribute value. Unknown values yield `None` so
  /// callers can fall back to their default.
  pub fn parse(value: &str) -> Option<Self> {
    match value.trim() {
      "zh" => Some(Self::Zh),
      "en" => Some(Self::En),
      _ => None,
    }
  }

  /// Name of the data attribute carrying this language's string.
  pub fn data_attribute(self) -> &'static str {
    match self {
      Self::Zh => "data-zh",
      Self::En => "data-en",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A string pair, one per language. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localized {
  pub zh: Option<String>,
  pub en: Option<String>,
}

impl Localized {
  pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
    Self { zh: Some(zh.into()), en: Some(en.into()) }
  }

  pub fn get(&self, lang: Language) -> Option<&str> {
    match lang {
      Language::Zh => self.zh.as_deref(),
      Language::En => self.en.as_deref(),
    }
  }

  pub fn is_complete(&self) -> bool {
    self.zh.is_some() && self.en.is_some()
  }
}

// --- Built-in UI messages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  Copied,
  CopyFailed,
  ClickToCopy,
  ComingSoon,
  QrUploadTitle,
  QrUploadBody,
}

impl Message {
  pub fn text(self, lang: Language) -> &'static str {
    match (self, lang) {
      (Self::Copied, Language::Zh) => "已复制到剪贴板",
      (Self::Copied, Language::En) => "Copied to clipboard",
      (Self::CopyFailed, Language::Zh) => "复制失败",
      (Self::CopyFailed, Language::En) => "Copy failed",
      (Self::ClickToCopy, Language::Zh) => "点击复制",
      (Self::ClickToCopy, Language::En) => "Click to copy",
      (Self::ComingSoon, Language::Zh) => "建设中",
      (Self::ComingSoon, Language::En) => "Coming soon",
      (Self::QrUploadTitle, Language::Zh) => "二维码上传",
      (Self::QrUploadTitle, Language::En) => "QR Code Upload",
      (Self::QrUploadBody, Language::Zh) => "替换此区域为您的微信公众号二维码",
      (Self::QrUploadBody, Language::En) => "Replace this area with your WeChat QR code",
    }
  }
}
