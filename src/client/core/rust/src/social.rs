/* src/client/core/rust/src/social.rs */

use std::collections::BTreeMap;

use crate::config::SocialLinkConfig;
use crate::locale::{Language, Message};
use crate::toast::{Dismiss, Toast, ToastContent, ToastKind};

/// `window.open` arguments for external profile links: new browsing context,
/// no `window.opener`, no referrer.
pub const OPEN_TARGET: &str = "_blank";
pub const OPEN_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Bilibili,
  Douyin,
  Weibo,
  GitHub,
}

impl Platform {
  pub fn from_id(id: &str) -> Option<Self> {
    match id {
      "bilibili" => Some(Self::Bilibili),
      "douyin" => Some(Self::Douyin),
      "weibo" => Some(Self::Weibo),
      "github" => Some(Self::GitHub),
      _ => None,
    }
  }

  pub fn display_name(self, lang: Language) -> &'static str {
    match (self, lang) {
      (Self::Bilibili, Language::Zh) => "哔哩哔哩",
      (Self::Bilibili, Language::En) => "Bilibili",
      (Self::Douyin, Language::Zh) => "抖音",
      (Self::Douyin, Language::En) => "Douyin",
      (Self::Weibo, Language::Zh) => "微博",
      (Self::Weibo, Language::En) => "Weibo",
      (Self::GitHub, _) => "GitHub",
    }
  }
}

/// Display name for any platform id; unknown ids are shown as-is.
pub fn display_name(id: &str, lang: Language) -> String {
  Platform::from_id(id).map_or_else(|| id.to_string(), |p| p.display_name(lang).to_string())
}

/// `#`, a resolved `.../#`, or nothing at all.
pub fn is_placeholder_href(href: &str) -> bool {
  let href = href.trim();
  href.is_empty() || href == "#" || href.ends_with("/#")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
  Open { url: String },
  ComingSoon(Toast),
}

#[derive(Debug, Clone)]
pub struct SocialLinkResolver {
  links: BTreeMap<String, SocialLinkConfig>,
  qr_hint_ms: u32,
}

impl SocialLinkResolver {
  pub fn new(links: BTreeMap<String, SocialLinkConfig>, qr_hint_ms: u32) -> Self {
    Self { links, qr_hint_ms }
  }

  /// Record the href a link element carries in the page. A real URL there
  /// takes precedence over the configured one.
  pub fn bind_href(&mut self, id: &str, href: &str) {
    if is_placeholder_href(href) {
      self.links.entry(id.to_string()).or_insert_with(|| SocialLinkConfig {
        href: "#".to_string(),
        placeholder: None,
      });
      return;
    }
    let entry = self
      .links
      .entry(id.to_string())
      .or_insert_with(|| SocialLinkConfig { href: String::new(), placeholder: None });
    entry.href = href.to_string();
  }

  pub fn resolve(&self, id: &str, lang: Language) -> Resolution {
    match self.links.get(id) {
      Some(link) if !is_placeholder_href(&link.href) => Resolution::Open { url: link.href.clone() },
      link => Resolution::ComingSoon(self.coming_soon(id, link.and_then(|l| l.placeholder.clone()), lang)),
    }
  }

  fn coming_soon(&self, id: &str, placeholder: Option<String>, lang: Language) -> Toast {
    Toast {
      kind: ToastKind::Card,
      content: ToastContent {
        title: Some(display_name(id, lang)),
        lines: vec![Message::ComingSoon.text(lang).to_string()],
        code: placeholder,
      },
      dismiss: Dismiss::OutsideClick,
    }
  }

  /// Hint shown when the QR code area is clicked before a QR image is set.
  pub fn qr_upload_hint(&self, lang: Language) -> Toast {
    Toast {
      kind: ToastKind::Card,
      content: ToastContent {
        title: Some(Message::QrUploadTitle.text(lang).to_string()),
        lines: vec![Message::QrUploadBody.text(lang).to_string()],
        code: None,
      },
      dismiss: Dismiss::AfterMs(self.qr_hint_ms),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::LandingConfig;

  fn resolver() -> SocialLinkResolver {
    let config = LandingConfig::default();
    SocialLinkResolver::new(config.social, config.toast.qr_hint_ms)
  }

  #[test]
  fn placeholder_link_shows_name_and_url() {
    let Resolution::ComingSoon(toast) = resolver().resolve("github", Language::Zh) else {
      panic!("expected placeholder tooltip");
    };
    assert!(toast.content.contains("GitHub"));
    assert!(toast.content.contains("https://github.com/[???]"));
    assert!(toast.content.contains("建设中"));
    assert_eq!(toast.dismiss, Dismiss::OutsideClick);
  }

  #[test]
  fn platform_names_are_localized() {
    let Resolution::ComingSoon(zh) = resolver().resolve("bilibili", Language::Zh) else {
      panic!("expected placeholder tooltip");
    };
    let Resolution::ComingSoon(en) = resolver().resolve("bilibili", Language::En) else {
      panic!("expected placeholder tooltip");
    };
    assert_eq!(zh.content.title.as_deref(), Some("哔哩哔哩"));
    assert_eq!(en.content.title.as_deref(), Some("Bilibili"));
    assert_eq!(en.content.lines, ["Coming soon"]);
  }

  #[test]
  fn real_url_opens() {
    let mut resolver = resolver();
    resolver.bind_href("github", "https://github.com/canmi21");
    assert_eq!(
      resolver.resolve("github", Language::En),
      Resolution::Open { url: "https://github.com/canmi21".into() }
    );
  }

  #[test]
  fn page_placeholder_href_keeps_configured_url() {
    let mut resolver = SocialLinkResolver::new(
      [("weibo".to_string(), SocialLinkConfig { href: "https://weibo.com/u/1".into(), placeholder: None })]
        .into(),
      3000,
    );
    resolver.bind_href("weibo", "https://canmi.icu/#");
    assert_eq!(
      resolver.resolve("weibo", Language::Zh),
      Resolution::Open { url: "https://weibo.com/u/1".into() }
    );
  }

  #[test]
  fn unknown_platform_uses_id_as_name() {
    let Resolution::ComingSoon(toast) = resolver().resolve("mastodon", Language::En) else {
      panic!("expected placeholder tooltip");
    };
    assert_eq!(toast.content.title.as_deref(), Some("mastodon"));
    assert_eq!(toast.content.code, None);
  }

  #[test]
  fn placeholder_href_detection() {
    assert!(is_placeholder_href("#"));
    assert!(is_placeholder_href(""));
    assert!(is_placeholder_href("https://canmi.icu/#"));
    assert!(!is_placeholder_href("https://github.com/canmi21"));
    assert!(!is_placeholder_href("https://canmi.icu/#contact"));
  }

  #[test]
  fn qr_hint_is_timed() {
    let toast = resolver().qr_upload_hint(Language::En);
    assert_eq!(toast.content.title.as_deref(), Some("QR Code Upload"));
    assert_eq!(toast.dismiss, Dismiss::AfterMs(3000));
  }
}
