/* src/client/core/rust/src/clipboard.rs */

use std::future::Future;

use log::warn;

use crate::config::ToastSection;
use crate::error::Result;
use crate::locale::{Language, Message};
use crate::toast::{Toast, ToastKind};

/// System clipboard. The browser binding wraps `navigator.clipboard`.
pub trait Clipboard {
  fn write_text(&self, text: &str) -> impl Future<Output = Result<()>>;
}

#[derive(Debug, Clone, Copy)]
pub struct ClipboardHelper {
  confirm_ms: u32,
}

impl ClipboardHelper {
  pub fn new(toast: &ToastSection) -> Self {
    Self { confirm_ms: toast.confirm_ms }
  }

  /// Write `text` and build the toast reporting the outcome. The toast is
  /// only produced once the write has completed.
  pub async fn copy<C: Clipboard>(&self, clipboard: &C, text: &str, lang: Language) -> Toast {
    match clipboard.write_text(text).await {
      Ok(()) => self.confirmation(lang),
      Err(e) => {
        warn!("copy to clipboard failed: {e}");
        self.failure(lang)
      }
    }
  }

  pub fn confirmation(&self, lang: Language) -> Toast {
    Toast::message(ToastKind::Confirm, Message::Copied.text(lang), self.confirm_ms)
  }

  pub fn failure(&self, lang: Language) -> Toast {
    Toast::message(ToastKind::Error, Message::CopyFailed.text(lang), self.confirm_ms)
  }
}

/// Address part of a `mailto:` link, without any `?subject=` query.
pub fn mailto_address(href: &str) -> Option<&str> {
  let rest = href.strip_prefix("mailto:")?;
  let address = rest.split('?').next().unwrap_or(rest).trim();
  if address.is_empty() { None } else { Some(address) }
}

/// Text a `.copy-text` element copies: its `data-text` when non-empty,
/// otherwise its visible text.
pub fn copy_source<'a>(data_text: Option<&'a str>, text_content: &'a str) -> &'a str {
  match data_text {
    Some(text) if !text.is_empty() => text,
    _ => text_content.trim(),
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use futures::executor::block_on;

  use super::*;
  use crate::error::LandingError;
  use crate::toast::Dismiss;

  #[derive(Default)]
  struct FakeClipboard {
    written: RefCell<Vec<String>>,
    refuse: bool,
  }

  impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
      if self.refuse {
        return Err(LandingError::clipboard("NotAllowedError: Document is not focused"));
      }
      self.written.borrow_mut().push(text.to_string());
      Ok(())
    }
  }

  fn helper() -> ClipboardHelper {
    ClipboardHelper::new(&ToastSection::default())
  }

  #[test]
  fn confirmation_follows_language() {
    let clipboard = FakeClipboard::default();
    let zh = block_on(helper().copy(&clipboard, "test@example.com", Language::Zh));
    let en = block_on(helper().copy(&clipboard, "test@example.com", Language::En));

    assert_eq!(zh.content.lines, ["已复制到剪贴板"]);
    assert_eq!(en.content.lines, ["Copied to clipboard"]);
    assert_eq!(en.kind, ToastKind::Confirm);
    assert_eq!(en.dismiss, Dismiss::AfterMs(2000));
    assert_eq!(*clipboard.written.borrow(), ["test@example.com", "test@example.com"]);
  }

  #[test]
  fn failure_produces_error_toast() {
    let clipboard = FakeClipboard { refuse: true, ..FakeClipboard::default() };
    let toast = block_on(helper().copy(&clipboard, "wx_id", Language::En));
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.content.lines, ["Copy failed"]);
  }

  #[test]
  fn mailto_strips_scheme_and_query() {
    assert_eq!(mailto_address("mailto:test@example.com"), Some("test@example.com"));
    assert_eq!(mailto_address("mailto:hi@canmi.icu?subject=Hello"), Some("hi@canmi.icu"));
    assert_eq!(mailto_address("mailto:"), None);
    assert_eq!(mailto_address("https://example.com"), None);
  }

  #[test]
  fn copy_source_prefers_data_text() {
    assert_eq!(copy_source(Some("wechat_id"), "微信: wechat_id"), "wechat_id");
    assert_eq!(copy_source(Some(""), " 13800000000 "), "13800000000");
    assert_eq!(copy_source(None, "plain"), "plain");
  }
}
