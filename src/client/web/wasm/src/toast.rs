/* src/client/web/wasm/src/toast.rs */

use std::cell::Cell;

use landing_core::{Toast, ToastKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Node};

const BASE_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
  transform: translate(-50%, -50%); z-index: 1001; font-size: 14px;";

fn kind_style(kind: ToastKind) -> &'static str {
  match kind {
    ToastKind::Confirm => {
      "background: var(--primary-color); color: var(--bg-color); padding: 10px 20px; \
       border-radius: 5px;"
    }
    ToastKind::Error => {
      "background: var(--error-color, #d93025); color: #fff; padding: 10px 20px; \
       border-radius: 5px;"
    }
    ToastKind::Card => {
      "background: var(--card-bg); color: var(--text-color); padding: 20px; \
       border-radius: 10px; box-shadow: var(--hover-shadow); \
       border: 1px solid var(--border-color); max-width: 300px; text-align: center;"
    }
  }
}

/// The one toast element of the page. Hidden between toasts and refilled
/// with text nodes on every show.
pub struct ToastView {
  document: Document,
  root: HtmlElement,
  shown: Cell<Option<u64>>,
}

impl ToastView {
  pub fn mount(document: &Document) -> Result<Self, JsValue> {
    let root = document.create_element("div")?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    root.set_id("landing-toast");
    root.set_attribute("role", "status")?;
    root.set_attribute("aria-live", "polite")?;
    root.style().set_property("display", "none")?;
    document.body().ok_or_else(|| JsValue::from_str("document has no body"))?.append_child(&root)?;
    Ok(Self { document: document.clone(), root, shown: Cell::new(None) })
  }

  /// True when `target` is the toast or one of its descendants.
  pub fn contains(&self, target: Option<&Node>) -> bool {
    self.shown.get().is_some() && self.root.contains(target)
  }

  pub fn show(&self, id: u64, toast: &Toast) -> Result<(), JsValue> {
    self.root.set_text_content(None);
    let content = &toast.content;
    if let Some(title) = &content.title {
      self.append_block("strong", title)?;
    }
    let line_tag = if toast.kind == ToastKind::Card { "small" } else { "span" };
    for line in &content.lines {
      self.append_block(line_tag, line)?;
    }
    if let Some(code) = &content.code {
      self.append_block("code", code)?;
    }
    self.root.style().set_css_text(&format!("{BASE_STYLE} {}", kind_style(toast.kind)));
    self.root.set_attribute("data-kind", kind_name(toast.kind))?;
    self.shown.set(Some(id));
    Ok(())
  }

  pub fn hide(&self, id: u64) {
    if self.shown.get() != Some(id) {
      return;
    }
    self.shown.set(None);
    self.root.set_text_content(None);
    self.root.style().set_property("display", "none").ok();
  }

  fn append_block(&self, tag: &str, text: &str) -> Result<(), JsValue> {
    let el = self.document.create_element(tag)?;
    el.set_text_content(Some(text));
    el.set_attribute("style", "display: block;")?;
    self.root.append_child(&el)?;
    Ok(())
  }
}

fn kind_name(kind: ToastKind) -> &'static str {
  match kind {
    ToastKind::Confirm => "confirm",
    ToastKind::Error => "error",
    ToastKind::Card => "card",
  }
}
