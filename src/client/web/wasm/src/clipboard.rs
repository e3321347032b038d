/* src/client/web/wasm/src/clipboard.rs */

use js_sys::Reflect;
use landing_core::{Clipboard, LandingError, Result};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `navigator.clipboard`, only present in secure contexts.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
  async fn write_text(&self, text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| LandingError::clipboard("no window"))?;
    let navigator = window.navigator();
    let available = Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if !available {
      return Err(LandingError::clipboard("clipboard API unavailable (insecure context?)"));
    }
    let promise = navigator.clipboard().write_text(text);
    JsFuture::from(promise)
      .await
      .map(|_| ())
      .map_err(|e| LandingError::clipboard(format!("{e:?}")))
  }
}
