/* src/client/web/wasm/src/lib.rs */

mod app;
mod clipboard;
mod dom;
mod logger;
mod storage;
mod toast;

use std::rc::Rc;

use landing_core::{LandingConfig, Language};
use wasm_bindgen::prelude::*;

/// Handle returned to the page script. Holds the running page; dropping it
/// on the JS side leaves listeners in place for the page lifetime.
#[wasm_bindgen]
pub struct Landing {
  app: Rc<app::App>,
}

#[wasm_bindgen]
impl Landing {
  pub fn language(&self) -> String {
    self.app.language().as_str().to_string()
  }

  /// Switch to `lang` (`"zh"` or `"en"`).
  pub fn set_language(&self, lang: &str) -> Result<(), JsValue> {
    let lang = Language::parse(lang).ok_or_else(|| JsValue::from_str(&format!("unknown language: {lang}")))?;
    self.app.set_language(lang);
    Ok(())
  }

  pub fn theme(&self) -> String {
    self.app.theme().to_string()
  }

  pub fn toggle_theme(&self) -> String {
    self.app.toggle_theme().to_string()
  }

  /// Copy `text` and show the localized confirmation toast.
  pub fn copy_to_clipboard(&self, text: String) {
    self.app.copy(text);
  }
}

/// Start the page. `config_json` may be empty; an invalid config is logged
/// and replaced by defaults so the page still works.
#[wasm_bindgen]
pub fn boot(config_json: &str) -> Result<Landing, JsValue> {
  let (config, config_error) = match LandingConfig::from_json(config_json) {
    Ok(config) => (config, None),
    Err(e) => (LandingConfig::default(), Some(e)),
  };
  logger::init(&config.log_level);
  if let Some(e) = config_error {
    log::error!("{e}; falling back to defaults");
  }

  let document = web_sys::window()
    .and_then(|w| w.document())
    .ok_or_else(|| JsValue::from_str("no document to attach to"))?;
  let app = app::start(&config, &document)?;
  Ok(Landing { app })
}
