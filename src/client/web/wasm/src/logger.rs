/* src/client/web/wasm/src/logger.rs */

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
    match record.level() {
      Level::Error => console::error_1(&line),
      Level::Warn => console::warn_1(&line),
      Level::Info => console::info_1(&line),
      Level::Debug | Level::Trace => console::debug_1(&line),
    }
  }

  fn flush(&self) {}
}

pub fn parse_level(level: &str) -> LevelFilter {
  level.parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger. A second call only adjusts the level.
pub fn init(level: &str) {
  // Already installed by an earlier boot; keep it
  let _ = log::set_logger(&LOGGER);
  log::set_max_level(parse_level(level));
}
