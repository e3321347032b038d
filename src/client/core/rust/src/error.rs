/* src/client/core/rust/src/error.rs */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingError {
  #[error("config: {0}")]
  Config(String),
  #[error("storage: {0}")]
  Storage(String),
  #[error("clipboard: {0}")]
  Clipboard(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;

impl LandingError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  pub fn storage(msg: impl Into<String>) -> Self {
    Self::Storage(msg.into())
  }

  pub fn clipboard(msg: impl Into<String>) -> Self {
    Self::Clipboard(msg.into())
  }
}

impl From<serde_json::Error> for LandingError {
  fn from(e: serde_json::Error) -> Self {
    Self::Config(format!("parse config: {e}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_carries_category() {
    assert_eq!(LandingError::storage("quota exceeded").to_string(), "storage: quota exceeded");
    assert_eq!(LandingError::clipboard("denied").to_string(), "clipboard: denied");
  }

  #[test]
  fn json_errors_become_config_errors() {
    let err: LandingError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, LandingError::Config(_)));
    assert!(err.to_string().starts_with("config: parse config:"));
  }
}
