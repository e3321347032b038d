/* src/client/core/rust/src/lib.rs */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod language;
pub mod locale;
pub mod page;
pub mod prefs;
pub mod reveal;
pub mod social;
pub mod surface;
pub mod theme;
pub mod toast;
pub mod touch;

#[cfg(test)]
mod tests;

// Public API re-exports
pub use clipboard::{Clipboard, ClipboardHelper, copy_source, mailto_address};
pub use config::LandingConfig;
pub use error::{LandingError, Result};
pub use language::{LanguageSwitcher, TextRegistry};
pub use locale::{Language, Localized, Message};
pub use page::{LandingPage, PageParts, SocialAction};
pub use prefs::{KeyValueBackend, MemoryBackend, PreferenceStore};
pub use reveal::{RevealOnScroll, RevealState, Transition};
pub use social::{OPEN_FEATURES, OPEN_TARGET, Platform, SocialLinkResolver, is_placeholder_href};
pub use surface::{Surface, TextSlot};
pub use theme::{THEME_ATTRIBUTE, Theme, ThemeIcons, ThemeSwitcher};
pub use toast::{Dismiss, Toast, ToastContent, ToastEvent, ToastHost, ToastKind};
pub use touch::{DoubleTapGuard, TouchFeedback};
