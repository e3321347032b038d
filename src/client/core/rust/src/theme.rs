/* src/client/core/rust/src/theme.rs */

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::prefs::PreferenceStore;
use crate::surface::Surface;

pub const THEME_ATTRIBUTE: &str = "data-theme";

const ICON_ACTIVE_OPACITY: &str = "1";
const ICON_DIMMED_OPACITY: &str = "0.5";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }

  pub fn parse(value: &str) -> Option<Self> {
    match value.trim() {
      "light" => Some(Self::Light),
      "dark" => Some(Self::Dark),
      _ => None,
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The two indicator icons inside the theme toggle.
#[derive(Debug, Clone)]
pub struct ThemeIcons<N> {
  pub sun: N,
  pub moon: N,
}

pub struct ThemeSwitcher<N> {
  current: Theme,
  icons: Option<ThemeIcons<N>>,
}

impl<N: Clone> ThemeSwitcher<N> {
  pub fn new(prefs: &mut PreferenceStore, icons: Option<ThemeIcons<N>>) -> Self {
    Self { current: prefs.theme(), icons }
  }

  pub fn current(&self) -> Theme {
    self.current
  }

  pub fn set_theme<S>(&mut self, theme: Theme, prefs: &mut PreferenceStore, surface: &mut S)
  where
    S: Surface<Node = N>,
  {
    self.current = theme;
    prefs.set_theme(theme);
    surface.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());

    if let Some(icons) = &self.icons {
      let (sun, moon) = match theme {
        Theme::Light => (ICON_ACTIVE_OPACITY, ICON_DIMMED_OPACITY),
        Theme::Dark => (ICON_DIMMED_OPACITY, ICON_ACTIVE_OPACITY),
      };
      surface.set_style(&icons.sun, "opacity", sun);
      surface.set_style(&icons.moon, "opacity", moon);
    }
    debug!("theme applied: {theme}");
  }

  pub fn toggle<S>(&mut self, prefs: &mut PreferenceStore, surface: &mut S) -> Theme
  where
    S: Surface<Node = N>,
  {
    let next = self.current.toggled();
    self.set_theme(next, prefs, surface);
    next
  }
}
