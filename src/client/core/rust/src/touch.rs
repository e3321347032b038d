/* src/client/core/rust/src/touch.rs */

use crate::config::TouchSection;
use crate::surface::Surface;

pub const HOVER_LIFT: &str = "translateY(-3px) scale(1.02)";
pub const PRESS_SCALE: &str = "scale(0.98)";

/// Hover lift and press feedback for cards and social links.
#[derive(Debug, Clone, Copy)]
pub struct TouchFeedback {
  hover: &'static str,
  press: &'static str,
  rest: &'static str,
  release_reset_ms: u32,
}

impl TouchFeedback {
  pub fn new(config: &TouchSection) -> Self {
    Self { hover: HOVER_LIFT, press: PRESS_SCALE, rest: "", release_reset_ms: config.release_reset_ms }
  }

  pub fn prepare<S: Surface>(&self, node: &S::Node, surface: &mut S) {
    surface.set_style(node, "-webkit-tap-highlight-color", "transparent");
    surface.set_style(node, "transform", self.rest);
  }

  pub fn pointer_enter<S: Surface>(&self, node: &S::Node, surface: &mut S) {
    surface.set_style(node, "transform", self.hover);
  }

  pub fn pointer_leave<S: Surface>(&self, node: &S::Node, surface: &mut S) {
    surface.set_style(node, "transform", self.rest);
  }

  pub fn touch_start<S: Surface>(&self, node: &S::Node, surface: &mut S) {
    surface.set_style(node, "transform", self.press);
  }

  /// Delay after touch end before `release` should run.
  pub fn release_delay_ms(&self) -> u32 {
    self.release_reset_ms
  }

  pub fn release<S: Surface>(&self, node: &S::Node, surface: &mut S) {
    surface.set_style(node, "transform", self.rest);
  }
}

/// Suppresses the browser's double-tap zoom: a touch end that follows the
/// previous one within the window should have its default prevented.
#[derive(Debug, Clone)]
pub struct DoubleTapGuard {
  window_ms: u32,
  last_touch_end: Option<f64>,
}

impl DoubleTapGuard {
  pub fn new(config: &TouchSection) -> Self {
    Self { window_ms: config.double_tap_ms, last_touch_end: None }
  }

  /// Returns true when the event should be default-prevented.
  pub fn on_touch_end(&mut self, now: f64) -> bool {
    let suppress = self.last_touch_end.is_some_and(|last| now - last <= f64::from(self.window_ms));
    self.last_touch_end = Some(now);
    suppress
  }
}
