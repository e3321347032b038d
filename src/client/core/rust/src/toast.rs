/* src/client/core/rust/src/toast.rs */

//! Single reusable toast with a queue of pending messages.
//!
//! The host is a clock-driven state machine: every call takes the current
//! time in milliseconds and returns the show/hide events the DOM layer has to
//! render. At most one toast is visible at any time.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
  /// Short single-line confirmation.
  Confirm,
  Error,
  /// Centered card with a title, body lines and an optional code line.
  Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
  AfterMs(u32),
  /// Closed by the first click outside the toast.
  OutsideClick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastContent {
  pub title: Option<String>,
  pub lines: Vec<String>,
  pub code: Option<String>,
}

impl ToastContent {
  /// Every piece of text in display order.
  pub fn text(&self) -> Vec<&str> {
    self
      .title
      .iter()
      .chain(self.lines.iter())
      .chain(self.code.iter())
      .map(String::as_str)
      .collect()
  }

  pub fn contains(&self, needle: &str) -> bool {
    self.text().iter().any(|t| t.contains(needle))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub kind: ToastKind,
  pub content: ToastContent,
  pub dismiss: Dismiss,
}

impl Toast {
  pub fn message(kind: ToastKind, text: impl Into<String>, after_ms: u32) -> Self {
    Self {
      kind,
      content: ToastContent { lines: vec![text.into()], ..ToastContent::default() },
      dismiss: Dismiss::AfterMs(after_ms),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
  Show { id: u64, toast: Toast },
  Hide { id: u64 },
}

struct Active {
  id: u64,
  dismiss: Dismiss,
  shown_at: f64,
}

pub struct ToastHost {
  queue: VecDeque<Toast>,
  active: Option<Active>,
  next_id: u64,
  outside_click_arm_ms: u32,
}

impl ToastHost {
  pub fn new(outside_click_arm_ms: u32) -> Self {
    Self { queue: VecDeque::new(), active: None, next_id: 1, outside_click_arm_ms }
  }

  pub fn active_id(&self) -> Option<u64> {
    self.active.as_ref().map(|a| a.id)
  }

  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  /// When the visible toast expires, if it expires on a timer.
  pub fn next_deadline(&self) -> Option<f64> {
    let active = self.active.as_ref()?;
    match active.dismiss {
      Dismiss::AfterMs(ms) => Some(active.shown_at + f64::from(ms)),
      Dismiss::OutsideClick => None,
    }
  }

  /// Milliseconds to wait before the next `tick`, or `None` when no timer
  /// is needed. Ask again after every `tick`: a tick that fires early keeps
  /// the toast and needs a fresh timer.
  pub fn expiry_delay(&self, now: f64) -> Option<u32> {
    let remaining = (self.next_deadline()? - now).max(0.0).ceil();
    Some((remaining as u32).max(1))
  }

  pub fn push(&mut self, toast: Toast, now: f64) -> Vec<ToastEvent> {
    self.queue.push_back(toast);
    if self.active.is_some() {
      return vec![];
    }
    self.promote(now).into_iter().collect()
  }

  /// Expire the visible toast if its timer ran out and show the next one.
  pub fn tick(&mut self, now: f64) -> Vec<ToastEvent> {
    match self.next_deadline() {
      Some(deadline) if now >= deadline => self.close_active(now),
      _ => vec![],
    }
  }

  /// A click landed outside the visible toast.
  pub fn click_outside(&mut self, now: f64) -> Vec<ToastEvent> {
    let Some(active) = &self.active else { return vec![] };
    let armed = now - active.shown_at >= f64::from(self.outside_click_arm_ms);
    if active.dismiss == Dismiss::OutsideClick && armed { self.close_active(now) } else { vec![] }
  }

  fn close_active(&mut self, now: f64) -> Vec<ToastEvent> {
    let Some(active) = self.active.take() else { return vec![] };
    let mut events = vec![ToastEvent::Hide { id: active.id }];
    events.extend(self.promote(now));
    events
  }

  fn promote(&mut self, now: f64) -> Option<ToastEvent> {
    let toast = self.queue.pop_front()?;
    let id = self.next_id;
    self.next_id += 1;
    self.active = Some(Active { id, dismiss: toast.dismiss, shown_at: now });
    Some(ToastEvent::Show { id, toast })
  }
}
