/* src/client/core/rust/src/reveal.rs */

//! One-way fade/slide-in of page sections as they scroll into view.

use crate::config::RevealSection;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
  Hidden,
  Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
  Revealed,
  /// Already visible, or the signal was not an intersection.
  Unchanged,
}

struct Section<N> {
  node: N,
  state: RevealState,
}

pub struct RevealOnScroll<N> {
  sections: Vec<Section<N>>,
  threshold: f64,
  offset_px: u32,
  duration_ms: u32,
}

impl<N: Clone> RevealOnScroll<N> {
  pub fn new(config: &RevealSection, nodes: impl IntoIterator<Item = N>) -> Self {
    Self {
      sections: nodes.into_iter().map(|node| Section { node, state: RevealState::Hidden }).collect(),
      threshold: config.threshold,
      offset_px: config.offset_px,
      duration_ms: config.duration_ms,
    }
  }

  /// Intersection ratio the viewport watcher should be configured with.
  pub fn threshold(&self) -> f64 {
    self.threshold
  }

  pub fn len(&self) -> usize {
    self.sections.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sections.is_empty()
  }

  pub fn state(&self, index: usize) -> Option<RevealState> {
    self.sections.get(index).map(|s| s.state)
  }

  pub fn revealed_count(&self) -> usize {
    self.sections.iter().filter(|s| s.state == RevealState::Visible).count()
  }

  /// Put every section into its hidden, offset starting state.
  pub fn init<S: Surface<Node = N>>(&self, surface: &mut S) {
    let offset = format!("translateY({}px)", self.offset_px);
    let secs = f64::from(self.duration_ms) / 1000.0;
    let transition = format!("opacity {secs}s ease, transform {secs}s ease");
    for section in &self.sections {
      surface.set_style(&section.node, "opacity", "0");
      surface.set_style(&section.node, "transform", &offset);
      surface.set_style(&section.node, "transition", &transition);
    }
  }

  /// Feed one intersection signal for the section at `index`.
  pub fn on_intersection<S: Surface<Node = N>>(
    &mut self,
    index: usize,
    is_intersecting: bool,
    surface: &mut S,
  ) -> Transition {
    if !is_intersecting {
      return Transition::Unchanged;
    }
    let Some(section) = self.sections.get_mut(index) else {
      return Transition::Unchanged;
    };
    if section.state == RevealState::Visible {
      return Transition::Unchanged;
    }
    section.state = RevealState::Visible;
    surface.set_style(&section.node, "opacity", "1");
    surface.set_style(&section.node, "transform", "translateY(0)");
    Transition::Revealed
  }
}
