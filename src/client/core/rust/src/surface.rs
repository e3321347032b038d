/* src/client/core/rust/src/surface.rs */

/// The set of document mutations the page logic performs.
/// The browser binding implements this over real elements; `Node` is
/// whatever handle that implementation keeps for an element.
pub trait Surface {
  type Node: Clone;

  fn set_text(&mut self, node: &Self::Node, text: &str);
  fn set_placeholder(&mut self, node: &Self::Node, text: &str);
  fn toggle_class(&mut self, node: &Self::Node, class: &str, on: bool);
  fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
  fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
  /// Attribute on the document root (`<html>`).
  fn set_root_attribute(&mut self, name: &str, value: &str);
}

/// Where a translated string lands on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
  Content,
  /// Input elements show the string as their placeholder hint.
  Placeholder,
}

impl TextSlot {
  pub fn for_tag(tag_name: &str) -> Self {
    if tag_name.eq_ignore_ascii_case("input") { Self::Placeholder } else { Self::Content }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn input_tags_use_placeholder() {
    assert_eq!(TextSlot::for_tag("INPUT"), TextSlot::Placeholder);
    assert_eq!(TextSlot::for_tag("input"), TextSlot::Placeholder);
    assert_eq!(TextSlot::for_tag("TEXTAREA"), TextSlot::Content);
    assert_eq!(TextSlot::for_tag("SPAN"), TextSlot::Content);
  }
}
