/* src/client/web/wasm/src/dom.rs */

use landing_core::{Language, Localized, PageParts, Surface, TextRegistry, TextSlot, ThemeIcons};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// --- Selectors of the page markup ---

pub const TRANSLATABLE: &str = "[data-zh], [data-en]";
pub const LANG_BUTTON: &str = ".lang-btn";
pub const THEME_TOGGLE: &str = "themeToggle";
pub const SUN_ICON: &str = ".fa-sun";
pub const MOON_ICON: &str = ".fa-moon";
pub const SOCIAL_LINK: &str = ".social-link";
pub const QR_PLACEHOLDER: &str = ".qr-placeholder";
pub const MAILTO_LINK: &str = r#"a[href^="mailto:"]"#;
pub const COPY_TEXT: &str = ".copy-text";
pub const FEEDBACK_TARGETS: &str = ".service-card, .job-card, .social-link";

/// `Surface` over live DOM elements. Mutation failures (e.g. an invalid
/// style value) are ignored the way plain property assignment would be.
pub struct DomSurface {
  root: Element,
}

impl DomSurface {
  pub fn new(document: &Document) -> Option<Self> {
    Some(Self { root: document.document_element()? })
  }
}

impl Surface for DomSurface {
  type Node = HtmlElement;

  fn set_text(&mut self, node: &HtmlElement, text: &str) {
    node.set_text_content(Some(text));
  }

  fn set_placeholder(&mut self, node: &HtmlElement, text: &str) {
    if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
      input.set_placeholder(text);
    } else {
      node.set_attribute("placeholder", text).ok();
    }
  }

  fn toggle_class(&mut self, node: &HtmlElement, class: &str, on: bool) {
    node.class_list().toggle_with_force(class, on).ok();
  }

  fn set_style(&mut self, node: &HtmlElement, property: &str, value: &str) {
    node.style().set_property(property, value).ok();
  }

  fn set_attribute(&mut self, node: &HtmlElement, name: &str, value: &str) {
    node.set_attribute(name, value).ok();
  }

  fn set_root_attribute(&mut self, name: &str, value: &str) {
    self.root.set_attribute(name, value).ok();
  }
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
  let Ok(list) = document.query_selector_all(selector) else {
    return vec![];
  };
  (0..list.length())
    .filter_map(|i| list.item(i))
    .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
    .collect()
}

pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
  document.query_selector(selector).ok()??.dyn_into::<HtmlElement>().ok()
}

/// Walk the document once and capture every element the page logic needs.
pub fn collect_parts(document: &Document, section_selector: &str) -> PageParts<HtmlElement> {
  let mut registry = TextRegistry::new();
  for el in query_all(document, TRANSLATABLE) {
    let text = Localized {
      zh: el.get_attribute(Language::Zh.data_attribute()),
      en: el.get_attribute(Language::En.data_attribute()),
    };
    let slot = TextSlot::for_tag(&el.tag_name());
    registry.translatable(el, slot, text);
  }
  for button in query_all(document, LANG_BUTTON) {
    let Some(lang) = button.get_attribute("data-lang").as_deref().and_then(Language::parse) else {
      log::warn!("language button without a known data-lang, skipping");
      continue;
    };
    registry.selector(button, lang);
  }

  let theme_icons = match (query_one(document, SUN_ICON), query_one(document, MOON_ICON)) {
    (Some(sun), Some(moon)) => Some(ThemeIcons { sun, moon }),
    _ => None,
  };

  let social_links = query_all(document, SOCIAL_LINK)
    .iter()
    .filter_map(|link| {
      let platform = link.get_attribute("data-platform")?;
      Some((platform, link.get_attribute("href").unwrap_or_default()))
    })
    .collect();

  PageParts {
    registry,
    theme_icons,
    sections: query_all(document, section_selector),
    copy_targets: query_all(document, COPY_TEXT),
    feedback_targets: query_all(document, FEEDBACK_TARGETS),
    social_links,
  }
}
