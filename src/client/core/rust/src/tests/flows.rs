/* src/client/core/rust/src/tests/flows.rs */

use futures::executor::block_on;

use super::*;

#[test]
fn startup_applies_defaults() {
  let page = start(PreferenceStore::in_memory());
  let surface = page.surface();

  assert_eq!(page.language(), Language::Zh);
  assert_eq!(page.theme(), Theme::Light);
  assert_eq!(surface.text["hero-title"], "你好，我是 Canmi");
  assert_eq!(surface.placeholder["search"], "搜索");
  assert!(surface.has_class("lang-zh", "active"));
  assert_eq!(surface.root_attrs["data-theme"], "light");
  assert_eq!(surface.style("icon-moon", "opacity"), Some("0.5"));
  assert_eq!(surface.style("contact", "opacity"), Some("0"));
  assert_eq!(surface.attr("wechat", "title"), Some("点击复制"));
  assert_eq!(surface.style("wechat", "cursor"), Some("pointer"));
  assert_eq!(surface.style("card-web", "-webkit-tap-highlight-color"), Some("transparent"));
}

#[test]
fn language_switch_updates_whole_page() {
  let mut page = start(PreferenceStore::in_memory());
  page.set_language(Language::En);
  let surface = page.surface();

  assert_eq!(surface.text["nav-about"], "About");
  assert_eq!(surface.text["hero-title"], "Hi, I'm Canmi");
  assert_eq!(surface.placeholder["search"], "Search");
  assert!(surface.has_class("lang-en", "active"));
  assert!(!surface.has_class("lang-zh", "active"));
  assert_eq!(surface.attr("wechat", "title"), Some("Click to copy"));
}

#[test]
fn preferences_survive_reload() {
  let mut page = start(PreferenceStore::in_memory());
  page.set_language(Language::En);
  page.toggle_theme();

  let page = reload(page);
  assert_eq!(page.language(), Language::En);
  assert_eq!(page.theme(), Theme::Dark);
  assert_eq!(page.surface().text["nav-about"], "About");
  assert_eq!(page.surface().root_attrs["data-theme"], "dark");
}

#[test]
fn storage_outage_keeps_session_preferences() {
  let backend = crate::prefs::testing::RefusingBackend::default();
  let config = LandingConfig::default();
  let prefs = PreferenceStore::new(Some(Box::new(backend)), config.storage, config.defaults);
  let mut page = start(prefs);

  page.set_language(Language::En);
  page.set_theme(Theme::Dark);
  assert_eq!(page.language(), Language::En);
  assert_eq!(page.surface().root_attrs["data-theme"], "dark");

  // Nothing was persisted, so a reload starts from defaults again
  let page = reload(page);
  assert_eq!(page.language(), Language::Zh);
  assert_eq!(page.theme(), Theme::Light);
}

#[test]
fn theme_marker_follows_toggles() {
  let mut page = start(PreferenceStore::in_memory());
  for expected in [Theme::Dark, Theme::Light, Theme::Dark] {
    assert_eq!(page.toggle_theme(), expected);
    assert_eq!(page.surface().root_attrs["data-theme"], expected.as_str());
  }
  assert_eq!(page.surface().style("icon-sun", "opacity"), Some("0.5"));
}

#[test]
fn sections_reveal_once() {
  let mut page = start(PreferenceStore::in_memory());
  assert!((page.reveal_threshold() - 0.1).abs() < f64::EPSILON);

  assert_eq!(page.on_section_intersection(1, true), Transition::Revealed);
  assert_eq!(page.on_section_intersection(1, false), Transition::Unchanged);
  assert_eq!(page.on_section_intersection(1, true), Transition::Unchanged);
  assert_eq!(page.reveal().revealed_count(), 1);
  assert_eq!(page.surface().style("services", "opacity"), Some("1"));
}

#[test]
fn copy_confirmation_uses_current_language() {
  struct Accepting;

  impl Clipboard for Accepting {
    async fn write_text(&self, _text: &str) -> Result<()> {
      Ok(())
    }
  }

  let mut page = start(PreferenceStore::in_memory());
  let toast = block_on(page.clipboard().copy(&Accepting, "test@example.com", page.language()));
  let events = page.show_toast(toast, 0.0);
  let [ToastEvent::Show { toast, .. }] = events.as_slice() else {
    panic!("expected a single show event, got {events:?}");
  };
  assert_eq!(toast.content.lines, ["已复制到剪贴板"]);

  page.tick(2000.0);
  page.set_language(Language::En);
  let toast = block_on(page.clipboard().copy(&Accepting, "test@example.com", page.language()));
  assert_eq!(toast.content.lines, ["Copied to clipboard"]);
}

#[test]
fn touch_feedback_cycle() {
  let mut page = start(PreferenceStore::in_memory());

  page.pointer_enter(&"card-app");
  assert_eq!(page.surface().style("card-app", "transform"), Some("translateY(-3px) scale(1.02)"));
  page.pointer_leave(&"card-app");
  assert_eq!(page.surface().style("card-app", "transform"), Some(""));

  page.touch_start(&"link-github");
  assert_eq!(page.touch_release_delay_ms(), 150);
  assert_eq!(page.surface().style("link-github", "transform"), Some("scale(0.98)"));
  page.touch_release(&"link-github");
  assert_eq!(page.surface().style("link-github", "transform"), Some(""));

  assert!(!page.document_touch_end(0.0));
  assert!(page.document_touch_end(200.0));
}
