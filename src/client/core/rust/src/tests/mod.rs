/* src/client/core/rust/src/tests/mod.rs */

use super::*;
use crate::surface::recording::RecordingSurface;

mod flows;

fn parts() -> PageParts<&'static str> {
  let mut registry = TextRegistry::new();
  registry
    .translatable("nav-about", TextSlot::Content, Localized::new("关于", "About"))
    .translatable("hero-title", TextSlot::Content, Localized::new("你好，我是 Canmi", "Hi, I'm Canmi"))
    .translatable("search", TextSlot::Placeholder, Localized::new("搜索", "Search"))
    .selector("lang-zh", Language::Zh)
    .selector("lang-en", Language::En);

  PageParts {
    registry,
    theme_icons: Some(ThemeIcons { sun: "icon-sun", moon: "icon-moon" }),
    sections: vec!["about", "services", "jobs", "contact"],
    copy_targets: vec!["wechat"],
    feedback_targets: vec!["card-web", "card-app", "link-github"],
    social_links: vec![("github".into(), "#".into()), ("bilibili".into(), "https://canmi.icu/#".into())],
  }
}

fn start(prefs: PreferenceStore) -> LandingPage<RecordingSurface> {
  LandingPage::start(&LandingConfig::default(), prefs, RecordingSurface::default(), parts())
}

/// Simulated reload: same storage, fresh document.
fn reload(page: LandingPage<RecordingSurface>) -> LandingPage<RecordingSurface> {
  let config = LandingConfig::default();
  let backend = page.into_prefs().into_backend();
  start(PreferenceStore::new(backend, config.storage, config.defaults))
}
