/* src/client/core/rust/src/page.rs */

//! Page-level composition of the managers. Constructed once at startup and
//! owned by the caller; nothing here is global.

use log::info;

use crate::clipboard::ClipboardHelper;
use crate::config::LandingConfig;
use crate::language::{LanguageSwitcher, SelectorEntry, TextRegistry};
use crate::locale::{Language, Message};
use crate::prefs::PreferenceStore;
use crate::reveal::{RevealOnScroll, Transition};
use crate::social::{Resolution, SocialLinkResolver};
use crate::surface::Surface;
use crate::theme::{Theme, ThemeIcons, ThemeSwitcher};
use crate::toast::{Toast, ToastEvent, ToastHost};
use crate::touch::{DoubleTapGuard, TouchFeedback};

/// Element handles collected from the document before the page starts.
pub struct PageParts<N> {
  pub registry: TextRegistry<N>,
  pub theme_icons: Option<ThemeIcons<N>>,
  pub sections: Vec<N>,
  /// `.copy-text` elements; they get a pointer cursor and a localized title.
  pub copy_targets: Vec<N>,
  /// Cards and links with hover/touch feedback.
  pub feedback_targets: Vec<N>,
  /// `(platform id, href)` of every social link in the page.
  pub social_links: Vec<(String, String)>,
}

impl<N> Default for PageParts<N> {
  fn default() -> Self {
    Self {
      registry: TextRegistry::new(),
      theme_icons: None,
      sections: Vec::new(),
      copy_targets: Vec::new(),
      feedback_targets: Vec::new(),
      social_links: Vec::new(),
    }
  }
}

/// What a social link click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialAction {
  Open { url: String },
  Toast(Vec<ToastEvent>),
}

pub struct LandingPage<S: Surface> {
  surface: S,
  prefs: PreferenceStore,
  language: LanguageSwitcher<S::Node>,
  theme: ThemeSwitcher<S::Node>,
  reveal: RevealOnScroll<S::Node>,
  copy_targets: Vec<S::Node>,
  toasts: ToastHost,
  clipboard: ClipboardHelper,
  social: SocialLinkResolver,
  touch: TouchFeedback,
  double_tap: DoubleTapGuard,
}

impl<S: Surface> LandingPage<S> {
  /// Build every manager and apply the stored preferences: language first,
  /// then theme, then the hidden starting state of the sections.
  pub fn start(
    config: &LandingConfig,
    mut prefs: PreferenceStore,
    surface: S,
    parts: PageParts<S::Node>,
  ) -> Self {
    let language = LanguageSwitcher::new(&mut prefs, parts.registry);
    let theme = ThemeSwitcher::new(&mut prefs, parts.theme_icons);
    let reveal = RevealOnScroll::new(&config.reveal, parts.sections);

    let mut social = SocialLinkResolver::new(config.social.clone(), config.toast.qr_hint_ms);
    for (id, href) in &parts.social_links {
      social.bind_href(id, href);
    }

    let mut page = Self {
      surface,
      prefs,
      language,
      theme,
      reveal,
      copy_targets: parts.copy_targets,
      toasts: ToastHost::new(config.toast.outside_click_arm_ms),
      clipboard: ClipboardHelper::new(&config.toast),
      social,
      touch: TouchFeedback::new(&config.touch),
      double_tap: DoubleTapGuard::new(&config.touch),
    };

    page.set_language(page.language.current());
    page.set_theme(page.theme.current());
    page.reveal.init(&mut page.surface);
    for node in &parts.feedback_targets {
      page.touch.prepare(node, &mut page.surface);
    }
    for node in &page.copy_targets {
      page.surface.set_style(node, "cursor", "pointer");
    }

    info!(
      "landing page started: language={}, theme={}, {} translatable, {} sections",
      page.language.current(),
      page.theme.current(),
      page.language.registry().len(),
      page.reveal.len()
    );
    page
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  /// Tear the page down, keeping the preference store for a restart.
  pub fn into_prefs(self) -> PreferenceStore {
    self.prefs
  }

  pub fn reveal(&self) -> &RevealOnScroll<S::Node> {
    &self.reveal
  }

  pub fn toasts(&self) -> &ToastHost {
    &self.toasts
  }

  // --- Language & theme ---

  pub fn language(&self) -> Language {
    self.language.current()
  }

  pub fn set_language(&mut self, lang: Language) {
    self.language.set_language(lang, &mut self.prefs, &mut self.surface);
    let title = Message::ClickToCopy.text(lang);
    for node in &self.copy_targets {
      self.surface.set_attribute(node, "title", title);
    }
  }

  /// Language buttons, for the caller to attach click handlers to.
  pub fn language_selectors(&self) -> &[SelectorEntry<S::Node>] {
    self.language.registry().selectors()
  }

  pub fn theme(&self) -> Theme {
    self.theme.current()
  }

  pub fn set_theme(&mut self, theme: Theme) {
    self.theme.set_theme(theme, &mut self.prefs, &mut self.surface);
  }

  pub fn toggle_theme(&mut self) -> Theme {
    self.theme.toggle(&mut self.prefs, &mut self.surface)
  }

  // --- Reveal ---

  pub fn reveal_threshold(&self) -> f64 {
    self.reveal.threshold()
  }

  pub fn on_section_intersection(&mut self, index: usize, is_intersecting: bool) -> Transition {
    self.reveal.on_intersection(index, is_intersecting, &mut self.surface)
  }

  // --- Toasts ---

  pub fn show_toast(&mut self, toast: Toast, now: f64) -> Vec<ToastEvent> {
    self.toasts.push(toast, now)
  }

  pub fn tick(&mut self, now: f64) -> Vec<ToastEvent> {
    self.toasts.tick(now)
  }

  pub fn click_outside_toast(&mut self, now: f64) -> Vec<ToastEvent> {
    self.toasts.click_outside(now)
  }

  /// The clipboard write is async, so callers take the helper and language
  /// out, await the copy, then hand the resulting toast to `show_toast`.
  pub fn clipboard(&self) -> ClipboardHelper {
    self.clipboard
  }

  // --- Social ---

  pub fn social_click(&mut self, platform_id: &str, now: f64) -> SocialAction {
    match self.social.resolve(platform_id, self.language.current()) {
      Resolution::Open { url } => SocialAction::Open { url },
      Resolution::ComingSoon(toast) => SocialAction::Toast(self.toasts.push(toast, now)),
    }
  }

  pub fn qr_click(&mut self, now: f64) -> Vec<ToastEvent> {
    let hint = self.social.qr_upload_hint(self.language.current());
    self.toasts.push(hint, now)
  }

  // --- Touch ---

  pub fn pointer_enter(&mut self, node: &S::Node) {
    self.touch.pointer_enter(node, &mut self.surface);
  }

  pub fn pointer_leave(&mut self, node: &S::Node) {
    self.touch.pointer_leave(node, &mut self.surface);
  }

  pub fn touch_start(&mut self, node: &S::Node) {
    self.touch.touch_start(node, &mut self.surface);
  }

  /// How long after touch end `touch_release` should run.
  pub fn touch_release_delay_ms(&self) -> u32 {
    self.touch.release_delay_ms()
  }

  pub fn touch_release(&mut self, node: &S::Node) {
    self.touch.release(node, &mut self.surface);
  }

  /// Document-level touch end; true when the default should be prevented.
  pub fn document_touch_end(&mut self, now: f64) -> bool {
    self.double_tap.on_touch_end(now)
  }
}
