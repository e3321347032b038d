/* src/client/web/wasm/src/app.rs */

//! Browser wiring: owns the page, the toast element, observers and event
//! listeners, and turns DOM events into page calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use landing_core::{
  KeyValueBackend, LandingConfig, LandingPage, Language, OPEN_FEATURES, OPEN_TARGET,
  PreferenceStore, SocialAction, ToastEvent, copy_source, mailto_address,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
  Document, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
  IntersectionObserverInit, Node,
};

use crate::clipboard::BrowserClipboard;
use crate::dom::{self, DomSurface};
use crate::storage::LocalStorageBackend;
use crate::toast::ToastView;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct App {
  page: RefCell<LandingPage<DomSurface>>,
  toast: ToastView,
  listeners: RefCell<Vec<EventListener>>,
  reveal: RefCell<Option<(IntersectionObserver, RevealCallback)>>,
  /// Deadline the pending expiry timer was armed for.
  expiry_armed: Cell<Option<f64>>,
}

/// Monotonic page clock in milliseconds; wall time only when the
/// Performance API is missing.
fn now() -> f64 {
  web_sys::window().and_then(|w| w.performance()).map_or_else(js_sys::Date::now, |p| p.now())
}

impl App {
  pub fn new(page: LandingPage<DomSurface>, toast: ToastView) -> Rc<Self> {
    Rc::new(Self {
      page: RefCell::new(page),
      toast,
      listeners: RefCell::new(Vec::new()),
      reveal: RefCell::new(None),
      expiry_armed: Cell::new(None),
    })
  }

  pub fn language(&self) -> Language {
    self.page.borrow().language()
  }

  pub fn set_language(&self, lang: Language) {
    self.page.borrow_mut().set_language(lang);
  }

  pub fn theme(&self) -> &'static str {
    self.page.borrow().theme().as_str()
  }

  pub fn toggle_theme(&self) -> &'static str {
    self.page.borrow_mut().toggle_theme().as_str()
  }

  // --- Toasts ---

  /// Render host events, then make sure a timer is pending for the visible
  /// toast's deadline.
  fn apply(self: &Rc<Self>, events: Vec<ToastEvent>) {
    for event in events {
      match event {
        ToastEvent::Show { id, toast } => {
          if let Err(e) = self.toast.show(id, &toast) {
            log::warn!("toast render failed: {e:?}");
          }
        }
        ToastEvent::Hide { id } => self.toast.hide(id),
      }
    }
    self.arm_expiry();
  }

  fn arm_expiry(self: &Rc<Self>) {
    let (deadline, delay) = {
      let page = self.page.borrow();
      let toasts = page.toasts();
      (toasts.next_deadline(), toasts.expiry_delay(now()))
    };
    let (Some(deadline), Some(delay)) = (deadline, delay) else {
      return;
    };
    if self.expiry_armed.get() == Some(deadline) {
      return;
    }
    self.expiry_armed.set(Some(deadline));
    let app = Rc::clone(self);
    // Timers are never cancelled; one left over from an older deadline only ticks early
    Timeout::new(delay, move || {
      if app.expiry_armed.get() == Some(deadline) {
        app.expiry_armed.set(None);
      }
      let events = app.page.borrow_mut().tick(now());
      app.apply(events);
    })
    .forget();
  }

  pub fn copy(self: &Rc<Self>, text: String) {
    let (helper, lang) = {
      let page = self.page.borrow();
      (page.clipboard(), page.language())
    };
    let app = Rc::clone(self);
    wasm_bindgen_futures::spawn_local(async move {
      let toast = helper.copy(&BrowserClipboard, &text, lang).await;
      let events = app.page.borrow_mut().show_toast(toast, now());
      app.apply(events);
    });
  }

  // --- Binding ---

  fn listen(
    &self,
    target: &EventTarget,
    event: &'static str,
    prevent_default: bool,
    callback: impl FnMut(&web_sys::Event) + 'static,
  ) {
    let listener = if prevent_default {
      EventListener::new_with_options(target, event, EventListenerOptions::enable_prevent_default(), callback)
    } else {
      EventListener::new(target, event, callback)
    };
    self.listeners.borrow_mut().push(listener);
  }

  /// Attach every listener and observer. Called once after start.
  pub fn bind(self: &Rc<Self>, document: &Document, section_selector: &str) -> Result<(), JsValue> {
    self.bind_language_buttons();
    self.bind_theme_toggle(document);
    self.bind_reveal(document, section_selector)?;
    self.bind_social(document);
    self.bind_copy_targets(document);
    self.bind_feedback(document);
    self.bind_document(document);
    log::debug!("bound {} listeners", self.listeners.borrow().len());
    Ok(())
  }

  fn bind_language_buttons(self: &Rc<Self>) {
    let selectors: Vec<(HtmlElement, Language)> = {
      let page = self.page.borrow();
      page.language_selectors().iter().map(|s| (s.node.clone(), s.language)).collect()
    };
    for (button, lang) in selectors {
      let app = Rc::clone(self);
      self.listen(&button, "click", false, move |_| app.set_language(lang));
    }
  }

  fn bind_theme_toggle(self: &Rc<Self>, document: &Document) {
    let Some(toggle) = document.get_element_by_id(dom::THEME_TOGGLE) else {
      log::debug!("no theme toggle in page");
      return;
    };
    let app = Rc::clone(self);
    self.listen(&toggle, "click", false, move |_| {
      app.toggle_theme();
    });
  }

  fn bind_reveal(self: &Rc<Self>, document: &Document, section_selector: &str) -> Result<(), JsValue> {
    let sections = dom::query_all(document, section_selector);
    if sections.is_empty() {
      return Ok(());
    }
    let app = Rc::clone(self);
    let watched = sections.clone();
    let callback: RevealCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
      for entry in entries.iter() {
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        let target = entry.target();
        let target: &Node = &target;
        let Some(index) = watched.iter().position(|s| s.is_same_node(Some(target))) else {
          continue;
        };
        app.page.borrow_mut().on_section_intersection(index, entry.is_intersecting());
      }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(self.page.borrow().reveal_threshold()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in &sections {
      observer.observe(section);
    }
    *self.reveal.borrow_mut() = Some((observer, callback));
    Ok(())
  }

  fn bind_social(self: &Rc<Self>, document: &Document) {
    for link in dom::query_all(document, dom::SOCIAL_LINK) {
      let app = Rc::clone(self);
      let platform = link.get_attribute("data-platform").unwrap_or_default();
      self.listen(&link, "click", true, move |event| {
        event.prevent_default();
        let action = app.page.borrow_mut().social_click(&platform, now());
        match action {
          SocialAction::Open { url } => {
            if let Some(window) = web_sys::window() {
              window.open_with_url_and_target_and_features(&url, OPEN_TARGET, OPEN_FEATURES).ok();
            }
          }
          SocialAction::Toast(events) => app.apply(events),
        }
      });
    }

    if let Some(qr) = dom::query_one(document, dom::QR_PLACEHOLDER) {
      let app = Rc::clone(self);
      self.listen(&qr, "click", false, move |_| {
        let events = app.page.borrow_mut().qr_click(now());
        app.apply(events);
      });
    }
  }

  fn bind_copy_targets(self: &Rc<Self>, document: &Document) {
    for link in dom::query_all(document, dom::MAILTO_LINK) {
      let app = Rc::clone(self);
      let target = link.clone();
      self.listen(&link, "click", true, move |event| {
        let href = target.get_attribute("href").unwrap_or_default();
        let Some(address) = mailto_address(&href) else { return };
        event.prevent_default();
        app.copy(address.to_string());
      });
    }

    for el in dom::query_all(document, dom::COPY_TEXT) {
      let app = Rc::clone(self);
      let target = el.clone();
      self.listen(&el, "click", false, move |_| {
        let data_text = target.get_attribute("data-text");
        let content = target.text_content().unwrap_or_default();
        app.copy(copy_source(data_text.as_deref(), &content).to_string());
      });
    }
  }

  fn bind_feedback(self: &Rc<Self>, document: &Document) {
    for el in dom::query_all(document, dom::FEEDBACK_TARGETS) {
      let handlers: [(&'static str, fn(&Rc<App>, &HtmlElement)); 4] = [
        ("mouseenter", |app, el| app.page.borrow_mut().pointer_enter(el)),
        ("mouseleave", |app, el| app.page.borrow_mut().pointer_leave(el)),
        ("touchstart", |app, el| app.page.borrow_mut().touch_start(el)),
        ("touchend", |app, el| {
          let delay = app.page.borrow().touch_release_delay_ms();
          let app = Rc::clone(app);
          let el = el.clone();
          Timeout::new(delay, move || app.page.borrow_mut().touch_release(&el)).forget();
        }),
      ];
      for (event, handler) in handlers {
        let app = Rc::clone(self);
        let target = el.clone();
        self.listen(&el, event, false, move |_| handler(&app, &target));
      }
    }
  }

  /// Document-level listeners: outside clicks close tooltips, quick
  /// successive touch ends are kept from zooming.
  fn bind_document(self: &Rc<Self>, document: &Document) {
    let app = Rc::clone(self);
    self.listen(document, "click", false, move |event| {
      let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
      if app.toast.contains(target.as_ref()) {
        return;
      }
      let events = app.page.borrow_mut().click_outside_toast(now());
      app.apply(events);
    });

    let app = Rc::clone(self);
    self.listen(document, "touchend", true, move |event| {
      if app.page.borrow_mut().document_touch_end(now()) {
        event.prevent_default();
      }
    });
  }
}

/// Build the page from the live document and wire it up.
pub fn start(config: &LandingConfig, document: &Document) -> Result<Rc<App>, JsValue> {
  let backend = LocalStorageBackend::open().map(|b| Box::new(b) as Box<dyn KeyValueBackend>);
  let prefs = PreferenceStore::new(backend, config.storage.clone(), config.defaults);
  let surface = DomSurface::new(document).ok_or_else(|| JsValue::from_str("document has no root element"))?;
  let parts = dom::collect_parts(document, &config.reveal.selector);
  let page = LandingPage::start(config, prefs, surface, parts);
  let toast = ToastView::mount(document)?;

  let app = App::new(page, toast);
  app.bind(document, &config.reveal.selector)?;
  Ok(app)
}
