//! Composition root: builds the shared state and mounts every behavior.
//!
//! [`Site`] owns the state more than one controller touches: the viewport,
//! the menu (closed by the anchor scroller), and the animation scheduler with
//! the elements its tweens write to. Controllers capture an `Rc<Site>` in
//! their listeners; everything else stays local to the controller's mount
//! function.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use crate::anchor::SmoothScroller;
use crate::anim::{FrameGate, Scheduler, Tween};
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::decor::is_dom_parsed;
use crate::dom::{self, report};
use crate::error::{ConfigError, FolioError};
use crate::menu::MenuController;
use crate::progress::{CounterSpec, SkillSpec};
use crate::viewport::ViewportState;

/// Scheduler key: the page scroll, or an index into [`Site::targets`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimKey {
    Scroll,
    Element(usize),
}

/// Element written by an element tween.
#[derive(Clone, Debug)]
pub enum AnimTarget {
    SkillBar(HtmlElement, SkillSpec),
    Counter(HtmlElement, CounterSpec),
}

pub struct Site {
    pub config: SiteConfig,
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub viewport: RefCell<ViewportState>,
    pub menu: RefCell<MenuController>,
    pub scroller: RefCell<SmoothScroller>,
    pub scheduler: RefCell<Scheduler<AnimKey>>,
    pub frame_gate: RefCell<FrameGate>,
    pub targets: RefCell<Vec<AnimTarget>>,
}

impl Site {
    /// Capture the browser handles and build the shared controllers.
    ///
    /// # Errors
    ///
    /// Fails without a window, document, or body.
    pub fn new(config: SiteConfig) -> Result<Rc<Self>, FolioError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let body = dom::body(&document)?;
        let mut viewport = ViewportState::new();
        viewport.observe_scroll(dom::scroll_y(&window));
        Ok(Rc::new(Self {
            menu: RefCell::new(MenuController::new(&config)),
            scroller: RefCell::new(SmoothScroller::new(&config)),
            viewport: RefCell::new(viewport),
            scheduler: RefCell::new(Scheduler::new()),
            frame_gate: RefCell::new(FrameGate::default()),
            targets: RefCell::new(Vec::new()),
            config,
            window,
            document,
            body,
        }))
    }

    /// Remember an element tween target and return its key.
    pub fn register_target(&self, target: AnimTarget) -> AnimKey {
        let mut targets = self.targets.borrow_mut();
        targets.push(target);
        AnimKey::Element(targets.len() - 1)
    }

    /// Start (or restart) a tween and make sure the frame loop is running.
    pub fn animate(self: &Rc<Self>, key: AnimKey, tween: Tween) {
        self.scheduler.borrow_mut().start(key, tween);
        dom::raf::kick(self);
    }

    /// Wire every behavior. Each one is independent; a failure only skips
    /// that behavior.
    pub fn mount(self: &Rc<Self>) {
        report("theme", dom::theme::mount(self));
        report("page-load", dom::decor::mount_page_loader(self));
        report("menu", dom::menu::mount(self));
        report("anchors", dom::scroll::mount_anchors(self));
        report("scroll-effects", dom::scroll::mount_scroll_effects(self));
        report("reveal", dom::reveal::mount(self));
        report("cards", dom::decor::mount_cards(self));
        report("konami", dom::decor::mount_konami(self));
        report("lazy-images", dom::decor::mount_lazy_images(self));
        log::info!("folio: behaviors mounted ({:?} variant)", self.config.variant);
    }
}

/// Read the inline config block, if the page has one.
fn read_config() -> Result<SiteConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw),
        _ => Ok(SiteConfig::default()),
    }
}

/// Install the panic hook, then build and mount the site once the DOM is
/// parsed.
pub fn boot() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if is_dom_parsed(&document.ready_state()) {
        start();
        return;
    }
    // `<body>` and the config block may not exist yet.
    let mut started = false;
    let listening = dom::listen::<web_sys::Event, _>(&document, "DOMContentLoaded", move |_| {
        if !started {
            started = true;
            start();
        }
    });
    if let Err(e) = listening {
        web_sys::console::warn_1(&format!("folio: cannot wait for DOMContentLoaded: {e}").into());
    }
}

/// Read config, install logging, then build and mount the site.
fn start() {
    let (config, config_error) = match read_config() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level) {
        log::warn!("folio: logger already installed: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("folio: {e}; using defaults");
    }
    match Site::new(config) {
        Ok(site) => site.mount(),
        Err(e) => report("site", Err(e)),
    }
}
