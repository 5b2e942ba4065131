//! Page-load fade, card hover, the Konami flourish, and lazy images.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, IntersectionObserverInit, KeyboardEvent, MouseEvent};

use super::raf::request_frame;
use super::reveal::{observer_supported, watch_once};
use super::{add_class, clear_style, html, listen, query, query_all, remove_class, report, set_style};
use crate::decor::{
    CARD_HOVER_TRANSFORM, CARD_SELECTOR, HERO_END_OPACITY, HERO_END_TRANSFORM, HERO_SECTION_SELECTOR,
    HERO_START_OPACITY, HERO_START_TRANSFORM, HERO_TRANSITION, LAZY_IMAGE_SELECTOR, LAZY_SRC_ATTR,
    LOAD_SETTLE_DELAY_MS, LOADING_CLASS, PageLoader, card_animation_delay, is_load_complete, needs_lazy_fallback,
};
use crate::error::FolioError;
use crate::konami::{ACTIVE_CLASS, KonamiTracker};
use crate::site::Site;

// ── Page load ───────────────────────────────────────────────────

pub fn mount_page_loader(site: &Rc<Site>) -> Result<(), FolioError> {
    add_class(&site.body, LOADING_CLASS)?;
    let loader = Rc::new(RefCell::new(PageLoader::new()));
    // The module usually finishes loading after `window.load` has fired.
    if is_load_complete(&site.document.ready_state()) {
        return on_load(site, &loader);
    }
    let site_cb = Rc::clone(site);
    listen::<Event, _>(&site.window, "load", move |_| {
        report("page-load", on_load(&site_cb, &loader));
    })
}

fn on_load(site: &Rc<Site>, loader: &Rc<RefCell<PageLoader>>) -> Result<(), FolioError> {
    if !loader.borrow_mut().on_load() {
        return Ok(());
    }
    let site_cb = Rc::clone(site);
    let loader_cb = Rc::clone(loader);
    request_frame(&site.window, move |_| {
        Timeout::new(LOAD_SETTLE_DELAY_MS, move || {
            if loader_cb.borrow_mut().on_settled() {
                report("page-load", reveal_page(&site_cb));
            }
        })
        .forget();
    })
}

fn reveal_page(site: &Site) -> Result<(), FolioError> {
    remove_class(&site.body, LOADING_CLASS)?;
    let Some(hero) = query(&site.document, HERO_SECTION_SELECTOR)? else {
        return Ok(());
    };
    let hero = html(&hero)?;
    set_style(&hero, "opacity", HERO_START_OPACITY)?;
    set_style(&hero, "transform", HERO_START_TRANSFORM)?;
    request_frame(&site.window, move |_| {
        report("page-load", fade_in(&hero));
    })
}

fn fade_in(hero: &web_sys::HtmlElement) -> Result<(), FolioError> {
    set_style(hero, "transition", HERO_TRANSITION)?;
    set_style(hero, "opacity", HERO_END_OPACITY)?;
    set_style(hero, "transform", HERO_END_TRANSFORM)
}

// ── Cards ───────────────────────────────────────────────────────

pub fn mount_cards(site: &Rc<Site>) -> Result<(), FolioError> {
    let cards = query_all(&site.document, CARD_SELECTOR)?;
    if cards.is_empty() {
        return Err(FolioError::MissingElement(CARD_SELECTOR.to_owned()));
    }
    for (index, card) in cards.iter().enumerate() {
        let card = html(card)?;
        set_style(&card, "animation-delay", &card_animation_delay(index))?;

        let hovered = card.clone();
        listen::<MouseEvent, _>(&card, "mouseenter", move |_| {
            report("cards", set_style(&hovered, "transform", CARD_HOVER_TRANSFORM));
        })?;
        let left = card.clone();
        listen::<MouseEvent, _>(&card, "mouseleave", move |_| {
            report("cards", clear_style(&left, "transform"));
        })?;
    }
    Ok(())
}

// ── Konami ──────────────────────────────────────────────────────

pub fn mount_konami(site: &Rc<Site>) -> Result<(), FolioError> {
    let tracker = Rc::new(RefCell::new(KonamiTracker::new()));
    let site_cb = Rc::clone(site);
    listen::<KeyboardEvent, _>(&site.document, "keydown", move |event| {
        if !tracker.borrow_mut().press(&event.key()) {
            return;
        }
        report("konami", add_class(&site_cb.body, ACTIVE_CLASS));
        let activation = tracker.borrow().activation();
        let expiry = Rc::clone(&tracker);
        let body = site_cb.body.clone();
        Timeout::new(site_cb.config.konami_duration_ms, move || {
            if expiry.borrow().is_latest(activation) {
                report("konami", remove_class(&body, ACTIVE_CLASS));
            }
        })
        .forget();
    })
}

// ── Lazy images ─────────────────────────────────────────────────

fn native_lazy_loading(site: &Site) -> Result<bool, FolioError> {
    let probe = site.document.create_element("img")?;
    Ok(Reflect::has(&probe, &JsValue::from_str("loading"))?)
}

pub fn mount_lazy_images(site: &Rc<Site>) -> Result<(), FolioError> {
    if !needs_lazy_fallback(native_lazy_loading(site)?) {
        return Err(FolioError::Unsupported("lazy fallback (native lazy loading present)"));
    }
    if !observer_supported(&site.window) {
        return Err(FolioError::Unsupported("IntersectionObserver"));
    }
    let images: Vec<_> = query_all(&site.document, LAZY_IMAGE_SELECTOR)?
        .into_iter()
        .filter_map(|img| img.get_attribute(LAZY_SRC_ATTR).map(|src| (img, src)))
        .collect();
    if images.is_empty() {
        return Err(FolioError::MissingElement(LAZY_IMAGE_SELECTOR.to_owned()));
    }
    watch_once(images, &IntersectionObserverInit::new(), |img, src| {
        if let Err(e) = img.set_attribute("src", &src) {
            log::warn!("lazy-images: {e:?}");
        }
        if let Err(e) = img.remove_attribute(LAZY_SRC_ATTR) {
            log::warn!("lazy-images: {e:?}");
        }
    })
}
