//! `IntersectionObserver` wiring for scroll reveals, skill bars, and counters.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::{add_class, html, query_all, report, set_style};
use crate::error::FolioError;
use crate::progress::{COUNT_ATTR, SKILL_ATTR};
use crate::reveal::{OneShotSet, REVEAL_CLASS, REVEALED_CLASS, RevealKind, classify};
use crate::site::{AnimTarget, Site};

/// Whether the browser has `IntersectionObserver`.
pub fn observer_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe `elements` and call `on_fire` once per element, on its first
/// intersecting record. The element is unobserved before `on_fire` runs.
pub fn watch_once<V, F>(
    elements: Vec<(Element, V)>,
    options: &IntersectionObserverInit,
    mut on_fire: F,
) -> Result<(), FolioError>
where
    V: 'static,
    F: FnMut(&Element, V) + 'static,
{
    let mut set = OneShotSet::new();
    let mut watched = Vec::with_capacity(elements.len());
    for (index, (element, payload)) in elements.into_iter().enumerate() {
        if set.observe(index, payload) {
            watched.push(element);
        }
    }
    let watched = Rc::new(watched);
    let set = Rc::new(RefCell::new(set));

    let callback_watched = Rc::clone(&watched);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = callback_watched.iter().position(|el| *el == target) else {
                    continue;
                };
                let fired = set.borrow_mut().on_intersection(&index, entry.is_intersecting());
                if let Some(payload) = fired {
                    observer.unobserve(&target);
                    on_fire(&target, payload);
                }
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    callback.forget();
    for element in watched.iter() {
        observer.observe(element);
    }
    Ok(())
}

fn start_progress(site: &Rc<Site>, element: &Element, kind: RevealKind) -> Result<(), FolioError> {
    match kind {
        RevealKind::Plain => {}
        RevealKind::SkillBar(spec) => {
            let bar = html(element)?;
            set_style(&bar, "width", &spec.width(0.0))?;
            let key = site.register_target(AnimTarget::SkillBar(bar, spec));
            site.animate(key, spec.tween(&site.config));
        }
        RevealKind::Counter(spec) => {
            let counter = html(element)?;
            counter.set_text_content(Some(&spec.text(0.0)));
            let tween = spec.tween(&site.config);
            let key = site.register_target(AnimTarget::Counter(counter, spec));
            site.animate(key, tween);
        }
    }
    Ok(())
}

pub fn mount(site: &Rc<Site>) -> Result<(), FolioError> {
    if !observer_supported(&site.window) {
        return Err(FolioError::Unsupported("IntersectionObserver"));
    }
    let reveal_selector = site.config.reveal_selector();
    let selector = format!("{reveal_selector}, [{SKILL_ATTR}], [{COUNT_ATTR}]");
    let mut watched = Vec::new();
    for element in query_all(&site.document, &selector)? {
        if element.matches(&reveal_selector)? {
            add_class(&element, REVEAL_CLASS)?;
        }
        let text = element.text_content().unwrap_or_default();
        let kind = classify(
            element.get_attribute(SKILL_ATTR).as_deref(),
            element.get_attribute(COUNT_ATTR).as_deref(),
            &text,
        );
        watched.push((element, kind));
    }
    if watched.is_empty() {
        return Err(FolioError::MissingElement(selector));
    }
    log::debug!("reveal: watching {} elements", watched.len());

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(site.config.reveal_threshold));
    options.set_root_margin(&site.config.reveal_root_margin);

    let site_cb = Rc::clone(site);
    watch_once(watched, &options, move |element, kind| {
        report("reveal", add_class(element, REVEALED_CLASS));
        report("reveal", start_progress(&site_cb, element, kind));
    })
}
