//! Anchor interception and the per-frame scroll effects (header, parallax).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use super::menu::apply_transition;
use super::raf::request_frame;
use super::{html, listen, listen_passive, query, query_all, report, scroll_y, set_class, set_style};
use crate::anchor::anchor_target_id;
use crate::anim::FrameGate;
use crate::error::FolioError;
use crate::header::{HEADER_ID, HeaderTracker, SCROLLED_CLASS};
use crate::menu::MenuTransition;
use crate::parallax::{HERO_LAYER_SELECTOR, HERO_SELECTOR, PARALLAX_ATTR, ParallaxLayers};
use crate::site::{AnimKey, Site};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub fn mount_anchors(site: &Rc<Site>) -> Result<(), FolioError> {
    let anchors = query_all(&site.document, ANCHOR_SELECTOR)?;
    if anchors.is_empty() {
        return Err(FolioError::MissingElement(ANCHOR_SELECTOR.to_owned()));
    }
    for anchor in anchors {
        let site_cb = Rc::clone(site);
        let anchor_cb = anchor.clone();
        listen::<MouseEvent, _>(&anchor, "click", move |event| {
            let Some(href) = anchor_cb.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target_id(&href).and_then(|id| site_cb.document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            report("anchors", scroll_to(&site_cb, &target));
        })?;
    }
    Ok(())
}

/// Smooth-scroll so `target` sits just below the header.
pub fn scroll_to(site: &Rc<Site>, target: &Element) -> Result<(), FolioError> {
    let current = scroll_y(&site.window);
    let target_doc_top = target.get_bounding_client_rect().top() + current;
    let header_height = site
        .document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_ref::<HtmlElement>().map(|h| f64::from(h.offset_height())));
    site.viewport.borrow_mut().observe_scroll(current);

    let start = site.scroller.borrow_mut().begin(
        &mut site.menu.borrow_mut(),
        &mut site.viewport.borrow_mut(),
        target_doc_top,
        header_height,
    );
    let Some(start) = start else {
        log::debug!("anchors: viewport is locked, scroll dropped");
        return Ok(());
    };
    if start.closed_menu {
        apply_transition(site, MenuTransition::Closed, &[])?;
    }
    site.animate(AnimKey::Scroll, start.plan.tween());
    Ok(())
}

/// Header and parallax state, updated together once per frame.
struct ScrollEffects {
    header: Option<(Element, HeaderTracker)>,
    layers: ParallaxLayers,
    layer_elements: Vec<HtmlElement>,
    gate: FrameGate,
}

impl ScrollEffects {
    fn update(&mut self, scroll: f64) -> Result<(), FolioError> {
        if let Some((element, tracker)) = &mut self.header {
            let state = tracker.update(scroll);
            set_class(element, SCROLLED_CLASS, state.elevated)?;
            if let Some(transform) = tracker.transform() {
                set_style(&html(element)?, "transform", transform)?;
            }
        }
        for (element, transform) in self.layer_elements.iter().zip(self.layers.frame(scroll)) {
            set_style(element, "transform", &transform)?;
        }
        Ok(())
    }
}

/// Narrow a layer for inline styling, or skip it (SVG and other non-HTML
/// layers) without affecting the rest of the scroll effects.
fn styleable(element: &Element) -> Option<HtmlElement> {
    match element.dyn_ref::<HtmlElement>() {
        Some(layer) => Some(layer.clone()),
        None => {
            log::debug!("scroll-effects: skipping non-HTML parallax layer <{}>", element.tag_name());
            None
        }
    }
}

fn hero_layer(site: &Site) -> Result<Option<HtmlElement>, FolioError> {
    let Some(hero) = query(&site.document, HERO_SELECTOR)? else {
        return Ok(None);
    };
    Ok(hero.query_selector(HERO_LAYER_SELECTOR)?.as_ref().and_then(styleable))
}

pub fn mount_scroll_effects(site: &Rc<Site>) -> Result<(), FolioError> {
    let header = site
        .document
        .get_element_by_id(HEADER_ID)
        .map(|element| (element, HeaderTracker::new(&site.config)));

    let hero = hero_layer(site)?;
    let candidates = query_all(&site.document, &format!("[{PARALLAX_ATTR}]"))?;
    let (positions, marked): (Vec<usize>, Vec<HtmlElement>) = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, element)| styleable(element).map(|layer| (position, layer)))
        .unzip();
    let layers = ParallaxLayers::new(hero.as_ref().map(|_| site.config.hero_parallax_speed), &positions);
    let layer_elements: Vec<HtmlElement> = hero.into_iter().chain(marked).collect();

    if header.is_none() && layers.is_empty() {
        return Err(FolioError::MissingElement(format!("#{HEADER_ID} or parallax layers")));
    }
    log::debug!("scroll-effects: header={} layers={}", header.is_some(), layer_elements.len());

    let effects = Rc::new(RefCell::new(ScrollEffects { header, layers, layer_elements, gate: FrameGate::default() }));
    report("scroll-effects", effects.borrow_mut().update(scroll_y(&site.window)));

    let site_cb = Rc::clone(site);
    listen_passive::<Event, _>(&site.window, "scroll", move |_| {
        if !effects.borrow_mut().gate.request() {
            return;
        }
        let frame_effects = Rc::clone(&effects);
        let frame_site = Rc::clone(&site_cb);
        let requested = request_frame(&site_cb.window, move |_| {
            frame_effects.borrow_mut().gate.complete();
            let y = scroll_y(&frame_site.window);
            frame_site.viewport.borrow_mut().observe_scroll(y);
            report("scroll-effects", frame_effects.borrow_mut().update(y));
        });
        if let Err(e) = requested {
            effects.borrow_mut().gate.complete();
            log::warn!("scroll-effects: {e}");
        }
    })
}
