//! DOM side of the mobile menu: button markup, listeners, and applying
//! [`MenuTransition`] effects to `<body>` and the menu items.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, Node, TouchEvent};

use super::raf::request_frame;
use super::{add_class, by_id, clear_style, html, listen, listen_passive, query_all_in, remove_class, report, set_style};
use crate::error::FolioError;
use crate::header::HEADER_ID;
use crate::menu::{
    BODY_OPEN_CLASS, CLOSE_CLASS, CLOSE_LABEL, ITEM_END_OPACITY, ITEM_END_TRANSFORM, ITEM_START_OPACITY,
    ITEM_START_TRANSFORM, ITEM_TRANSITION, MENU_ID, MenuTransition, TOGGLE_HREF,
};
use crate::site::Site;
use crate::viewport::BodyLock;

const TOGGLE_SELECTOR: &str = "a[href=\"#menu\"]";

const HAMBURGER_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true"><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/></svg>"#;

const CLOSE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

pub fn mount(site: &Rc<Site>) -> Result<(), FolioError> {
    let menu = by_id(&site.document, MENU_ID)?;

    let close_button = site.document.create_element("a")?;
    close_button.set_attribute("href", TOGGLE_HREF)?;
    close_button.set_class_name(CLOSE_CLASS);
    close_button.set_attribute("aria-label", CLOSE_LABEL)?;
    close_button.set_inner_html(CLOSE_ICON);
    menu.append_child(&close_button)?;
    // Out of any transformed ancestor so `position: fixed` covers the viewport.
    site.body.append_child(&menu)?;

    if let Some(toggle) = toggle_button(site)? {
        toggle.set_inner_html(HAMBURGER_ICON);
        let site_cb = Rc::clone(site);
        let menu_cb = menu.clone();
        listen::<MouseEvent, _>(&toggle, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            report("menu", toggle_menu(&site_cb, &menu_cb));
        })?;
    } else {
        log::debug!("menu: no toggle in #{HEADER_ID}");
    }

    let site_cb = Rc::clone(site);
    listen::<MouseEvent, _>(&close_button, "click", move |event| {
        event.prevent_default();
        event.stop_propagation();
        report("menu", close_menu(&site_cb));
    })?;

    let site_cb = Rc::clone(site);
    let menu_cb = menu.clone();
    listen::<MouseEvent, _>(&site.document, "click", move |event| {
        if !site_cb.menu.borrow().is_open() {
            return;
        }
        let target = event.target();
        let inside_menu = menu_cb.contains(target.as_ref().and_then(|t| t.dyn_ref::<Node>()));
        let on_toggle = target
            .as_ref()
            .and_then(|t| t.dyn_ref::<Element>())
            .is_some_and(|el| matches!(el.closest(TOGGLE_SELECTOR), Ok(Some(_))));
        let transition =
            site_cb.menu.borrow_mut().on_document_click(inside_menu, on_toggle, &mut site_cb.viewport.borrow_mut());
        report("menu", apply_transition(&site_cb, transition, &[]));
    })?;

    for link in query_all_in(&menu, "a")? {
        if link == close_button {
            continue;
        }
        let site_cb = Rc::clone(site);
        listen::<MouseEvent, _>(&link, "click", move |_| {
            let site_timer = Rc::clone(&site_cb);
            Timeout::new(site_cb.config.menu_link_close_delay_ms, move || {
                report("menu", close_menu(&site_timer));
            })
            .forget();
        })?;
    }

    let site_cb = Rc::clone(site);
    listen::<KeyboardEvent, _>(&site.document, "keydown", move |event| {
        let transition = site_cb.menu.borrow_mut().on_key(&event.key(), &mut site_cb.viewport.borrow_mut());
        report("menu", apply_transition(&site_cb, transition, &[]));
    })?;

    let site_cb = Rc::clone(site);
    listen_passive::<TouchEvent, _>(&menu, "touchstart", move |event| {
        if let Some(x) = first_touch_x(&event) {
            site_cb.menu.borrow_mut().on_touch_start(x);
        }
    })?;

    let site_cb = Rc::clone(site);
    listen_passive::<TouchEvent, _>(&menu, "touchend", move |event| {
        let Some(x) = first_touch_x(&event) else {
            return;
        };
        let transition = site_cb.menu.borrow_mut().on_touch_end(x, &mut site_cb.viewport.borrow_mut());
        report("menu", apply_transition(&site_cb, transition, &[]));
    })?;

    Ok(())
}

fn toggle_button(site: &Site) -> Result<Option<Element>, FolioError> {
    let Some(header) = site.document.get_element_by_id(HEADER_ID) else {
        return Ok(None);
    };
    Ok(header.query_selector(TOGGLE_SELECTOR)?)
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

/// Scrollbar width measured right before the body is locked.
fn measure_lock(site: &Site) -> BodyLock {
    let inner = site.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0));
    let client = site.document.document_element().map_or(inner, |root| f64::from(root.client_width()));
    BodyLock::from_widths(inner, client)
}

fn toggle_menu(site: &Rc<Site>, menu: &Element) -> Result<(), FolioError> {
    let items = query_all_in(menu, "li")?;
    let lock = measure_lock(site);
    let transition = site.menu.borrow_mut().toggle(&mut site.viewport.borrow_mut(), lock, items.len());
    apply_transition(site, transition, &items)
}

/// Close the menu if it is open.
pub fn close_menu(site: &Rc<Site>) -> Result<(), FolioError> {
    let transition = site.menu.borrow_mut().close(&mut site.viewport.borrow_mut());
    apply_transition(site, transition, &[])
}

/// Write a transition's effects to the page. `items` are the menu's `<li>`
/// elements; only an opening transition uses them.
pub fn apply_transition(site: &Rc<Site>, transition: MenuTransition, items: &[Element]) -> Result<(), FolioError> {
    match transition {
        MenuTransition::Opened(effects) => {
            add_class(&site.body, BODY_OPEN_CLASS)?;
            set_style(&site.body, "overflow", "hidden")?;
            set_style(&site.body, "padding-right", &effects.lock.padding_right())?;
            stagger_items(site, items, effects.item_delays_ms)
        }
        MenuTransition::Closed => {
            remove_class(&site.body, BODY_OPEN_CLASS)?;
            clear_style(&site.body, "overflow")?;
            clear_style(&site.body, "padding-right")
        }
        MenuTransition::Unchanged => Ok(()),
    }
}

fn stagger_items(site: &Site, items: &[Element], delays_ms: Vec<u32>) -> Result<(), FolioError> {
    let items = items.iter().map(html).collect::<Result<Vec<_>, _>>()?;
    for item in &items {
        set_style(item, "opacity", ITEM_START_OPACITY)?;
        set_style(item, "transform", ITEM_START_TRANSFORM)?;
    }
    request_frame(&site.window, move |_| {
        for (item, delay_ms) in items.into_iter().zip(delays_ms) {
            Timeout::new(delay_ms, move || {
                report("menu", item_entered(&item));
            })
            .forget();
        }
    })
}

fn item_entered(item: &web_sys::HtmlElement) -> Result<(), FolioError> {
    set_style(item, "transition", ITEM_TRANSITION)?;
    set_style(item, "opacity", ITEM_END_OPACITY)?;
    set_style(item, "transform", ITEM_END_TRANSFORM)
}
