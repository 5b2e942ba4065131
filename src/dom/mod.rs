//! `web-sys` bindings for the core controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs a browser and only compiles with the `hydrate`
//! feature. Helpers return [`FolioError`] instead of panicking; each mount
//! function funnels its result through [`report`], which turns a missing
//! element or capability into a debug line and anything else into a warning.

pub mod decor;
pub mod menu;
pub mod raf;
pub mod reveal;
pub mod scroll;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::FolioError;

pub fn window() -> Result<Window, FolioError> {
    web_sys::window().ok_or(FolioError::Unsupported("window"))
}

pub fn document(window: &Window) -> Result<Document, FolioError> {
    window.document().ok_or(FolioError::Unsupported("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, FolioError> {
    document.body().ok_or_else(|| FolioError::MissingElement("body".to_owned()))
}

/// Element by id, or [`FolioError::MissingElement`].
pub fn by_id(document: &Document, id: &str) -> Result<Element, FolioError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::MissingElement(format!("#{id}")))
}

/// First element matching `selector` under `document`.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, FolioError> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector` under `document`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FolioError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Every element matching `selector` under `parent`, in document order.
pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>, FolioError> {
    Ok(elements(&parent.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Narrow an element to `HtmlElement` for inline style access.
pub fn html(element: &Element) -> Result<HtmlElement, FolioError> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| FolioError::Js(format!("<{}> is not an HTML element", element.tag_name())))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), FolioError> {
    Ok(element.style().set_property(property, value)?)
}

pub fn clear_style(element: &HtmlElement, property: &str) -> Result<(), FolioError> {
    element.style().remove_property(property)?;
    Ok(())
}

pub fn add_class(element: &Element, class: &str) -> Result<(), FolioError> {
    Ok(element.class_list().add_1(class)?)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), FolioError> {
    Ok(element.class_list().remove_1(class)?)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), FolioError> {
    if on { add_class(element, class) } else { remove_class(element, class) }
}

/// Current document scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Attach a listener for the lifetime of the page. The closure is leaked and
/// never removed.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], registered with `{ passive: true }`.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Log the outcome of mounting one behavior.
pub fn report(area: &str, result: Result<(), FolioError>) {
    match result {
        Ok(()) => log::debug!("{area}: mounted"),
        Err(e) if e.is_absent_feature() => log::debug!("{area}: skipped ({e})"),
        Err(e) => log::warn!("{area}: {e}"),
    }
}
