//! `requestAnimationFrame` plumbing and the scheduler frame loop.
//!
//! One loop drives every tween on the page. [`kick`] schedules a frame
//! unless one is already pending; each frame ticks the scheduler, writes
//! the values out, and kicks again while anything is still running.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::set_style;
use crate::anim::TweenFrame;
use crate::error::FolioError;
use crate::site::{AnimKey, AnimTarget, Site};

/// Run `callback` on the next animation frame with the frame timestamp.
pub fn request_frame<F>(window: &Window, callback: F) -> Result<(), FolioError>
where
    F: FnOnce(f64) + 'static,
{
    let cb = Closure::once_into_js(callback);
    window.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Make sure a scheduler frame is pending.
pub fn kick(site: &Rc<Site>) {
    if !site.frame_gate.borrow_mut().request() {
        return;
    }
    let next = Rc::clone(site);
    if let Err(e) = request_frame(&site.window, move |now_ms| drive(&next, now_ms)) {
        site.frame_gate.borrow_mut().complete();
        log::warn!("animation: frame request failed: {e}");
    }
}

fn drive(site: &Rc<Site>, now_ms: f64) {
    site.frame_gate.borrow_mut().complete();
    let frames = site.scheduler.borrow_mut().tick(now_ms);
    for frame in frames {
        if let Err(e) = apply(site, &frame) {
            log::warn!("animation: {e}");
        }
    }
    if !site.scheduler.borrow().is_idle() {
        kick(site);
    }
}

fn apply(site: &Site, frame: &TweenFrame<AnimKey>) -> Result<(), FolioError> {
    match frame.key {
        AnimKey::Scroll => {
            let y = site
                .scroller
                .borrow_mut()
                .on_frame(&mut site.viewport.borrow_mut(), frame.value, frame.finished);
            if let Some(y) = y {
                site.window.scroll_to_with_x_and_y(0.0, y);
            }
        }
        AnimKey::Element(index) => match site.targets.borrow().get(index) {
            Some(AnimTarget::SkillBar(element, spec)) => set_style(element, "width", &spec.width(frame.value))?,
            Some(AnimTarget::Counter(element, spec)) => element.set_text_content(Some(&spec.text(frame.value))),
            None => log::debug!("animation: no target at {index}"),
        },
    }
    Ok(())
}
