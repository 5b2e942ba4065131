//! # folio
//!
//! Front-end behavior layer for a static portfolio site, compiled to
//! WebAssembly. Every behavior is split into a browser-free core (state
//! machines, easing math, configuration) and a thin `web-sys` binding that
//! only exists with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site configuration and variant presets |
//! | [`error`] | Error types for the DOM binding and config parsing |
//! | [`easing`] | Interpolation curves |
//! | [`anim`] | Tween state machines, the central scheduler, and the frame gate |
//! | [`viewport`] | Shared scroll/body-lock state with a single writer |
//! | [`theme`] | Dark-mode preference resolution and persistence |
//! | [`menu`] | Mobile menu state machine and dismissal gestures |
//! | [`anchor`] | Same-page anchor resolution and smooth scroll planning |
//! | [`header`] | Header elevated/hidden tracking |
//! | [`reveal`] | One-shot reveal set shared by reveal and lazy-load watchers |
//! | [`progress`] | Skill-bar and counter value formatting |
//! | [`parallax`] | Parallax layer offsets |
//! | [`konami`] | Konami-code matcher |
//! | [`decor`] | Page-load fade-in and floating card constants |
//! | `dom` | `web-sys` bindings (feature `hydrate`) |
//! | `site` | Mount entry point wiring every controller (feature `hydrate`) |

pub mod anchor;
pub mod anim;
pub mod config;
pub mod decor;
pub mod easing;
pub mod error;
pub mod header;
pub mod konami;
pub mod menu;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod viewport;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod site;

/// WASM entry point. Runs once the module is instantiated by the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    site::boot();
}
