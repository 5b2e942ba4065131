//! `localStorage` and `matchMedia` wiring for the theme controller.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, MediaQueryList, MediaQueryListEvent, MouseEvent, Storage};

use super::{listen, query_all, report, set_class};
use crate::error::FolioError;
use crate::site::Site;
use crate::theme::{DARK_CLASS, DARK_QUERY, PreferenceStore, STORAGE_KEY, Theme, ThemeController};

/// Elements that flip the theme when clicked.
pub const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";

/// `localStorage`-backed preference. Storage may be missing (privacy mode,
/// sandboxed frames); reads then come back empty and writes fail.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("theme: storage read failed: {e:?}");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), FolioError> {
        let storage = self.storage.as_ref().ok_or(FolioError::Unsupported("localStorage"))?;
        Ok(storage.set_item(STORAGE_KEY, theme.as_str())?)
    }
}

fn apply(document: &Document, theme: Theme) -> Result<(), FolioError> {
    let root = document
        .document_element()
        .ok_or_else(|| FolioError::MissingElement("html".to_owned()))?;
    set_class(&root, DARK_CLASS, theme.is_dark())
}

pub fn mount(site: &Rc<Site>) -> Result<(), FolioError> {
    let storage = site.window.local_storage().unwrap_or_default();
    let media: Option<MediaQueryList> = site.window.match_media(DARK_QUERY).unwrap_or_default();
    let controller = ThemeController::init(LocalStore { storage }, media.as_ref().map(MediaQueryList::matches));
    apply(&site.document, controller.theme())?;
    let controller = Rc::new(RefCell::new(controller));

    if let Some(media) = media {
        let controller = Rc::clone(&controller);
        let document = site.document.clone();
        listen::<MediaQueryListEvent, _>(&media, "change", move |event| {
            let changed = controller.borrow_mut().on_system_change(event.matches());
            if let Some(theme) = changed {
                report("theme", apply(&document, theme));
            }
        })?;
    }

    for toggle in query_all(&site.document, TOGGLE_SELECTOR)? {
        let controller = Rc::clone(&controller);
        let document = site.document.clone();
        listen::<MouseEvent, _>(&toggle, "click", move |event| {
            event.prevent_default();
            let theme = controller.borrow_mut().toggle();
            report("theme", apply(&document, theme));
        })?;
    }
    Ok(())
}
