use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

use crate::navigation::{Section, SectionExtent, SectionHost};
use crate::theme::{StorageError, Theme, ThemeHost, Transition, THEME_KEY};

const DARK_MODE_CLASS: &str = "dark-mode";

fn js_error_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(&value, &JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

fn local_storage() -> Result<Storage, StorageError> {
    window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error_message)
        .map_err(StorageError::Rejected)?
        .ok_or(StorageError::Unavailable)
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn mark_document(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force(DARK_MODE_CLASS, theme.is_dark());
    }
}

fn mark_document_with_transition(theme: Theme) {
    if media_matches("(prefers-reduced-motion: reduce)") {
        mark_document(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        mark_document(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        mark_document(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        mark_document(theme);
        return;
    };

    let callback = Closure::once_into_js(move || mark_document(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        mark_document(theme);
    }
}

/// Theme adapter over `localStorage`, `matchMedia` and the live document.
#[derive(Clone, Copy, Default)]
pub struct BrowserTheme;

impl ThemeHost for BrowserTheme {
    fn stored_preference(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(THEME_KEY)
            .map_err(|error| StorageError::Rejected(js_error_message(error)))
    }

    fn store_preference(&self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(THEME_KEY, value)
            .map_err(|error| StorageError::Rejected(js_error_message(error)))
    }

    fn prefers_dark(&self) -> bool {
        media_matches("(prefers-color-scheme: dark)")
    }

    fn apply(&self, theme: Theme, transition: Transition) {
        match transition {
            Transition::Instant => mark_document(theme),
            Transition::Animated => mark_document_with_transition(theme),
        }
    }
}

fn section_element(section: Section) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Section adapter over the page's `#home`, `#projects` and `#contact` elements.
#[derive(Clone, Copy, Default)]
pub struct BrowserSections;

impl SectionHost for BrowserSections {
    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn extent(&self, section: Section) -> Option<SectionExtent> {
        let element = section_element(section)?;
        Some(SectionExtent {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(element) = section_element(section) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Window `scroll` listener that is removed when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(on_scroll);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
