use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage};

use crate::sections::{scroll_to, Section};
use crate::theme::{StorageError, Theme, ThemeStore};

pub struct LocalThemeStore {
    key: &'static str,
}

impl LocalThemeStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(self.key).map_err(rejected)
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(self.key, value).map_err(rejected)
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(rejected)?
        .ok_or(StorageError::Unavailable)
}

fn rejected(err: JsValue) -> StorageError {
    StorageError::Rejected(describe_js_error(&err))
}

pub fn describe_js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

/// `None` when the environment cannot answer the query.
pub fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Some(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        apply_theme(theme);
        return;
    };

    // The browser calls back after this function returns.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

pub fn scroll_to_section(section: Section, smooth: bool) {
    let document = window().and_then(|w| w.document());
    let find = |id: &str| document.as_ref()?.get_element_by_id(id);

    scroll_to(section, find, |target| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
