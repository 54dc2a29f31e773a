//! Theme preference persistence and the document-level theme class.
//!
//! The `<html>` class is kept in step with the system scheme by a
//! [`SchemeWatch`] of its own, so it follows the system whether or not a
//! background is mounted.

use reflecta_ambient::{Theme, ThemePreference};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, Window};

/// `localStorage` key holding the user's preference.
pub const STORAGE_KEY: &str = "reflecta-theme";

/// Media query matched when the system colour scheme is dark.
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the system prefers dark. Dark when the query is unavailable.
pub fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media(COLOR_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(true)
}

/// Stored preference, `Dark` when unset or unreadable.
pub fn stored_preference(window: &Window) -> ThemePreference {
    window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn store_preference(window: &Window, preference: ThemePreference) {
    let Some(storage) = window.local_storage().ok().flatten() else {
        return;
    };
    if storage.set_item(STORAGE_KEY, preference.as_str()).is_err() {
        log::warn!("could not persist theme preference");
    }
}

/// Put exactly one of `dark` / `light` on `<html>` for page styles.
pub fn apply_document_theme(window: &Window, theme: Theme) {
    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Dark.as_str(), Theme::Light.as_str());
    let _ = classes.add_1(theme.as_str());
}

/// What to do with the document's scheme watch for a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchChange {
    Install,
    Remove,
    Keep,
}

impl WatchChange {
    pub fn for_preference(preference: ThemePreference, installed: bool) -> Self {
        match (preference.follows_system(), installed) {
            (true, false) => WatchChange::Install,
            (false, true) => WatchChange::Remove,
            _ => WatchChange::Keep,
        }
    }
}

/// Re-applies the document class on every system colour-scheme change.
/// Detaches itself on drop.
pub struct SchemeWatch {
    query: MediaQueryList,
    callback: Closure<dyn FnMut()>,
}

impl SchemeWatch {
    pub fn attach(window: &Window) -> Option<Self> {
        let query = window.match_media(COLOR_SCHEME_QUERY).ok().flatten()?;
        let target = window.clone();
        let callback: Closure<dyn FnMut()> = Closure::new(move || {
            apply_document_theme(&target, ThemePreference::System.resolve(system_prefers_dark(&target)));
        });
        if let Err(err) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("could not watch colour scheme: {:?}", err);
            return None;
        }
        Some(Self { query, callback })
    }
}

impl Drop for SchemeWatch {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}
