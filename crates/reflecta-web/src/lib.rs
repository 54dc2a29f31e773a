//! WASM bridge for the Reflecta ambient background.
//!
//! The page mounts the background onto a `<canvas>` once and unmounts it on
//! navigation away:
//!
//! ```ignore
//! import init, { background_mount, background_unmount, background_set_theme } from "reflecta_web";
//!
//! await init();
//! background_mount("ambient-canvas");
//! background_set_theme("system");
//! // ...
//! background_unmount();
//! ```
//!
//! Failures never throw into JavaScript: they are logged and the page
//! simply renders without the background.

pub mod canvas;
pub mod error;
pub mod host;
pub mod runner;
pub mod theme;

use std::cell::RefCell;

use reflecta_ambient::{BackgroundConfig, ThemePreference};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

pub use error::MountError;
pub use host::{WebCallbacks, WebHost};
pub use runner::BackgroundRunner;

thread_local! {
    static RUNNER: RefCell<Option<BackgroundRunner<WebHost>>> = RefCell::new(None);
    static SCHEME_WATCH: RefCell<Option<theme::SchemeWatch>> = RefCell::new(None);
}

/// Run `f` against the mounted runner. `None` when nothing is mounted, so a
/// callback that fires after teardown is a no-op.
fn with_runner<R>(f: impl FnOnce(&mut BackgroundRunner<WebHost>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

/// Install or remove the document's scheme watch to match `preference`.
/// Independent of the runner, so it survives unmount.
fn sync_scheme_watch(window: &Window, preference: ThemePreference) {
    SCHEME_WATCH.with(|cell| {
        let mut watch = cell.borrow_mut();
        match theme::WatchChange::for_preference(preference, watch.is_some()) {
            theme::WatchChange::Install => *watch = theme::SchemeWatch::attach(window),
            theme::WatchChange::Remove => *watch = None,
            theme::WatchChange::Keep => {}
        }
    });
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn callbacks() -> WebCallbacks {
    WebCallbacks {
        frame: Closure::new(|| {
            with_runner(|r| r.frame());
        }),
        resize: Closure::new(|| {
            with_runner(|r| r.resized());
        }),
        pointer_move: Closure::new(|event: MouseEvent| {
            with_runner(|r| r.pointer_moved(event.client_x() as f32, event.client_y() as f32));
        }),
        color_scheme: Closure::new(|| {
            with_runner(|r| r.color_scheme_changed());
        }),
    }
}

fn mount(canvas_id: &str, config: Result<BackgroundConfig, MountError>) -> Result<(), MountError> {
    background_unmount();
    let config = config?;

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let canvas = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?;

    let preference = theme::stored_preference(&window);
    let overlay_opacity = config.overlay_opacity;
    let host = WebHost::new(window.clone(), canvas, callbacks());
    let runner = BackgroundRunner::mount(host, config, preference)?;

    runner.surface().apply_overlay_style(overlay_opacity);
    theme::apply_document_theme(&window, runner.theme());
    sync_scheme_watch(&window, preference);
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    Ok(())
}

fn report(result: Result<(), MountError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("reflecta-web: background not started: {}", err);
            false
        }
    }
}

/// Mount with default settings onto the canvas with id `canvas_id`.
/// Replaces any mounted instance. Returns whether the background is running.
#[wasm_bindgen]
pub fn background_mount(canvas_id: &str) -> bool {
    init_logging();
    report(mount(canvas_id, Ok(BackgroundConfig::default())))
}

/// Mount with a JSON config; fields left out take their defaults.
#[wasm_bindgen]
pub fn background_mount_with_config(canvas_id: &str, config_json: &str) -> bool {
    init_logging();
    let config = BackgroundConfig::from_json(config_json).map_err(MountError::from);
    report(mount(canvas_id, config))
}

/// Stop the animation and detach every listener. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn background_unmount() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    // Dropped outside the borrow: teardown must not run while RUNNER is held.
    drop(runner);
}

/// Set the theme preference (`"light"`, `"dark"` or `"system"`), persist it
/// and re-colour the mounted background. Returns false for unknown values.
#[wasm_bindgen]
pub fn background_set_theme(preference: &str) -> bool {
    let preference: ThemePreference = match preference.parse() {
        Ok(p) => p,
        Err(err) => {
            log::warn!("reflecta-web: {}", err);
            return false;
        }
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    theme::store_preference(&window, preference);
    sync_scheme_watch(&window, preference);

    let theme = with_runner(|r| {
        r.set_preference(preference);
        r.theme()
    })
    .unwrap_or_else(|| preference.resolve(theme::system_prefers_dark(&window)));
    theme::apply_document_theme(&window, theme);
    true
}

/// The stored preference: `"light"`, `"dark"` or `"system"`.
#[wasm_bindgen]
pub fn background_theme_preference() -> String {
    with_runner(|r| r.preference())
        .or_else(|| web_sys::window().map(|window| theme::stored_preference(&window)))
        .unwrap_or_default()
        .to_string()
}

/// The theme currently painted (or that would be, if nothing is mounted).
#[wasm_bindgen]
pub fn background_resolved_theme() -> String {
    if let Some(theme) = with_runner(|r| r.theme()) {
        return theme.to_string();
    }
    web_sys::window()
        .map(|window| theme::stored_preference(&window).resolve(theme::system_prefers_dark(&window)))
        .unwrap_or_default()
        .to_string()
}

#[wasm_bindgen]
pub fn background_is_mounted() -> bool {
    with_runner(|r| r.is_mounted()).unwrap_or(false)
}
