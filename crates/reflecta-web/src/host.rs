use std::collections::HashMap;

use reflecta_ambient::{FrameHandle, Host, ListenerId, ListenerKind, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::theme::{self, COLOR_SCHEME_QUERY};

/// JS-side callbacks the host hands to the browser.
/// They stay alive as long as the host does.
pub struct WebCallbacks {
    pub frame: Closure<dyn FnMut()>,
    pub resize: Closure<dyn FnMut()>,
    pub pointer_move: Closure<dyn FnMut(MouseEvent)>,
    pub color_scheme: Closure<dyn FnMut()>,
}

struct Attached {
    target: EventTarget,
    event: &'static str,
    kind: ListenerKind,
}

/// `Host` over the browser window and one canvas element.
pub struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    callbacks: WebCallbacks,
    attached: HashMap<ListenerId, Attached>,
    next_listener: u32,
}

impl WebHost {
    pub fn new(window: Window, canvas: HtmlCanvasElement, callbacks: WebCallbacks) -> Self {
        Self {
            window,
            canvas,
            callbacks,
            attached: HashMap::new(),
            next_listener: 0,
        }
    }

    fn callback(&self, kind: ListenerKind) -> &js_sys::Function {
        match kind {
            ListenerKind::Resize => self.callbacks.resize.as_ref().unchecked_ref(),
            ListenerKind::PointerMove => self.callbacks.pointer_move.as_ref().unchecked_ref(),
            ListenerKind::ColorScheme => self.callbacks.color_scheme.as_ref().unchecked_ref(),
        }
    }

    fn target(&self, kind: ListenerKind) -> Option<(EventTarget, &'static str)> {
        match kind {
            ListenerKind::Resize => Some((self.window.clone().into(), "resize")),
            ListenerKind::PointerMove => Some((self.window.clone().into(), "mousemove")),
            ListenerKind::ColorScheme => self
                .window
                .match_media(COLOR_SCHEME_QUERY)
                .ok()
                .flatten()
                .map(|query| (query.into(), "change")),
        }
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Viewport {
        let extent = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(extent(self.window.inner_width()), extent(self.window.inner_height()))
    }

    fn acquire_surface(&mut self) -> Option<CanvasSurface> {
        CanvasSurface::from_canvas(self.canvas.clone())
    }

    fn system_prefers_dark(&self) -> bool {
        theme::system_prefers_dark(&self.window)
    }

    fn seed(&mut self) -> u64 {
        (js_sys::Math::random() * (1u64 << 53) as f64) as u64
    }

    fn listen(&mut self, kind: ListenerKind) -> Option<ListenerId> {
        let (target, event) = self.target(kind)?;
        if let Err(err) = target.add_event_listener_with_callback(event, self.callback(kind)) {
            log::warn!("addEventListener({}) failed: {:?}", event, err);
            return None;
        }
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.attached.insert(id, Attached { target, event, kind });
        Some(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        let Some(attached) = self.attached.remove(&id) else {
            return;
        };
        let _ = attached
            .target
            .remove_event_listener_with_callback(attached.event, self.callback(attached.kind));
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.callbacks.frame.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}
