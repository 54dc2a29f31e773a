//! Host windowing environment contract.
//!
//! The bridge implements this over the browser `window`; lifecycle tests
//! implement it with counters. Everything here is single-threaded: the host
//! delivers callbacks between frames, never during one.

use crate::api::types::Viewport;
use crate::renderer::traits::DrawSurface;

/// Host events the background subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Viewport resized.
    Resize,
    /// Pointer moved anywhere over the window.
    PointerMove,
    /// System colour-scheme preference flipped.
    ColorScheme,
}

/// Opaque id for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Opaque id for a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait Host {
    type Surface: DrawSurface;

    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Acquire the drawing surface. `None` means the environment cannot draw,
    /// and the background must not start.
    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    /// Whether the system colour scheme is dark.
    fn system_prefers_dark(&self) -> bool;

    /// Seed for the particle field.
    fn seed(&mut self) -> u64 {
        42
    }

    /// Attach the host-side callback for `kind`. `None` if attaching failed.
    fn listen(&mut self, kind: ListenerKind) -> Option<ListenerId>;

    /// Detach a listener returned by `listen`.
    fn unlisten(&mut self, id: ListenerId);

    /// Schedule the frame callback for the next display refresh.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a scheduled frame so it never runs.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
