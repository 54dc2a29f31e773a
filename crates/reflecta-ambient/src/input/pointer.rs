use glam::Vec2;

use crate::api::types::{Theme, Viewport};

/// Input event types the background understands.
/// The host forwards these from its window callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
    /// The resolved theme changed.
    ThemeChanged(Theme),
}

impl InputEvent {
    pub fn resize(viewport: Viewport) -> Self {
        InputEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// Last known pointer position.
///
/// Starts far outside any plausible viewport so nothing is repelled before
/// the first move event arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Vec2,
}

impl PointerState {
    /// Position used before the first pointer move.
    pub const SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub fn new() -> Self {
        Self {
            position: Self::SENTINEL,
        }
    }

    /// Record a pointer move. Non-finite coordinates are ignored.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.position = Vec2::new(x, y);
        true
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        let pointer = PointerState::new();
        assert_eq!(pointer.position(), Vec2::new(-1000.0, -1000.0));
    }

    #[test]
    fn move_updates_position() {
        let mut pointer = PointerState::new();
        assert!(pointer.move_to(12.0, 34.0));
        assert_eq!(pointer.position(), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn non_finite_move_ignored() {
        let mut pointer = PointerState::new();
        pointer.move_to(5.0, 5.0);
        assert!(!pointer.move_to(f32::NAN, 1.0));
        assert!(!pointer.move_to(1.0, f32::INFINITY));
        assert_eq!(pointer.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn resize_event_from_viewport() {
        let event = InputEvent::resize(Viewport::new(1024.0, 768.0));
        assert_eq!(event, InputEvent::Resize { width: 1024.0, height: 768.0 });
    }
}
