use reflecta_ambient::{
    Background, BackgroundConfig, DrawSurface, FrameHandle, Host, InputEvent,
    ListenerId, ListenerKind, Theme, ThemePreference,
};

use crate::error::MountError;

/// Mounted ambient background: drives the frame loop and owns every host
/// registration made on its behalf.
///
/// The bridge keeps one in a `thread_local!` and forwards host callbacks to
/// it, because wasm-bindgen cannot export generic structs directly.
/// Dropping the runner tears it down.
pub struct BackgroundRunner<H: Host> {
    host: H,
    surface: H::Surface,
    background: Background,
    preference: ThemePreference,
    listeners: Vec<(ListenerKind, ListenerId)>,
    /// The one outstanding frame request, cancelled on teardown.
    pending_frame: Option<FrameHandle>,
    mounted: bool,
}

impl<H: Host> BackgroundRunner<H> {
    /// Acquire the surface, spawn the field, attach listeners and paint the
    /// first frame. Fails without attaching anything if the host cannot draw.
    pub fn mount(mut host: H, config: BackgroundConfig, preference: ThemePreference) -> Result<Self, MountError> {
        config.validate()?;
        let mut surface = host.acquire_surface().ok_or(MountError::SurfaceUnavailable)?;

        let viewport = host.viewport();
        surface.resize(viewport);
        let theme = preference.resolve(host.system_prefers_dark());
        let seed = host.seed();
        let background = Background::new(config, viewport, theme, seed);

        let mut runner = Self {
            host,
            surface,
            background,
            preference,
            listeners: Vec::with_capacity(3),
            pending_frame: None,
            mounted: true,
        };

        runner.listen(ListenerKind::Resize);
        runner.listen(ListenerKind::PointerMove);
        if preference.follows_system() {
            runner.listen(ListenerKind::ColorScheme);
        }

        log::info!(
            "ambient background mounted: {} particles, {}x{}, {} theme",
            runner.background.particles().len(),
            viewport.width,
            viewport.height,
            theme,
        );

        runner.frame();
        Ok(runner)
    }

    fn listen(&mut self, kind: ListenerKind) {
        match self.host.listen(kind) {
            Some(id) => self.listeners.push((kind, id)),
            None => log::warn!("could not attach {:?} listener", kind),
        }
    }

    fn unlisten(&mut self, kind: ListenerKind) {
        let host = &mut self.host;
        self.listeners.retain(|&(k, id)| {
            if k == kind {
                host.unlisten(id);
                false
            } else {
                true
            }
        });
    }

    fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|&(k, _)| k == kind)
    }

    /// Frame callback: step, paint, reschedule. A frame that arrives after
    /// teardown is ignored.
    pub fn frame(&mut self) {
        if !self.mounted {
            return;
        }
        self.pending_frame = None;
        self.background.frame(&mut self.surface);
        self.pending_frame = self.host.request_frame();
    }

    /// Pointer-move callback, viewport coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.mounted {
            self.background.handle_input(InputEvent::PointerMove { x, y });
        }
    }

    /// Resize callback: match the surface to the new viewport.
    pub fn resized(&mut self) {
        if !self.mounted {
            return;
        }
        let viewport = self.host.viewport();
        self.surface.resize(viewport);
        self.background.handle_input(InputEvent::resize(viewport));
        log::debug!("ambient background resized to {}x{}", viewport.width, viewport.height);
    }

    /// Change the theme preference, following the system scheme while it is `System`.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        if !self.mounted {
            return;
        }
        match (preference.follows_system(), self.is_listening(ListenerKind::ColorScheme)) {
            (true, false) => self.listen(ListenerKind::ColorScheme),
            (false, true) => self.unlisten(ListenerKind::ColorScheme),
            _ => {}
        }
        self.apply_theme();
    }

    /// System colour-scheme callback.
    pub fn color_scheme_changed(&mut self) {
        if self.mounted && self.preference.follows_system() {
            self.apply_theme();
        }
    }

    fn apply_theme(&mut self) {
        let theme = self.preference.resolve(self.host.system_prefers_dark());
        if theme != self.background.theme() {
            log::debug!("ambient background theme -> {}", theme);
            self.background.handle_input(InputEvent::ThemeChanged(theme));
        }
    }

    /// Cancel the pending frame and detach every listener. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
        for (_, id) in self.listeners.drain(..) {
            self.host.unlisten(id);
        }
        log::info!("ambient background unmounted after {} frames", self.background.frames());
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn theme(&self) -> Theme {
        self.background.theme()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn surface(&self) -> &H::Surface {
        &self.surface
    }
}

impl<H: Host> Drop for BackgroundRunner<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use reflecta_ambient::{RecordingSurface, Viewport};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Everything the mock host has been asked to do.
    #[derive(Default)]
    struct HostLog {
        listening: HashMap<ListenerId, ListenerKind>,
        next_listener: u32,
        frames_requested: u32,
        frames_cancelled: Vec<FrameHandle>,
        pending: Option<FrameHandle>,
        surfaces_acquired: u32,
    }

    struct MockHost {
        log: Rc<RefCell<HostLog>>,
        viewport: Rc<RefCell<Viewport>>,
        dark: Rc<RefCell<bool>>,
        can_draw: bool,
    }

    impl MockHost {
        fn new(width: f32, height: f32) -> Self {
            Self {
                log: Rc::new(RefCell::new(HostLog::default())),
                viewport: Rc::new(RefCell::new(Viewport::new(width, height))),
                dark: Rc::new(RefCell::new(true)),
                can_draw: true,
            }
        }

        fn without_surface(mut self) -> Self {
            self.can_draw = false;
            self
        }
    }

    impl Host for MockHost {
        type Surface = RecordingSurface;

        fn viewport(&self) -> Viewport {
            *self.viewport.borrow()
        }

        fn acquire_surface(&mut self) -> Option<RecordingSurface> {
            if !self.can_draw {
                return None;
            }
            self.log.borrow_mut().surfaces_acquired += 1;
            Some(RecordingSurface::new())
        }

        fn system_prefers_dark(&self) -> bool {
            *self.dark.borrow()
        }

        fn listen(&mut self, kind: ListenerKind) -> Option<ListenerId> {
            let mut log = self.log.borrow_mut();
            let id = ListenerId(log.next_listener);
            log.next_listener += 1;
            log.listening.insert(id, kind);
            Some(id)
        }

        fn unlisten(&mut self, id: ListenerId) {
            self.log.borrow_mut().listening.remove(&id);
        }

        fn request_frame(&mut self) -> Option<FrameHandle> {
            let mut log = self.log.borrow_mut();
            log.frames_requested += 1;
            let handle = FrameHandle(log.frames_requested as i32);
            log.pending = Some(handle);
            Some(handle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let mut log = self.log.borrow_mut();
            log.frames_cancelled.push(handle);
            if log.pending == Some(handle) {
                log.pending = None;
            }
        }
    }

    fn listening(log: &Rc<RefCell<HostLog>>) -> Vec<ListenerKind> {
        let mut kinds: Vec<ListenerKind> = log.borrow().listening.values().copied().collect();
        kinds.sort_by_key(|k| format!("{:?}", k));
        kinds
    }

    fn mount(host: MockHost, preference: ThemePreference) -> BackgroundRunner<MockHost> {
        BackgroundRunner::mount(host, BackgroundConfig::default(), preference).expect("mount")
    }

    #[test]
    fn mount_sizes_surface_and_draws_first_frame() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let runner = mount(host, ThemePreference::Dark);

        assert!(runner.is_mounted());
        assert_eq!(runner.surface().viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(runner.background().particles().len(), 40);
        assert_eq!(runner.background().frames(), 1);
        assert_eq!(runner.surface().clears(), 1);
        assert_eq!(log.borrow().frames_requested, 1);
        assert_eq!(listening(&log), vec![ListenerKind::PointerMove, ListenerKind::Resize]);
    }

    #[test]
    fn no_surface_is_a_silent_no_op() {
        let host = MockHost::new(800.0, 600.0).without_surface();
        let log = host.log.clone();
        let result = BackgroundRunner::mount(host, BackgroundConfig::default(), ThemePreference::Dark);

        assert!(matches!(result, Err(MountError::SurfaceUnavailable)));
        let log = log.borrow();
        assert!(log.listening.is_empty());
        assert_eq!(log.frames_requested, 0);
    }

    #[test]
    fn invalid_config_attaches_nothing() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let config = BackgroundConfig {
            damping: 0.0,
            ..Default::default()
        };
        let result = BackgroundRunner::mount(host, config, ThemePreference::Dark);

        assert!(matches!(result, Err(MountError::InvalidConfig(_))));
        assert_eq!(log.borrow().surfaces_acquired, 0);
        assert!(log.borrow().listening.is_empty());
    }

    #[test]
    fn each_frame_reschedules_once() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let mut runner = mount(host, ThemePreference::Dark);
        for _ in 0..5 {
            runner.frame();
        }
        assert_eq!(log.borrow().frames_requested, 6);
        assert_eq!(runner.background().time(), 96.0);
    }

    #[test]
    fn unmount_cancels_frame_and_detaches_listeners() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let mut runner = mount(host, ThemePreference::System);
        runner.frame();
        assert_eq!(log.borrow().listening.len(), 3);

        runner.unmount();

        let log = log.borrow();
        assert!(log.listening.is_empty());
        assert_eq!(log.frames_cancelled, vec![FrameHandle(2)]);
        assert_eq!(log.pending, None);
        assert!(!runner.is_mounted());
    }

    #[test]
    fn late_frame_after_unmount_draws_nothing() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let mut runner = mount(host, ThemePreference::Dark);
        runner.unmount();
        let draws = runner.surface().draw_calls();
        let requested = log.borrow().frames_requested;

        runner.frame();
        runner.pointer_moved(10.0, 10.0);
        runner.resized();

        assert_eq!(runner.surface().draw_calls(), draws);
        assert_eq!(log.borrow().frames_requested, requested);
        assert_eq!(runner.background().pointer(), reflecta_ambient::PointerState::SENTINEL);
    }

    #[test]
    fn drop_tears_down() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        {
            let _runner = mount(host, ThemePreference::Dark);
            assert_eq!(log.borrow().listening.len(), 2);
        }
        assert!(log.borrow().listening.is_empty());
        assert_eq!(log.borrow().frames_cancelled.len(), 1);
    }

    #[test]
    fn unmount_twice_is_harmless() {
        let host = MockHost::new(800.0, 600.0);
        let log = host.log.clone();
        let mut runner = mount(host, ThemePreference::Dark);
        runner.unmount();
        runner.unmount();
        drop(runner);
        assert_eq!(log.borrow().frames_cancelled.len(), 1);
    }

    #[test]
    fn resize_follows_viewport_and_keeps_count() {
        let host = MockHost::new(1600.0, 900.0);
        let viewport = host.viewport.clone();
        let mut runner = mount(host, ThemePreference::Dark);

        *viewport.borrow_mut() = Viewport::new(640.0, 480.0);
        runner.resized();
        runner.frame();

        assert_eq!(runner.surface().viewport(), Viewport::new(640.0, 480.0));
        assert_eq!(runner.background().particles().len(), 80);
        for p in runner.background().particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
        }
    }

    #[test]
    fn pointer_moves_reach_simulation() {
        let host = MockHost::new(800.0, 600.0);
        let mut runner = mount(host, ThemePreference::Dark);
        runner.pointer_moved(123.0, 45.0);
        assert_eq!(runner.background().pointer(), Vec2::new(123.0, 45.0));
    }

    #[test]
    fn theme_switch_keeps_particles() {
        let host = MockHost::new(800.0, 600.0);
        let mut runner = mount(host, ThemePreference::Dark);
        for _ in 0..3 {
            runner.frame();
        }
        let before: Vec<(Vec2, Vec2)> = runner
            .background()
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity))
            .collect();

        runner.set_preference(ThemePreference::Light);

        let after: Vec<(Vec2, Vec2)> = runner
            .background()
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity))
            .collect();
        assert_eq!(runner.theme(), Theme::Light);
        assert_eq!(before, after);
    }

    #[test]
    fn system_preference_tracks_color_scheme() {
        let host = MockHost::new(800.0, 600.0);
        let dark = host.dark.clone();
        let log = host.log.clone();
        let mut runner = mount(host, ThemePreference::System);
        assert_eq!(runner.theme(), Theme::Dark);
        assert!(listening(&log).contains(&ListenerKind::ColorScheme));

        *dark.borrow_mut() = false;
        runner.color_scheme_changed();
        assert_eq!(runner.theme(), Theme::Light);

        runner.set_preference(ThemePreference::Dark);
        assert_eq!(runner.theme(), Theme::Dark);
        assert!(!listening(&log).contains(&ListenerKind::ColorScheme));

        // No longer following the system: scheme flips are ignored.
        *dark.borrow_mut() = false;
        runner.color_scheme_changed();
        assert_eq!(runner.theme(), Theme::Dark);
    }

    #[test]
    fn switching_to_system_attaches_scheme_listener() {
        let host = MockHost::new(800.0, 600.0);
        let dark = host.dark.clone();
        let log = host.log.clone();
        *dark.borrow_mut() = false;
        let mut runner = mount(host, ThemePreference::Dark);
        assert_eq!(log.borrow().listening.len(), 2);
        assert_eq!(runner.preference(), ThemePreference::Dark);

        runner.set_preference(ThemePreference::System);
        assert_eq!(log.borrow().listening.len(), 3);
        assert_eq!(runner.preference(), ThemePreference::System);
        assert_eq!(runner.theme(), Theme::Light);
    }
}
