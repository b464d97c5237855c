//! In-memory backend for session tests

use std::cell::Cell;
use std::rc::Rc;

use super::{ContextAttribs, DisplayBackend, DisplayEvent, DisplayMode, IconSet, WindowId};

/// Records every call and lets tests inject events
pub(crate) struct FakeBackend {
    pub desktop: DisplayMode,
    pub modes: Vec<DisplayMode>,
    pub size: (u32, u32),
    pub pos: (i32, i32),
    pub title: String,
    pub decorated: bool,
    pub resizable: bool,
    /// Icon buffers copied to the "native" side, ever
    pub icon_allocations: usize,
    /// Icon buffers the "native" side has let go of
    pub icon_releases: usize,
    pub icon_pushes: usize,
    pub context_current: bool,
    pub swap_interval: Option<u32>,
    pub raw_motion_supported: bool,
    pub raw_motion: bool,
    pub polling: bool,
    pub visible: bool,
    pub close_flag: bool,
    pub context: ContextAttribs,
    pub pending: Vec<DisplayEvent>,
    pub calls: Vec<&'static str>,
    pub destroyed: Rc<Cell<bool>>,
}

impl FakeBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            desktop: DisplayMode::from_channels(width, height, 8, 8, 8, 60),
            modes: vec![
                DisplayMode::from_channels(800, 600, 8, 8, 8, 60),
                DisplayMode::from_channels(width, height, 8, 8, 8, 60),
            ],
            size: (width, height),
            pos: (0, 0),
            title: String::new(),
            decorated: true,
            resizable: true,
            icon_allocations: 0,
            icon_releases: 0,
            icon_pushes: 0,
            context_current: true,
            swap_interval: None,
            raw_motion_supported: true,
            raw_motion: false,
            polling: false,
            visible: false,
            close_flag: false,
            context: ContextAttribs::new(3, 3).with_profile_core(true),
            pending: Vec::new(),
            calls: Vec::new(),
            destroyed: Rc::new(Cell::new(false)),
        }
    }

    /// Icon buffers still held by the "native" side
    pub const fn live_icon_buffers(&self) -> usize {
        self.icon_allocations - self.icon_releases
    }

    /// Simulate the user dragging the window edge
    pub fn user_resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.pending.push(DisplayEvent::Resized { width, height });
    }
}

impl DisplayBackend for FakeBackend {
    fn desktop_mode(&mut self) -> DisplayMode {
        self.desktop
    }

    fn available_modes(&mut self) -> Vec<DisplayMode> {
        self.modes.clone()
    }

    fn window_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_window_size(&mut self, width: u32, height: u32) {
        self.calls.push("set_window_size");
        // GLFW only reports a size event when the size really changes
        if self.size != (width, height) {
            self.user_resize(width, height);
        }
    }

    fn set_window_pos(&mut self, x: i32, y: i32) {
        self.calls.push("set_window_pos");
        self.pos = (x, y);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    fn set_icon(&mut self, icons: &IconSet) {
        self.icon_pushes += 1;
        // The previous native icon is released when a new one is set
        self.icon_releases = self.icon_allocations;
        self.icon_allocations += icons.len();
    }

    fn is_context_current(&self) -> bool {
        self.context_current
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.calls.push("set_swap_interval");
        self.swap_interval = Some(interval);
    }

    fn raw_mouse_motion_supported(&self) -> bool {
        self.raw_motion_supported
    }

    fn set_raw_mouse_motion(&mut self, enabled: bool) {
        self.raw_motion = enabled;
    }

    fn enable_event_polling(&mut self) {
        self.calls.push("enable_event_polling");
        self.polling = true;
    }

    fn show(&mut self) {
        self.calls.push("show");
        self.visible = true;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn swap_buffers(&mut self) {
        self.calls.push("swap_buffers");
    }

    fn poll_events(&mut self) -> Vec<DisplayEvent> {
        self.calls.push("poll_events");
        if self.polling {
            std::mem::take(&mut self.pending)
        } else {
            Vec::new()
        }
    }

    fn should_close(&self) -> bool {
        self.close_flag
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.close_flag = should_close;
    }

    fn context_attribs(&self) -> ContextAttribs {
        self.context
    }

    fn window_id(&self) -> WindowId {
        WindowId(0xC0FFEE)
    }

    fn destroy(self) {
        self.destroyed.set(true);
    }
}
