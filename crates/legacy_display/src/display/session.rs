//! The legacy display facade
//!
//! [`WindowSession`] is the one object that owns the window. It keeps the
//! state the legacy API exposed through statics (desktop and current mode,
//! title, resized/focused/vsync flags, the icon set) and forwards each call
//! to its [`DisplayBackend`].
//!
//! # Lifecycle
//!
//! 1. `init` / `new`: the window exists, hidden, with its context current
//! 2. `create`: polling, input, vsync and raw motion are set up and the
//!    window is shown
//! 3. `update` + `sync` once per frame until `is_close_requested`
//! 4. `destroy`
//!
//! # Events
//!
//! Resize and focus changes are not callbacks. `update()` polls the backend,
//! applies each [`DisplayEvent`] to the session and the input state, and
//! queues it; callers read the queue with `drain_events()` after `update()`.

use std::collections::VecDeque;
use std::marker::PhantomData;

use super::{
    ContextAttribs, DisplayBackend, DisplayError, DisplayEvent, DisplayMode, DisplayResult,
    GlfwBackend, IconSet, PixelFormat, ProcResolver, WindowId,
};
use crate::config::DisplayConfig;
use crate::foundation::time::FrameLimiter;
use crate::input::{Keyboard, Mouse};

/// Single-window display session
///
/// Neither `Send` nor `Sync`: every call must come from the thread that
/// created the window.
pub struct WindowSession<B: DisplayBackend = GlfwBackend> {
    backend: B,
    initial_mode: DisplayMode,
    current_mode: DisplayMode,
    windowed_mode: Option<DisplayMode>,
    pixel_format: PixelFormat,
    title: String,
    created: bool,
    resized: bool,
    focused: bool,
    vsync: bool,
    fullscreen: bool,
    icons: Option<IconSet>,
    keyboard: Keyboard,
    mouse: Mouse,
    events: VecDeque<DisplayEvent>,
    limiter: FrameLimiter,
    _owning_thread: PhantomData<*const ()>,
}

impl WindowSession<GlfwBackend> {
    /// Initialise GLFW and create the hidden window described by `config`
    ///
    /// `loader` receives a GL proc-address resolver once the context is
    /// current. An error here means the process has no display to run on;
    /// there is nothing to retry.
    pub fn init<L>(config: &DisplayConfig, loader: L) -> DisplayResult<Self>
    where
        L: FnOnce(&mut ProcResolver<'_>),
    {
        config.validate()?;
        let backend = GlfwBackend::init(config, loader)?;
        Ok(Self::new(backend, config))
    }
}

impl<B: DisplayBackend> WindowSession<B> {
    /// Wrap an already initialised backend
    ///
    /// The desktop mode read here becomes the initial mode for the lifetime
    /// of the session.
    pub fn new(mut backend: B, config: &DisplayConfig) -> Self {
        let initial_mode = backend.desktop_mode();
        log::debug!("Initial display mode: {}", initial_mode);

        Self {
            backend,
            initial_mode,
            current_mode: initial_mode,
            windowed_mode: None,
            pixel_format: config.pixel_format,
            title: config.title.clone(),
            created: false,
            resized: false,
            focused: false,
            vsync: config.vsync,
            fullscreen: false,
            icons: None,
            keyboard: Keyboard::new(),
            mouse: Mouse::new(),
            events: VecDeque::new(),
            limiter: FrameLimiter::new(),
            _owning_thread: PhantomData,
        }
    }

    /// Create with the default pixel format and a GL 3.3 core request
    pub fn create(&mut self) {
        self.create_with_attribs(
            PixelFormat::default(),
            ContextAttribs::new(3, 3).with_profile_core(true),
        );
    }

    /// Create with a GL 3.3 core request
    pub fn create_with_pixel_format(&mut self, pixel_format: PixelFormat) {
        self.create_with_attribs(
            pixel_format,
            ContextAttribs::new(3, 3).with_profile_core(true),
        );
    }

    /// Finish window setup and show it
    ///
    /// The framebuffer and context were created during initialisation, so
    /// `pixel_format` and `attribs` cannot change them; requests the live
    /// window does not satisfy are logged. `created` is set before anything
    /// else happens.
    pub fn create_with_attribs(&mut self, pixel_format: PixelFormat, attribs: ContextAttribs) {
        self.created = true;

        if !self.pixel_format.satisfies(&pixel_format) {
            log::warn!(
                "{:?} requested but the framebuffer was created with {:?}; set the pixel format in DisplayConfig",
                pixel_format,
                self.pixel_format
            );
        }

        let (width, height) = self.backend.window_size();
        self.center(width, height);

        let live = self.backend.context_attribs();
        if !live.satisfies(&attribs) {
            log::warn!(
                "GL {} requested but the context was created as GL {}; set the context in DisplayConfig",
                attribs,
                live
            );
        }

        self.backend.enable_event_polling();

        self.keyboard.create();
        self.keyboard.poll();
        self.mouse.create();
        self.mouse.poll();

        // Raw input is better for 3D camera control
        if self.backend.raw_mouse_motion_supported() {
            self.backend.set_raw_mouse_motion(true);
        }

        self.backend.set_swap_interval(u32::from(self.vsync));
        self.backend.show();

        log::info!(
            "Display created: {}x{}, vsync {}",
            width,
            height,
            if self.vsync { "on" } else { "off" }
        );
    }

    /// Resize the window to `mode` and centre it on the desktop
    ///
    /// The mode is not checked against the monitor's supported modes; only
    /// zero dimensions are rejected. An explicit mode leaves fullscreen, so
    /// the window gets its decorations back and a later
    /// `set_fullscreen(false)` has nothing to restore.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<()> {
        if !mode.is_valid() {
            return Err(DisplayError::InvalidMode {
                width: mode.width(),
                height: mode.height(),
            });
        }

        if self.fullscreen {
            log::debug!("Leaving fullscreen for display mode {}", mode);
            self.windowed_mode = None;
            self.backend.set_decorated(true);
            self.backend.set_resizable(true);
            self.fullscreen = false;
        }

        log::debug!("Setting display mode {}", mode);
        self.current_mode = mode;
        self.backend.set_window_size(mode.width(), mode.height());
        self.center(mode.width(), mode.height());
        Ok(())
    }

    /// Framebuffer format the window was created with
    pub const fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Current mode of the window
    pub const fn display_mode(&self) -> DisplayMode {
        self.current_mode
    }

    /// Desktop mode captured when the session was created
    pub const fn initial_display_mode(&self) -> DisplayMode {
        self.initial_mode
    }

    /// Desktop mode of the primary monitor right now
    pub fn desktop_display_mode(&mut self) -> DisplayMode {
        self.backend.desktop_mode()
    }

    /// Modes the primary monitor supports
    pub fn available_display_modes(&mut self) -> Vec<DisplayMode> {
        self.backend.available_modes()
    }

    /// Switch between a borderless desktop-sized window and the windowed mode
    ///
    /// Entering fullscreen remembers the windowed mode so that leaving it
    /// restores that size even though the resize event replaced the current
    /// mode in between.
    pub fn set_fullscreen(&mut self, enabled: bool) {
        if enabled == self.fullscreen {
            return;
        }

        let target = if enabled {
            self.windowed_mode = Some(self.current_mode);
            self.initial_mode
        } else {
            let windowed = self.windowed_mode.take().unwrap_or(self.current_mode);
            self.current_mode = windowed;
            windowed
        };

        self.backend.set_window_size(target.width(), target.height());
        self.center(target.width(), target.height());
        self.backend.set_decorated(!enabled);
        self.backend.set_resizable(!enabled);
        self.fullscreen = enabled;

        log::debug!("Fullscreen {} at {}x{}", enabled, target.width(), target.height());
    }

    /// Whether the session is in fullscreen
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Allow or forbid user resizing
    pub fn set_resizable(&mut self, resizable: bool) {
        self.backend.set_resizable(resizable);
    }

    /// Change the window title
    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
        self.backend.set_title(title);
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the window icon
    ///
    /// The previous set is released before the new one is handed to the
    /// window; the session keeps the new set alive until the next call or
    /// until it is dropped.
    pub fn set_icon(&mut self, icons: IconSet) {
        if let Some(previous) = self.icons.take() {
            log::trace!("Releasing {} cached icon bytes", previous.byte_len());
        }
        self.backend.set_icon(&icons);
        log::debug!("Window icon set with {} image(s)", icons.len());
        self.icons = Some(icons);
    }

    /// The icon set currently applied
    pub const fn icons(&self) -> Option<&IconSet> {
        self.icons.as_ref()
    }

    /// Enable or disable vsync
    ///
    /// Takes effect immediately only if the window's context is current;
    /// the preference is always recorded and applied by `create`.
    pub fn set_vsync_enabled(&mut self, enabled: bool) {
        if self.backend.is_context_current() {
            self.backend.set_swap_interval(u32::from(enabled));
        }
        self.vsync = enabled;
    }

    /// Recorded vsync preference
    pub const fn is_vsync_enabled(&self) -> bool {
        self.vsync
    }

    /// Per-frame pump: present, poll and update flags
    ///
    /// Does nothing until the window is visible. The resized flag and the
    /// scroll accumulator are cleared before polling so that whatever the
    /// poll delivers is what this frame observes.
    pub fn update(&mut self) {
        if !self.backend.is_visible() {
            return;
        }

        self.resized = false;
        self.backend.swap_buffers();
        self.mouse.reset_scroll();
        self.events.clear();

        for event in self.backend.poll_events() {
            self.apply_event(event);
            self.events.push_back(event);
        }

        self.mouse.create_event();
    }

    fn apply_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Resized { width, height } => {
                self.current_mode = DisplayMode::new(width, height);
                self.resized = true;
            }
            DisplayEvent::Focused(focused) => {
                self.focused = focused;
                self.mouse.rebase();
            }
            DisplayEvent::CursorMoved { x, y } => self.mouse.handle_cursor(x, y),
            DisplayEvent::Scrolled { y, .. } => self.mouse.handle_scroll(y),
            DisplayEvent::Key(key) => self.keyboard.handle_key(key),
            DisplayEvent::MouseButton(button) => self.mouse.handle_button(button),
            DisplayEvent::CloseRequested => log::debug!("Close requested"),
        }
    }

    /// Take the events delivered by the last `update()`
    pub fn drain_events(&mut self) -> impl Iterator<Item = DisplayEvent> + '_ {
        self.events.drain(..)
    }

    /// Cap the frame rate at `fps`
    pub fn sync(&mut self, fps: u32) {
        self.limiter.sync(fps);
    }

    /// Destroy the window
    ///
    /// Consumes the session, so a second destroy cannot be written.
    pub fn destroy(self) {
        log::info!("Destroying display");
        self.backend.destroy();
    }

    /// Whether `create` has been called
    pub const fn is_created(&self) -> bool {
        self.created
    }

    /// Whether close has been requested, read from the window each call
    pub fn is_close_requested(&self) -> bool {
        self.backend.should_close()
    }

    /// Whether the last `update()` saw a resize
    pub const fn was_resized(&self) -> bool {
        self.resized
    }

    /// Current width
    pub const fn width(&self) -> u32 {
        self.current_mode.width()
    }

    /// Current height
    pub const fn height(&self) -> u32 {
        self.current_mode.height()
    }

    /// Whether the window has input focus
    pub const fn is_active(&self) -> bool {
        self.focused
    }

    /// Identifier of the native window
    pub fn window(&self) -> WindowId {
        self.backend.window_id()
    }

    /// Ask the window to close
    ///
    /// Legacy callers used this to end their loop; it sets the close flag
    /// rather than unbinding the GL context.
    pub fn release_context(&mut self) {
        self.backend.set_should_close(true);
    }

    /// Keyboard state
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Keyboard state, for consuming queued events
    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    /// Mouse state
    pub const fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    /// Mouse state, for consuming queued events
    pub fn mouse_mut(&mut self) -> &mut Mouse {
        &mut self.mouse
    }

    /// The backend, for calls the legacy API never had
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn center(&mut self, width: u32, height: u32) {
        let offset = |desktop: u32, window: u32| {
            let offset = (i64::from(desktop) - i64::from(window)) / 2;
            i32::try_from(offset).unwrap_or(0)
        };
        let x = offset(self.initial_mode.width(), width);
        let y = offset(self.initial_mode.height(), height);
        self.backend.set_window_pos(x, y);
    }
}
