//! GLFW window with an OpenGL context
//!
//! Initialisation does everything the legacy display did at class-load time:
//! bring up GLFW, read the desktop mode, create an invisible window at that
//! size with its GL context current, and hand the caller a proc-address
//! resolver so GL entry points can be loaded.

use glfw::Context;

use super::{
    ContextAttribs, DisplayBackend, DisplayError, DisplayEvent, DisplayMode, DisplayResult,
    IconSet, PixelFormat, WindowId,
};
use crate::config::DisplayConfig;
use crate::input::{KeyAction, KeyEvent, KeyModifiers, MouseButtonEvent};

/// Resolves a GL function name to its address in the current context
pub type ProcResolver<'a> = dyn FnMut(&str) -> glfw::GLProc + 'a;

/// GLFW window wrapper with proper resource management
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    context: ContextAttribs,
}

impl GlfwBackend {
    /// Initialise GLFW and create the (still hidden) window
    ///
    /// `loader` is called exactly once, with the new context current, and
    /// receives a resolver for GL entry points.
    pub fn init<L>(config: &DisplayConfig, loader: L) -> DisplayResult<Self>
    where
        L: FnOnce(&mut ProcResolver<'_>),
    {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| DisplayError::InitializationFailed(format!("{e:?}")))?;

        let desktop = primary_video_mode(&mut glfw).ok_or(DisplayError::NoPrimaryMonitor)?;
        log::info!("Desktop display mode: {}", desktop);

        glfw.default_window_hints();
        glfw.window_hint(glfw::WindowHint::Visible(false));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        glfw.window_hint(glfw::WindowHint::Decorated(config.decorated));
        apply_context_hints(&mut glfw, &config.context);
        apply_pixel_format_hints(&mut glfw, &config.pixel_format);

        let (mut window, events) = glfw
            .create_window(
                desktop.width(),
                desktop.height(),
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(DisplayError::CreationFailed)?;

        window.make_current();

        let version = window.get_context_version();
        let context = ContextAttribs::new(
            u32::try_from(version.major).unwrap_or_default(),
            u32::try_from(version.minor).unwrap_or_default(),
        )
        .with_profile_core(config.context.core_profile);
        log::info!("Created {}x{} window with GL {} context", desktop.width(), desktop.height(), context);

        let mut resolve = |name: &str| window.get_proc_address(name);
        loader(&mut resolve);

        Ok(Self {
            glfw,
            window,
            events,
            context,
        })
    }
}

fn primary_video_mode(glfw: &mut glfw::Glfw) -> Option<DisplayMode> {
    glfw.with_primary_monitor(|_, monitor| {
        monitor
            .and_then(|m| m.get_video_mode())
            .map(DisplayMode::from)
    })
}

fn apply_context_hints(glfw: &mut glfw::Glfw, context: &ContextAttribs) {
    glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
    glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
    if context.core_profile {
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        // macOS only hands out core contexts with forward compatibility set
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    }
}

fn apply_pixel_format_hints(glfw: &mut glfw::Glfw, format: &PixelFormat) {
    let bits = |value: u32| (value > 0).then_some(value);
    glfw.window_hint(glfw::WindowHint::AlphaBits(bits(format.alpha_bits)));
    glfw.window_hint(glfw::WindowHint::DepthBits(bits(format.depth_bits)));
    glfw.window_hint(glfw::WindowHint::StencilBits(bits(format.stencil_bits)));
    glfw.window_hint(glfw::WindowHint::Samples(bits(format.samples)));
}

fn convert_modifiers(mods: glfw::Modifiers) -> KeyModifiers {
    let mut modifiers = KeyModifiers::empty();
    modifiers.set(KeyModifiers::SHIFT, mods.contains(glfw::Modifiers::Shift));
    modifiers.set(KeyModifiers::CONTROL, mods.contains(glfw::Modifiers::Control));
    modifiers.set(KeyModifiers::ALT, mods.contains(glfw::Modifiers::Alt));
    modifiers.set(KeyModifiers::SUPER, mods.contains(glfw::Modifiers::Super));
    modifiers.set(KeyModifiers::CAPS_LOCK, mods.contains(glfw::Modifiers::CapsLock));
    modifiers.set(KeyModifiers::NUM_LOCK, mods.contains(glfw::Modifiers::NumLock));
    modifiers
}

const fn convert_action(action: glfw::Action) -> KeyAction {
    match action {
        glfw::Action::Press => KeyAction::Press,
        glfw::Action::Release => KeyAction::Release,
        glfw::Action::Repeat => KeyAction::Repeat,
    }
}

/// Map a GLFW event onto a display event, dropping kinds the session ignores
fn convert_event(event: glfw::WindowEvent) -> Option<DisplayEvent> {
    match event {
        glfw::WindowEvent::Size(width, height) => Some(DisplayEvent::Resized {
            width: u32::try_from(width).unwrap_or(0),
            height: u32::try_from(height).unwrap_or(0),
        }),
        glfw::WindowEvent::Focus(focused) => Some(DisplayEvent::Focused(focused)),
        glfw::WindowEvent::CursorPos(x, y) => Some(DisplayEvent::CursorMoved { x, y }),
        glfw::WindowEvent::Scroll(x, y) => Some(DisplayEvent::Scrolled { x, y }),
        glfw::WindowEvent::Key(key, scancode, action, mods) => Some(DisplayEvent::Key(
            KeyEvent::new(key as i32, scancode, convert_action(action))
                .with_modifiers(convert_modifiers(mods)),
        )),
        glfw::WindowEvent::MouseButton(button, action, mods) => {
            Some(DisplayEvent::MouseButton(MouseButtonEvent {
                button: u8::try_from(button as i32).unwrap_or(u8::MAX),
                pressed: action != glfw::Action::Release,
                modifiers: convert_modifiers(mods),
            }))
        }
        glfw::WindowEvent::Close => Some(DisplayEvent::CloseRequested),
        _ => None,
    }
}

impl DisplayBackend for GlfwBackend {
    fn desktop_mode(&mut self) -> DisplayMode {
        primary_video_mode(&mut self.glfw).unwrap_or_else(|| {
            log::warn!("Primary monitor disappeared, reporting window size as desktop mode");
            let (width, height) = self.window_size();
            DisplayMode::new(width, height)
        })
    }

    fn available_modes(&mut self) -> Vec<DisplayMode> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor
                .map(|m| m.get_video_modes().into_iter().map(DisplayMode::from).collect())
                .unwrap_or_default()
        })
    }

    fn window_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
        )
    }

    fn set_window_size(&mut self, width: u32, height: u32) {
        self.window.set_size(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        );
    }

    fn set_window_pos(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.window.set_decorated(decorated);
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    fn set_icon(&mut self, icons: &IconSet) {
        let images = icons
            .images()
            .iter()
            .map(|icon| glfw::PixelImage {
                width: icon.size(),
                height: icon.size(),
                pixels: icon.pixels_ne(),
            })
            .collect();
        self.window.set_icon_from_pixels(images);
    }

    fn is_context_current(&self) -> bool {
        self.window.is_current()
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = if interval == 0 {
            glfw::SwapInterval::None
        } else {
            glfw::SwapInterval::Sync(interval)
        };
        self.glfw.set_swap_interval(interval);
    }

    fn raw_mouse_motion_supported(&self) -> bool {
        self.glfw.supports_raw_motion()
    }

    fn set_raw_mouse_motion(&mut self, enabled: bool) {
        self.window.set_raw_mouse_motion(enabled);
    }

    fn enable_event_polling(&mut self) {
        self.window.set_size_polling(true);
        self.window.set_focus_polling(true);
        self.window.set_cursor_pos_polling(true);
        self.window.set_scroll_polling(true);
        self.window.set_key_polling(true);
        self.window.set_mouse_button_polling(true);
        self.window.set_close_polling(true);
    }

    fn show(&mut self) {
        self.window.show();
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) -> Vec<DisplayEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| convert_event(event))
            .collect()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn context_attribs(&self) -> ContextAttribs {
        self.context
    }

    fn window_id(&self) -> WindowId {
        WindowId(self.window.window_ptr() as usize)
    }

    fn destroy(self) {
        log::info!("Destroying GLFW window");
        // Dropping the window destroys it; GLFW terminates with the last handle
        drop(self.window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_event_clamps_negative() {
        let event = convert_event(glfw::WindowEvent::Size(-5, 600));
        assert_eq!(event, Some(DisplayEvent::Resized { width: 0, height: 600 }));
    }

    #[test]
    fn test_key_event_conversion() {
        let event = convert_event(glfw::WindowEvent::Key(
            glfw::Key::W,
            17,
            glfw::Action::Repeat,
            glfw::Modifiers::Shift | glfw::Modifiers::Control,
        ));

        let Some(DisplayEvent::Key(key)) = event else {
            panic!("expected key event, got {event:?}");
        };
        assert_eq!(key.key, glfw::Key::W as i32);
        assert_eq!(key.scancode, 17);
        assert_eq!(key.action, KeyAction::Repeat);
        assert_eq!(key.modifiers, KeyModifiers::SHIFT | KeyModifiers::CONTROL);
    }

    #[test]
    fn test_mouse_button_conversion() {
        let event = convert_event(glfw::WindowEvent::MouseButton(
            glfw::MouseButton::Button2,
            glfw::Action::Press,
            glfw::Modifiers::empty(),
        ));
        assert_eq!(
            event,
            Some(DisplayEvent::MouseButton(MouseButtonEvent {
                button: 1,
                pressed: true,
                modifiers: KeyModifiers::empty(),
            }))
        );
    }

    #[test]
    fn test_focus_close_and_ignored_events() {
        assert_eq!(
            convert_event(glfw::WindowEvent::Focus(false)),
            Some(DisplayEvent::Focused(false))
        );
        assert_eq!(
            convert_event(glfw::WindowEvent::Close),
            Some(DisplayEvent::CloseRequested)
        );
        assert_eq!(convert_event(glfw::WindowEvent::Pos(10, 10)), None);
    }
}
