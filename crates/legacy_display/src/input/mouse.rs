//! Mouse state
//!
//! Cursor positions arrive continuously while the window is polled, but the
//! legacy API reports motion once per frame. `last_*` tracks the newest
//! cursor position, `poll_*` the position at the previous synthesised motion
//! event; the difference between them is the frame's motion.

use std::collections::VecDeque;

use super::{MouseButtonEvent, MAX_QUEUED_EVENTS};

/// Number of buttons tracked
pub const BUTTON_COUNT: usize = 8;

/// Per-frame mouse notifications read by legacy input code
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// Cursor moved since the previous frame
    Motion {
        /// Horizontal delta
        dx: f64,
        /// Vertical delta
        dy: f64,
        /// Cursor x after the move
        x: f64,
        /// Cursor y after the move
        y: f64,
    },
    /// A button changed state
    Button {
        /// Button index
        button: u8,
        /// Whether the button went down
        pressed: bool,
    },
    /// The wheel moved
    Wheel {
        /// Vertical scroll amount
        delta: f64,
    },
}

/// Mouse state fed by the display session
#[derive(Debug, Default)]
pub struct Mouse {
    created: bool,
    last_x: f64,
    last_y: f64,
    poll_x: f64,
    poll_y: f64,
    scroll_y: f64,
    buttons: [bool; BUTTON_COUNT],
    events: VecDeque<MouseEvent>,
}

impl Mouse {
    /// Create an uninitialised mouse
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the mouse as created; events are ignored before this
    pub fn create(&mut self) {
        self.created = true;
        log::debug!("Mouse created");
    }

    /// Whether `create` has run
    pub const fn is_created(&self) -> bool {
        self.created
    }

    /// Resynchronise with a freshly shown window
    pub fn poll(&mut self) {
        self.buttons = [false; BUTTON_COUNT];
        self.events.clear();
        self.scroll_y = 0.0;
        self.rebase();
    }

    /// Treat the current cursor position as the motion origin
    ///
    /// Called on focus changes so that re-entering the window does not
    /// report the whole jump as motion.
    pub fn rebase(&mut self) {
        self.poll_x = self.last_x;
        self.poll_y = self.last_y;
    }

    /// Record a cursor position from the window
    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        self.last_x = x;
        self.last_y = y;
    }

    /// Record a scroll from the window
    pub fn handle_scroll(&mut self, y: f64) {
        if !self.created {
            return;
        }
        self.scroll_y += y;
        self.queue(MouseEvent::Wheel { delta: y });
    }

    /// Record a button transition from the window
    pub fn handle_button(&mut self, event: MouseButtonEvent) {
        if !self.created {
            return;
        }
        if let Some(state) = self.buttons.get_mut(usize::from(event.button)) {
            *state = event.pressed;
        }
        self.queue(MouseEvent::Button {
            button: event.button,
            pressed: event.pressed,
        });
    }

    /// Clear the per-frame scroll accumulator
    pub fn reset_scroll(&mut self) {
        self.scroll_y = 0.0;
    }

    /// Scroll accumulated since the last reset
    pub const fn scroll_delta(&self) -> f64 {
        self.scroll_y
    }

    /// Turn accumulated cursor movement into a single motion event
    ///
    /// Returns the event that was queued, if the cursor moved.
    pub fn create_event(&mut self) -> Option<MouseEvent> {
        if !self.created {
            return None;
        }

        let dx = self.last_x - self.poll_x;
        let dy = self.last_y - self.poll_y;
        self.rebase();

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let event = MouseEvent::Motion {
            dx,
            dy,
            x: self.last_x,
            y: self.last_y,
        };
        self.queue(event);
        Some(event)
    }

    /// Latest cursor position
    pub const fn position(&self) -> (f64, f64) {
        (self.last_x, self.last_y)
    }

    /// Whether `button` is currently held
    pub fn is_button_down(&self, button: u8) -> bool {
        self.buttons
            .get(usize::from(button))
            .copied()
            .unwrap_or(false)
    }

    fn queue(&mut self, event: MouseEvent) {
        if self.events.len() == MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Pop the oldest queued mouse event
    pub fn next_event(&mut self) -> Option<MouseEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;

    fn created_mouse() -> Mouse {
        let mut mouse = Mouse::new();
        mouse.create();
        mouse.poll();
        mouse
    }

    #[test]
    fn test_motion_is_difference_since_last_event() {
        let mut mouse = created_mouse();
        mouse.handle_cursor(10.0, 5.0);
        mouse.handle_cursor(15.0, 8.0);

        let event = mouse.create_event();
        assert_eq!(
            event,
            Some(MouseEvent::Motion { dx: 15.0, dy: 8.0, x: 15.0, y: 8.0 })
        );

        mouse.handle_cursor(12.0, 8.0);
        let event = mouse.create_event();
        assert_eq!(
            event,
            Some(MouseEvent::Motion { dx: -3.0, dy: 0.0, x: 12.0, y: 8.0 })
        );
    }

    #[test]
    fn test_no_motion_no_event() {
        let mut mouse = created_mouse();
        assert!(mouse.create_event().is_none());
        assert!(mouse.next_event().is_none());
    }

    #[test]
    fn test_rebase_swallows_jump() {
        let mut mouse = created_mouse();
        mouse.handle_cursor(400.0, 300.0);
        mouse.rebase();

        assert!(mouse.create_event().is_none());
    }

    #[test]
    fn test_scroll_accumulates_until_reset() {
        let mut mouse = created_mouse();
        mouse.handle_scroll(1.0);
        mouse.handle_scroll(2.0);
        assert_eq!(mouse.scroll_delta(), 3.0);

        mouse.reset_scroll();
        assert_eq!(mouse.scroll_delta(), 0.0);
    }

    #[test]
    fn test_button_state() {
        let mut mouse = created_mouse();
        mouse.handle_button(MouseButtonEvent {
            button: 1,
            pressed: true,
            modifiers: KeyModifiers::empty(),
        });
        assert!(mouse.is_button_down(1));
        assert!(!mouse.is_button_down(0));
        assert!(!mouse.is_button_down(200));

        assert_eq!(
            mouse.next_event(),
            Some(MouseEvent::Button { button: 1, pressed: true })
        );
    }

    #[test]
    fn test_uncreated_mouse_ignores_input() {
        let mut mouse = Mouse::new();
        mouse.handle_scroll(1.0);
        mouse.handle_cursor(5.0, 5.0);

        assert_eq!(mouse.scroll_delta(), 0.0);
        assert!(mouse.create_event().is_none());
    }
}
