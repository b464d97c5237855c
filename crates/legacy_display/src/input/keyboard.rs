//! Keyboard state

use std::collections::{HashSet, VecDeque};

use super::{KeyAction, KeyEvent, MAX_QUEUED_EVENTS};

/// Keyboard state fed by the display session
#[derive(Debug, Default)]
pub struct Keyboard {
    created: bool,
    down: HashSet<i32>,
    events: VecDeque<KeyEvent>,
}

impl Keyboard {
    /// Create an uninitialised keyboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the keyboard as created; events are ignored before this
    pub fn create(&mut self) {
        self.created = true;
        log::debug!("Keyboard created");
    }

    /// Whether `create` has run
    pub const fn is_created(&self) -> bool {
        self.created
    }

    /// Resynchronise with a freshly shown window
    ///
    /// Drops queued events and held keys, since nothing delivered before the
    /// window was visible can be trusted.
    pub fn poll(&mut self) {
        self.down.clear();
        self.events.clear();
    }

    /// Record a key transition from the window
    pub fn handle_key(&mut self, event: KeyEvent) {
        if !self.created {
            return;
        }

        match event.action {
            KeyAction::Press | KeyAction::Repeat => {
                self.down.insert(event.key);
            }
            KeyAction::Release => {
                self.down.remove(&event.key);
            }
        }
        self.queue(event);
    }

    /// Whether `key` is currently held
    pub fn is_key_down(&self, key: i32) -> bool {
        self.down.contains(&key)
    }

    fn queue(&mut self, event: KeyEvent) {
        if self.events.len() == MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Pop the oldest queued key event
    pub fn next_event(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    /// Number of queued key events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
