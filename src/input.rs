//! Input latch
//!
//! Host events arrive one at a time between frames. Press counts (`downs`)
//! are edge-triggered and cleared once per tick; `pressed` is level-triggered
//! and persists until the matching key-up.

use glam::Vec2;

/// Logical key codes the host translates its raw key events into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Space,
    Escape,
    Other(u32),
}

/// One host input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown { button: u8 },
    /// Relative motion in pixels
    MouseMotion { delta: Vec2 },
}

/// Logical buttons the mode listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Left,
    Right,
    Up,
    Down,
    Action,
}

impl ButtonId {
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::A => Some(ButtonId::Left),
            Key::D => Some(ButtonId::Right),
            Key::W => Some(ButtonId::Up),
            Key::S => Some(ButtonId::Down),
            Key::Space => Some(ButtonId::Action),
            _ => None,
        }
    }
}

/// Latched state of a single button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Presses seen since the last reset
    pub downs: u8,
    pub pressed: bool,
}

impl Button {
    fn press(&mut self) {
        self.downs = self.downs.saturating_add(1);
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }
}

/// All buttons plus pointer capture state
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
    pub action: Button,
    pointer_captured: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::Left => &self.left,
            ButtonId::Right => &self.right,
            ButtonId::Up => &self.up,
            ButtonId::Down => &self.down,
            ButtonId::Action => &self.action,
        }
    }

    fn button_mut(&mut self, id: ButtonId) -> &mut Button {
        match id {
            ButtonId::Left => &mut self.left,
            ButtonId::Right => &mut self.right,
            ButtonId::Up => &mut self.up,
            ButtonId::Down => &mut self.down,
            ButtonId::Action => &mut self.action,
        }
    }

    /// Whether the host should keep the pointer in relative mode
    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Apply one event; returns true if it was consumed
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown(Key::Escape) => {
                self.pointer_captured = false;
                true
            }
            InputEvent::KeyDown(key) => match ButtonId::for_key(key) {
                Some(id) => {
                    self.button_mut(id).press();
                    true
                }
                None => false,
            },
            InputEvent::KeyUp(key) => match ButtonId::for_key(key) {
                Some(id) => {
                    self.button_mut(id).release();
                    true
                }
                None => false,
            },
            InputEvent::MouseButtonDown { .. } => {
                if self.pointer_captured {
                    false
                } else {
                    self.pointer_captured = true;
                    true
                }
            }
            // Mouse look is disabled in this mode
            InputEvent::MouseMotion { .. } => false,
        }
    }

    /// Clear press counts; called once at the end of each tick
    pub fn reset_downs(&mut self) {
        self.left.downs = 0;
        self.right.downs = 0;
        self.up.downs = 0;
        self.down.downs = 0;
        self.action.downs = 0;
    }
}
