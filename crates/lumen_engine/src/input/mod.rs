//! Input state and events
//!
//! Capturing keyboard and mouse input belongs to an external collaborator that
//! implements [`InputSource`]. The loop drains its events once per iteration,
//! folds them into the [`InputState`] it owns, and hands that state down to
//! the scene through the context.

use crate::foundation::math::Vec2;
use bitflags::bitflags;
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Pause/Break key
    Pause,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

bitflags! {
    /// Modifier keys held while a key event happened
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 1 << 0;
        /// Either control key
        const CTRL = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
    }
}

/// Discrete input event produced by an [`InputSource`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key went down
    KeyPressed {
        /// The key
        key: KeyCode,
        /// Modifiers held at the time
        modifiers: Modifiers,
    },

    /// Key went up
    KeyReleased {
        /// The key
        key: KeyCode,
        /// Modifiers held at the time
        modifiers: Modifiers,
    },

    /// Mouse button went down
    ButtonPressed(MouseButton),

    /// Mouse button went up
    ButtonReleased(MouseButton),

    /// Pointer moved to a new screen position
    PointerMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },

    /// Window close requested
    CloseRequested,
}

impl InputEvent {
    /// Key press without modifiers
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyPressed {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Key release without modifiers
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyReleased {
            key,
            modifiers: Modifiers::empty(),
        }
    }
}

/// External producer of input events
pub trait InputSource {
    /// Drain the events gathered since the last call
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Queryable key, button and pointer state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    pointer: Vec2,
}

impl InputState {
    /// Empty state with the pointer at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyPressed { key, .. } => {
                self.keys.insert(key);
            }
            InputEvent::KeyReleased { key, .. } => {
                self.keys.remove(&key);
            }
            InputEvent::ButtonPressed(button) => {
                self.buttons.insert(button);
            }
            InputEvent::ButtonReleased(button) => {
                self.buttons.remove(&button);
            }
            InputEvent::PointerMoved { x, y } => self.pointer = Vec2::new(x, y),
            InputEvent::CloseRequested => {}
        }
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Whether a mouse button is currently held
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Pointer position in screen space
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}
