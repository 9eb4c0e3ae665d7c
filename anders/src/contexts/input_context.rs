use std::collections::HashMap;

use glam::Vec2;

/// What a key did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Up,
    Released,
    Pressed,
    Down,
}

/// Remembers the previous state of one key so presses and releases can be reported once.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyToggle {
    previous: bool,
}

impl KeyToggle {
    /// Feed in whether the key is down right now. Reports `Pressed` or `Released` on the frame the
    /// key changes, `Up` on every other frame.
    pub fn toggle(&mut self, is_down: bool) -> KeyState {
        let previous = self.previous;
        self.previous = is_down;

        match (previous, is_down) {
            (false, true) => KeyState::Pressed,
            (true, false) => KeyState::Released,
            _ => KeyState::Up,
        }
    }
}

/// `Down` while the key is held, `Up` otherwise
pub fn held(is_down: bool) -> KeyState {
    if is_down {
        KeyState::Down
    } else {
        KeyState::Up
    }
}

/// Turns absolute cursor positions into look offsets.
#[derive(Debug, Clone, Copy)]
pub struct MouseLook {
    last: Option<Vec2>,
    pub sensitivity: f32,
}

impl MouseLook {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            last: None,
            sensitivity,
        }
    }

    /// Offset since the previous cursor position, scaled by the sensitivity. Screen y grows
    /// downwards, so it is flipped. The first call only records the position.
    pub fn offset(&mut self, cursor: Vec2) -> Vec2 {
        let last = self.last.replace(cursor).unwrap_or(cursor);
        Vec2::new(cursor.x - last.x, last.y - cursor.y) * self.sensitivity
    }

    /// Forget the last position, eg. after the cursor was recaptured
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// Per-frame input state, fed from whatever window backend the game uses.
#[derive(Debug, Default)]
pub struct InputContext {
    keys: HashMap<i32, KeyToggle>,
    pub mouse_look: MouseLook,
}

impl InputContext {
    /// Edge-detect `key`, which the backend reports as `is_down`
    pub fn key_toggle(&mut self, key: i32, is_down: bool) -> KeyState {
        self.keys.entry(key).or_default().toggle(is_down)
    }
}
