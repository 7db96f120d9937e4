//! Pointer event payloads delivered by the host.

use crate::draw::{Color, path::Point};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (paints with the left palette color)
    Left,
    /// Middle mouse button (same color semantics as left)
    Middle,
    /// Right mouse button (swaps main and secondary colors)
    Right,
}

impl MouseButton {
    /// Maps a toolkit button number (1 = left, 2 = middle, 3 = right).
    ///
    /// Unknown numbers keep left-button color semantics.
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            _ => MouseButton::Left,
        }
    }
}

/// Pointer press on the canvas, starting a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressEvent {
    pub point: Point,
    /// Tool width chosen in the host at press time
    pub width: f64,
    pub button: MouseButton,
    /// Palette color bound to the left button
    pub left_color: Color,
    /// Palette color bound to the right button
    pub right_color: Color,
}

/// Pointer motion while a button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvent {
    pub point: Point,
}

/// Pointer release, committing the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseEvent {
    pub point: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_codes_map_to_buttons() {
        assert_eq!(MouseButton::from_code(1), MouseButton::Left);
        assert_eq!(MouseButton::from_code(2), MouseButton::Middle);
        assert_eq!(MouseButton::from_code(3), MouseButton::Right);
        assert_eq!(MouseButton::from_code(9), MouseButton::Left);
    }
}
