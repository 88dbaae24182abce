//! Input abstraction for keyboard and mouse events.

use macroquad::prelude::*;

/// Collect all characters typed this frame.
pub fn typed_chars() -> Vec<char> {
    let mut chars = Vec::new();
    while let Some(ch) = get_char_pressed() {
        // Printable ASCII only; the fields hold numbers, signs and separators
        if (' '..='~').contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

/// Check if the backspace key was pressed this frame.
pub fn backspace_pressed() -> bool {
    is_key_pressed(KeyCode::Backspace)
}

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if Tab was pressed.
pub fn tab_pressed() -> bool {
    is_key_pressed(KeyCode::Tab)
}

/// Get the mouse scroll wheel Y delta this frame.
///
/// Positive = scroll up, negative = scroll down.
pub fn scroll_y() -> f32 {
    mouse_wheel().1
}
