//! Key, Button, and Axis Mapping Tables
//!
//! Static translation tables from engine key identifiers to the GUI key
//! enumeration, mouse button indices, and gamepad stick direction pairs,
//! plus the raw key-code fold and character narrowing used to index key
//! events. Tables are built exactly once for the process and read-only
//! thereafter; lookups never fail and fall back to sentinels for unmapped
//! identifiers.

use crate::engine::{EngineCursor, Key, KeyEvent};
use crate::gui::{GuiCursor, GuiKey, GuiWchar};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Mouse button index sentinel for buttons without a table entry.
///
/// Deliberately out of range for any real button slot; the GUI library
/// ignores button events carrying it. Callers must never treat it as
/// button 0.
pub const MOUSE_INDEX_NONE: u32 = u32::MAX;

/// Negative/positive GUI direction keys for one gamepad analog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamepadKeyRange {
    /// Key reported when the axis deflects negative.
    pub negative: GuiKey,
    /// Key reported when the axis deflects positive.
    pub positive: GuiKey,
}

struct KeyTables {
    keys: HashMap<Key, GuiKey>,
    mouse: HashMap<Key, u32>,
    axes: HashMap<Key, GamepadKeyRange>,
}

impl KeyTables {
    fn build() -> Self {
        let key_mappings = [
            (Key::LeftControl, GuiKey::LeftCtrl),
            (Key::RightControl, GuiKey::RightCtrl),
            (Key::LeftShift, GuiKey::LeftShift),
            (Key::RightShift, GuiKey::RightShift),
            (Key::LeftAlt, GuiKey::LeftAlt),
            (Key::RightAlt, GuiKey::RightAlt),
            (Key::LeftCommand, GuiKey::LeftSuper),
            (Key::RightCommand, GuiKey::RightSuper),
            (Key::Tab, GuiKey::Tab),
            (Key::Left, GuiKey::LeftArrow),
            (Key::Right, GuiKey::RightArrow),
            (Key::Up, GuiKey::UpArrow),
            (Key::Down, GuiKey::DownArrow),
            (Key::PageUp, GuiKey::PageUp),
            (Key::PageDown, GuiKey::PageDown),
            (Key::Home, GuiKey::Home),
            (Key::End, GuiKey::End),
            (Key::Insert, GuiKey::Insert),
            (Key::Delete, GuiKey::Delete),
            (Key::NumLock, GuiKey::NumLock),
            (Key::ScrollLock, GuiKey::ScrollLock),
            (Key::Pause, GuiKey::Pause),
            (Key::BackSpace, GuiKey::Backspace),
            (Key::SpaceBar, GuiKey::Space),
            (Key::Enter, GuiKey::Enter),
            (Key::Escape, GuiKey::Escape),
            (Key::A, GuiKey::A),
            (Key::B, GuiKey::B),
            (Key::C, GuiKey::C),
            (Key::D, GuiKey::D),
            (Key::E, GuiKey::E),
            (Key::F, GuiKey::F),
            (Key::G, GuiKey::G),
            (Key::H, GuiKey::H),
            (Key::I, GuiKey::I),
            (Key::J, GuiKey::J),
            (Key::K, GuiKey::K),
            (Key::L, GuiKey::L),
            (Key::M, GuiKey::M),
            (Key::N, GuiKey::N),
            (Key::O, GuiKey::O),
            (Key::P, GuiKey::P),
            (Key::Q, GuiKey::Q),
            (Key::R, GuiKey::R),
            (Key::S, GuiKey::S),
            (Key::T, GuiKey::T),
            (Key::U, GuiKey::U),
            (Key::V, GuiKey::V),
            (Key::W, GuiKey::W),
            (Key::X, GuiKey::X),
            (Key::Y, GuiKey::Y),
            (Key::Z, GuiKey::Z),
            (Key::F1, GuiKey::F1),
            (Key::F2, GuiKey::F2),
            (Key::F3, GuiKey::F3),
            (Key::F4, GuiKey::F4),
            (Key::F5, GuiKey::F5),
            (Key::F6, GuiKey::F6),
            (Key::F7, GuiKey::F7),
            (Key::F8, GuiKey::F8),
            (Key::F9, GuiKey::F9),
            (Key::F10, GuiKey::F10),
            (Key::F11, GuiKey::F11),
            (Key::F12, GuiKey::F12),
            (Key::Zero, GuiKey::Alpha0),
            (Key::One, GuiKey::Alpha1),
            (Key::Two, GuiKey::Alpha2),
            (Key::Three, GuiKey::Alpha3),
            (Key::Four, GuiKey::Alpha4),
            (Key::Five, GuiKey::Alpha5),
            (Key::Six, GuiKey::Alpha6),
            (Key::Seven, GuiKey::Alpha7),
            (Key::Eight, GuiKey::Alpha8),
            (Key::Nine, GuiKey::Alpha9),
            (Key::Equals, GuiKey::Equal),
            (Key::Comma, GuiKey::Comma),
            (Key::Period, GuiKey::Period),
            (Key::Slash, GuiKey::Slash),
            (Key::LeftBracket, GuiKey::LeftBracket),
            (Key::RightBracket, GuiKey::RightBracket),
            (Key::Apostrophe, GuiKey::Apostrophe),
            (Key::Semicolon, GuiKey::Semicolon),
            (Key::NumPadZero, GuiKey::Keypad0),
            (Key::NumPadOne, GuiKey::Keypad1),
            (Key::NumPadTwo, GuiKey::Keypad2),
            (Key::NumPadThree, GuiKey::Keypad3),
            (Key::NumPadFour, GuiKey::Keypad4),
            (Key::NumPadFive, GuiKey::Keypad5),
            (Key::NumPadSix, GuiKey::Keypad6),
            (Key::NumPadSeven, GuiKey::Keypad7),
            (Key::NumPadEight, GuiKey::Keypad8),
            (Key::NumPadNine, GuiKey::Keypad9),
            (Key::Multiply, GuiKey::KeypadMultiply),
            (Key::Add, GuiKey::KeypadAdd),
            (Key::Subtract, GuiKey::KeypadSubtract),
            (Key::Decimal, GuiKey::KeypadDecimal),
            (Key::Divide, GuiKey::KeypadDivide),
            (Key::GamepadFaceButtonBottom, GuiKey::GamepadFaceDown),
            (Key::GamepadFaceButtonRight, GuiKey::GamepadFaceRight),
            (Key::GamepadFaceButtonTop, GuiKey::GamepadFaceUp),
            (Key::GamepadFaceButtonLeft, GuiKey::GamepadFaceLeft),
            (Key::GamepadDpadLeft, GuiKey::GamepadDpadLeft),
            (Key::GamepadDpadRight, GuiKey::GamepadDpadRight),
            (Key::GamepadDpadUp, GuiKey::GamepadDpadUp),
            (Key::GamepadDpadDown, GuiKey::GamepadDpadDown),
            (Key::GamepadLeftShoulder, GuiKey::GamepadL1),
            (Key::GamepadRightShoulder, GuiKey::GamepadR1),
        ];

        let mouse_mappings = [
            (Key::LeftMouseButton, 0),
            (Key::RightMouseButton, 1),
            (Key::MiddleMouseButton, 2),
            (Key::ThumbMouseButton, 3),
            (Key::ThumbMouseButton2, 4),
        ];

        let axis_mappings = [
            (
                Key::GamepadLeftX,
                GamepadKeyRange {
                    negative: GuiKey::GamepadLStickLeft,
                    positive: GuiKey::GamepadLStickRight,
                },
            ),
            (
                Key::GamepadLeftY,
                GamepadKeyRange {
                    negative: GuiKey::GamepadLStickDown,
                    positive: GuiKey::GamepadLStickUp,
                },
            ),
            (
                Key::GamepadRightX,
                GamepadKeyRange {
                    negative: GuiKey::GamepadRStickLeft,
                    positive: GuiKey::GamepadRStickRight,
                },
            ),
            (
                Key::GamepadRightY,
                GamepadKeyRange {
                    negative: GuiKey::GamepadRStickDown,
                    positive: GuiKey::GamepadRStickUp,
                },
            ),
        ];

        let mut keys = HashMap::with_capacity(key_mappings.len());
        for (engine_key, gui_key) in key_mappings {
            keys.insert(engine_key, gui_key);
        }

        let mut mouse = HashMap::with_capacity(mouse_mappings.len());
        for (engine_key, index) in mouse_mappings {
            mouse.insert(engine_key, index);
        }

        let mut axes = HashMap::with_capacity(axis_mappings.len());
        for (engine_key, range) in axis_mappings {
            axes.insert(engine_key, range);
        }

        Self { keys, mouse, axes }
    }
}

fn tables() -> &'static KeyTables {
    static TABLES: OnceLock<KeyTables> = OnceLock::new();
    TABLES.get_or_init(KeyTables::build)
}

/// GUI key for an engine key, or [`GuiKey::None`] when unmapped.
pub fn gui_key(key: Key) -> GuiKey {
    tables().keys.get(&key).copied().unwrap_or(GuiKey::None)
}

/// Mouse button index for an engine mouse button key, or
/// [`MOUSE_INDEX_NONE`] when unmapped.
pub fn mouse_index(button: Key) -> u32 {
    tables()
        .mouse
        .get(&button)
        .copied()
        .unwrap_or(MOUSE_INDEX_NONE)
}

/// Direction key pair for an engine gamepad axis key; both keys are
/// [`GuiKey::None`] when the key is not an analog axis.
pub fn navigation_axis(key: Key) -> GamepadKeyRange {
    tables().axes.get(&key).copied().unwrap_or_default()
}

/// Fold a native key/character code into the 0–511 index space.
///
/// Codes under 512 pass through unchanged; larger platform codes (SDL codes
/// with the extra flag bit, notably) are folded into the upper half of the
/// range. Distinct large codes can collide after folding; accepted, since
/// low standard codes stay conflict-free.
pub fn map_key_code(code: u32) -> u32 {
    if code < 512 {
        code
    } else {
        256 + (code % 256)
    }
}

/// Index of a key event in the 0–511 key buffer space.
///
/// Prefers the native key code, falls back to the character code, then 0.
pub fn key_index(event: &KeyEvent) -> u32 {
    let code = event.key_code.or(event.char_code).unwrap_or(0);
    map_key_code(code)
}

/// Narrow an engine character to the GUI character width.
///
/// Truncating; in debug builds values outside the representable range are
/// reported through `tracing` before truncation. Release builds truncate
/// silently.
pub fn cast_input_char(ch: char) -> GuiWchar {
    let code = ch as u32;

    #[cfg(debug_assertions)]
    if code > GuiWchar::MAX as u32 {
        tracing::error!(
            character = %ch,
            code,
            max = GuiWchar::MAX,
            "input character out of range for the GUI character width, truncating"
        );
    }

    code as GuiWchar
}

/// Engine cursor shape for a GUI cursor shape.
///
/// Total: unrecognized shapes and [`GuiCursor::None`] map to
/// [`EngineCursor::None`].
pub fn to_engine_cursor(cursor: GuiCursor) -> EngineCursor {
    match cursor {
        GuiCursor::Arrow => EngineCursor::Default,
        GuiCursor::TextInput => EngineCursor::TextEditBeam,
        GuiCursor::ResizeAll => EngineCursor::CardinalCross,
        GuiCursor::ResizeNS => EngineCursor::ResizeUpDown,
        GuiCursor::ResizeEW => EngineCursor::ResizeLeftRight,
        GuiCursor::ResizeNESW => EngineCursor::ResizeSouthWest,
        GuiCursor::ResizeNWSE => EngineCursor::ResizeSouthEast,
        GuiCursor::None | GuiCursor::Hand | GuiCursor::NotAllowed => EngineCursor::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_keys_mapped() {
        assert_eq!(gui_key(Key::LeftControl), GuiKey::LeftCtrl);
        assert_eq!(gui_key(Key::RightControl), GuiKey::RightCtrl);
        assert_eq!(gui_key(Key::LeftShift), GuiKey::LeftShift);
        assert_eq!(gui_key(Key::RightShift), GuiKey::RightShift);
        assert_eq!(gui_key(Key::LeftAlt), GuiKey::LeftAlt);
        assert_eq!(gui_key(Key::RightAlt), GuiKey::RightAlt);
        assert_eq!(gui_key(Key::LeftCommand), GuiKey::LeftSuper);
        assert_eq!(gui_key(Key::RightCommand), GuiKey::RightSuper);
    }

    #[test]
    fn letters_digits_function_keys_mapped() {
        assert_eq!(gui_key(Key::A), GuiKey::A);
        assert_eq!(gui_key(Key::Z), GuiKey::Z);
        assert_eq!(gui_key(Key::Zero), GuiKey::Alpha0);
        assert_eq!(gui_key(Key::Nine), GuiKey::Alpha9);
        assert_eq!(gui_key(Key::F1), GuiKey::F1);
        assert_eq!(gui_key(Key::F12), GuiKey::F12);
        assert_eq!(gui_key(Key::NumPadZero), GuiKey::Keypad0);
        assert_eq!(gui_key(Key::Divide), GuiKey::KeypadDivide);
    }

    #[test]
    fn gamepad_buttons_mapped() {
        assert_eq!(gui_key(Key::GamepadFaceButtonBottom), GuiKey::GamepadFaceDown);
        assert_eq!(gui_key(Key::GamepadDpadUp), GuiKey::GamepadDpadUp);
        assert_eq!(gui_key(Key::GamepadLeftShoulder), GuiKey::GamepadL1);
        assert_eq!(gui_key(Key::GamepadRightShoulder), GuiKey::GamepadR1);
    }

    #[test]
    fn unmapped_key_yields_sentinel() {
        // Mouse buttons and axes have no entry in the key table.
        assert_eq!(gui_key(Key::LeftMouseButton), GuiKey::None);
        assert_eq!(gui_key(Key::GamepadLeftX), GuiKey::None);
    }

    #[test]
    fn mouse_buttons_mapped_in_order() {
        assert_eq!(mouse_index(Key::LeftMouseButton), 0);
        assert_eq!(mouse_index(Key::RightMouseButton), 1);
        assert_eq!(mouse_index(Key::MiddleMouseButton), 2);
        assert_eq!(mouse_index(Key::ThumbMouseButton), 3);
        assert_eq!(mouse_index(Key::ThumbMouseButton2), 4);
    }

    #[test]
    fn non_mouse_key_yields_index_sentinel() {
        assert_eq!(mouse_index(Key::A), MOUSE_INDEX_NONE);
        assert_eq!(mouse_index(Key::GamepadFaceButtonTop), MOUSE_INDEX_NONE);
    }

    #[test]
    fn analog_axes_mapped_to_direction_pairs() {
        let left_x = navigation_axis(Key::GamepadLeftX);
        assert_eq!(left_x.negative, GuiKey::GamepadLStickLeft);
        assert_eq!(left_x.positive, GuiKey::GamepadLStickRight);

        let right_y = navigation_axis(Key::GamepadRightY);
        assert_eq!(right_y.negative, GuiKey::GamepadRStickDown);
        assert_eq!(right_y.positive, GuiKey::GamepadRStickUp);
    }

    #[test]
    fn non_axis_key_yields_empty_range() {
        let range = navigation_axis(Key::GamepadFaceButtonBottom);
        assert_eq!(range.negative, GuiKey::None);
        assert_eq!(range.positive, GuiKey::None);
    }

    #[test]
    fn key_code_fold() {
        // Codes under 512 pass through.
        assert_eq!(map_key_code(0), 0);
        assert_eq!(map_key_code(65), 65);
        assert_eq!(map_key_code(511), 511);

        // Larger codes fold into 256..512.
        assert_eq!(map_key_code(512), 256);
        assert_eq!(map_key_code(767), 511);
        assert_eq!(map_key_code(1024), 256);
    }

    #[test]
    fn key_index_prefers_key_code() {
        let event = KeyEvent::new(Key::A, Some(65), Some(97));
        assert_eq!(key_index(&event), 65);

        let char_only = KeyEvent::new(Key::A, None, Some(97));
        assert_eq!(key_index(&char_only), 97);

        let bare = KeyEvent::new(Key::A, None, None);
        assert_eq!(key_index(&bare), 0);
    }

    #[test]
    fn input_char_narrowing() {
        assert_eq!(cast_input_char('a'), 0x61);
        assert_eq!(cast_input_char('\u{ffff}'), 0xFFFF);
        // Supplementary-plane character truncates to the low 16 bits.
        assert_eq!(cast_input_char('\u{1F600}'), 0xF600);
    }

    #[test]
    fn cursor_mapping_total() {
        assert_eq!(to_engine_cursor(GuiCursor::Arrow), EngineCursor::Default);
        assert_eq!(
            to_engine_cursor(GuiCursor::TextInput),
            EngineCursor::TextEditBeam
        );
        assert_eq!(
            to_engine_cursor(GuiCursor::ResizeAll),
            EngineCursor::CardinalCross
        );
        assert_eq!(
            to_engine_cursor(GuiCursor::ResizeNS),
            EngineCursor::ResizeUpDown
        );
        assert_eq!(
            to_engine_cursor(GuiCursor::ResizeEW),
            EngineCursor::ResizeLeftRight
        );
        assert_eq!(
            to_engine_cursor(GuiCursor::ResizeNESW),
            EngineCursor::ResizeSouthWest
        );
        assert_eq!(
            to_engine_cursor(GuiCursor::ResizeNWSE),
            EngineCursor::ResizeSouthEast
        );
        assert_eq!(to_engine_cursor(GuiCursor::None), EngineCursor::None);
        assert_eq!(to_engine_cursor(GuiCursor::Hand), EngineCursor::None);
        assert_eq!(to_engine_cursor(GuiCursor::NotAllowed), EngineCursor::None);
    }
}
