//! GUI Library Boundary Types
//!
//! The vocabulary produced for the embedded immediate-mode GUI library: its
//! key enumeration (with the `None` sentinel lookups fall back to), the
//! per-frame IO event queue the adapter forwards into, the feature/backend
//! flag words, and the value types (vectors, packed colors, cursor shapes,
//! texture ids) shared with the renderer side.

use enumflags2::{bitflags, BitFlag, BitFlags};

/// Character type accepted by the GUI text input queue.
///
/// Narrower than the engine's character type; see
/// [`crate::map::cast_input_char`] for the truncation rules.
pub type GuiWchar = u16;

/// GUI key enumeration.
///
/// `None` is the sentinel returned by lookups for unmapped engine keys; the
/// GUI library treats events carrying it as no-ops.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuiKey {
    #[default]
    None,

    LeftCtrl,
    RightCtrl,
    LeftShift,
    RightShift,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,

    Tab,

    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,

    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    NumLock,
    ScrollLock,
    Pause,

    Backspace,
    Space,
    Enter,
    Escape,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Alpha0,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Alpha9,

    Equal,
    Comma,
    Period,
    Slash,
    LeftBracket,
    RightBracket,
    Apostrophe,
    Semicolon,

    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadMultiply,
    KeypadAdd,
    KeypadSubtract,
    KeypadDecimal,
    KeypadDivide,

    GamepadFaceDown,
    GamepadFaceRight,
    GamepadFaceUp,
    GamepadFaceLeft,
    GamepadDpadLeft,
    GamepadDpadRight,
    GamepadDpadUp,
    GamepadDpadDown,
    GamepadL1,
    GamepadR1,
    GamepadLStickLeft,
    GamepadLStickRight,
    GamepadLStickUp,
    GamepadLStickDown,
    GamepadRStickLeft,
    GamepadRStickRight,
    GamepadRStickUp,
    GamepadRStickDown,
}

/// GUI feature configuration bits.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFlag {
    /// Keyboard navigation of GUI widgets.
    NavEnableKeyboard = 1 << 0,
    /// Gamepad navigation of GUI widgets.
    NavEnableGamepad = 1 << 1,
}

/// Backend capability bits advertised to the GUI library.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFlag {
    /// A gamepad is attached and forwarded by this backend.
    HasGamepad = 1 << 0,
}

/// Set or clear a single bit on a flag word.
pub fn set_flag<T: BitFlag>(flags: &mut BitFlags<T>, flag: T, set: bool) {
    if set {
        flags.insert(flag);
    } else {
        flags.remove(flag);
    }
}

/// One queued GUI IO input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IoEvent {
    /// Text input character.
    Character(GuiWchar),
    /// Digital key transition.
    Key {
        /// Key the transition applies to.
        key: GuiKey,
        /// Pressed (`true`) or released (`false`).
        down: bool,
    },
    /// Key transition with an analog magnitude (gamepad stick directions).
    KeyAnalog {
        /// Key the transition applies to.
        key: GuiKey,
        /// Pressed (`true`) or released (`false`).
        down: bool,
        /// Analog magnitude after dead-zone filtering.
        value: f32,
    },
    /// Mouse button transition by button index.
    MouseButton {
        /// Button index; [`crate::map::MOUSE_INDEX_NONE`] for unmapped buttons.
        index: u32,
        /// Pressed (`true`) or released (`false`).
        down: bool,
    },
    /// Mouse wheel scroll.
    MouseWheel {
        /// Horizontal wheel delta.
        horizontal: f32,
        /// Vertical wheel delta.
        vertical: f32,
    },
    /// Absolute mouse position.
    MousePos {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },
}

/// Per-frame GUI IO: the input event queue plus the configuration words the
/// adapter mutates.
///
/// Events queue in call order and are consumed by the frame driver via
/// [`GuiIo::take_events`] before the GUI library's new-frame call.
#[derive(Debug, Default)]
pub struct GuiIo {
    events: Vec<IoEvent>,
    /// Feature configuration word.
    pub config_flags: BitFlags<ConfigFlag>,
    /// Backend capability word.
    pub backend_flags: BitFlags<BackendFlag>,
    /// Whether the GUI library draws the mouse cursor itself.
    pub mouse_draw_cursor: bool,
}

impl GuiIo {
    /// Empty queue, all flags clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text input character.
    pub fn add_input_character(&mut self, ch: GuiWchar) {
        self.events.push(IoEvent::Character(ch));
    }

    /// Queue a digital key transition.
    pub fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.events.push(IoEvent::Key { key, down });
    }

    /// Queue a key transition with an analog magnitude.
    pub fn add_key_analog_event(&mut self, key: GuiKey, down: bool, value: f32) {
        self.events.push(IoEvent::KeyAnalog { key, down, value });
    }

    /// Queue a mouse button transition.
    pub fn add_mouse_button_event(&mut self, index: u32, down: bool) {
        self.events.push(IoEvent::MouseButton { index, down });
    }

    /// Queue a mouse wheel scroll.
    pub fn add_mouse_wheel_event(&mut self, horizontal: f32, vertical: f32) {
        self.events.push(IoEvent::MouseWheel {
            horizontal,
            vertical,
        });
    }

    /// Queue an absolute mouse position.
    pub fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        self.events.push(IoEvent::MousePos { x, y });
    }

    /// Events queued since the last drain, in call order.
    pub fn events(&self) -> &[IoEvent] {
        &self.events
    }

    /// Drain the queue for consumption by the GUI frame driver.
    pub fn take_events(&mut self) -> Vec<IoEvent> {
        std::mem::take(&mut self.events)
    }
}

/// 2-component GUI vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuiVec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

/// 4-component GUI vector, also used as a rectangle (x, y, z, w).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuiVec4 {
    /// X component / rectangle left.
    pub x: f32,
    /// Y component / rectangle top.
    pub y: f32,
    /// Z component / rectangle right.
    pub z: f32,
    /// W component / rectangle bottom.
    pub w: f32,
}

/// Bit shift of the red channel in a packed GUI color.
pub const COL32_R_SHIFT: u32 = 0;
/// Bit shift of the green channel in a packed GUI color.
pub const COL32_G_SHIFT: u32 = 8;
/// Bit shift of the blue channel in a packed GUI color.
pub const COL32_B_SHIFT: u32 = 16;
/// Bit shift of the alpha channel in a packed GUI color.
pub const COL32_A_SHIFT: u32 = 24;

/// Opaque GUI texture id: a pointer-sized value the GUI library carries
/// through draw data without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuiTextureId(pub usize);

/// GUI cursor shape enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiCursor {
    /// No cursor requested.
    None,
    /// Standard arrow.
    Arrow,
    /// Text editing I-beam.
    TextInput,
    /// Four-direction move.
    ResizeAll,
    /// Vertical resize.
    ResizeNS,
    /// Horizontal resize.
    ResizeEW,
    /// Diagonal resize (bottom-left / top-right).
    ResizeNESW,
    /// Diagonal resize (bottom-right / top-left).
    ResizeNWSE,
    /// Pointing hand.
    Hand,
    /// Action not allowed.
    NotAllowed,
}
