//! Host Engine Boundary Types
//!
//! The vocabulary consumed from the host engine: abstract key identifiers,
//! the event objects that wrap them, and the small value types (vectors,
//! colors, rectangles, cursor shapes, texture indices) that cross the
//! boundary in both directions. The engine itself is out of scope; these
//! types model its input surface the same way the produced GUI surface is
//! modeled in [`crate::gui`].

/// Abstract engine key identifier.
///
/// Covers keyboard keys, mouse buttons, gamepad buttons, and gamepad analog
/// axes in a single namespace, mirroring how the engine reports every input
/// source through one key type.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Modifiers
    LeftControl,
    RightControl,
    LeftShift,
    RightShift,
    LeftAlt,
    RightAlt,
    LeftCommand,
    RightCommand,

    Tab,

    // Arrows
    Left,
    Right,
    Up,
    Down,

    // Navigation block
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    // Locks
    NumLock,
    ScrollLock,
    Pause,

    BackSpace,
    SpaceBar,
    Enter,
    Escape,

    // Letters
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

    // Function keys
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

    // Top-row digits
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,

    // Punctuation
    Equals,
    Comma,
    Period,
    Slash,
    LeftBracket,
    RightBracket,
    Apostrophe,
    Semicolon,

    // Numpad
    NumPadZero,
    NumPadOne,
    NumPadTwo,
    NumPadThree,
    NumPadFour,
    NumPadFive,
    NumPadSix,
    NumPadSeven,
    NumPadEight,
    NumPadNine,
    Multiply,
    Add,
    Subtract,
    Decimal,
    Divide,

    // Mouse buttons
    LeftMouseButton,
    RightMouseButton,
    MiddleMouseButton,
    ThumbMouseButton,
    ThumbMouseButton2,

    // Gamepad buttons
    GamepadFaceButtonBottom,
    GamepadFaceButtonRight,
    GamepadFaceButtonTop,
    GamepadFaceButtonLeft,
    GamepadDpadLeft,
    GamepadDpadRight,
    GamepadDpadUp,
    GamepadDpadDown,
    GamepadLeftShoulder,
    GamepadRightShoulder,

    // Gamepad analog axes
    GamepadLeftX,
    GamepadLeftY,
    GamepadRightX,
    GamepadRightY,
}

impl Key {
    /// True for keys originating from a gamepad (buttons and analog axes).
    pub fn is_gamepad_key(self) -> bool {
        matches!(
            self,
            Key::GamepadFaceButtonBottom
                | Key::GamepadFaceButtonRight
                | Key::GamepadFaceButtonTop
                | Key::GamepadFaceButtonLeft
                | Key::GamepadDpadLeft
                | Key::GamepadDpadRight
                | Key::GamepadDpadUp
                | Key::GamepadDpadDown
                | Key::GamepadLeftShoulder
                | Key::GamepadRightShoulder
                | Key::GamepadLeftX
                | Key::GamepadLeftY
                | Key::GamepadRightX
                | Key::GamepadRightY
        )
    }
}

/// Key event raised by the engine for a key press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// Key the event refers to.
    pub key: Key,
    /// Native platform key code, when the platform reported one.
    pub key_code: Option<u32>,
    /// Native character code, when the platform reported one.
    pub char_code: Option<u32>,
}

impl KeyEvent {
    /// Event for `key` with both native codes.
    pub fn new(key: Key, key_code: Option<u32>, char_code: Option<u32>) -> Self {
        Self {
            key,
            key_code,
            char_code,
        }
    }
}

/// Pointer event raised by the engine for a mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Mouse button that caused the event.
    pub button: Key,
    /// Pointer position at the time of the event.
    pub position: Vector2,
}

impl PointerEvent {
    /// The mouse button key this event reports.
    pub fn effecting_button(&self) -> Key {
        self.button
    }
}

/// Analog input event raised by the engine for a gamepad axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogInputEvent {
    /// Axis key the event refers to.
    pub key: Key,
}

impl AnalogInputEvent {
    /// Event for the given axis key.
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

/// 2D point/vector in engine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The origin.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Vector from components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Engine color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Axis-aligned rectangle in engine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

/// Index of a texture resource registered with the engine renderer.
///
/// Round-trips through [`crate::gui::GuiTextureId`] without validation; the
/// value is only meaningful to the texture manager that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureIndex(pub i32);

/// Engine cursor shapes the GUI cursor enumeration maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCursor {
    /// Standard arrow cursor.
    Default,
    /// Text editing I-beam.
    TextEditBeam,
    /// Four-direction move cursor.
    CardinalCross,
    /// Vertical resize cursor.
    ResizeUpDown,
    /// Horizontal resize cursor.
    ResizeLeftRight,
    /// Diagonal resize cursor (bottom-left / top-right).
    ResizeSouthWest,
    /// Diagonal resize cursor (bottom-right / top-left).
    ResizeSouthEast,
    /// No cursor drawn by the engine.
    None,
}
