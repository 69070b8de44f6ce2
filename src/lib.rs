//! # gui-input-bridge
//!
//! Translation layer between a host game engine's input events and the
//! event model of an embedded immediate-mode GUI library, plus the small
//! bidirectional value conversions (colors, rectangles, vectors, cursor
//! shapes, texture handles) the two sides exchange.
//!
//! Neither peer is reimplemented here: the engine's input dispatch and the
//! GUI library's rendering and layout stay external. This crate models
//! both boundary vocabularies and does the mapping in between.
//!
//! # Architecture
//!
//! ```text
//! Engine input events
//!       ↓
//! ┌─────────────────────────┐
//! │  InputState             │ ← one per GUI context
//! │  - immediate forwarding │
//! │  - mirrored flags       │
//! └─────────────────────────┘
//!       ↓           ↓
//! ┌──────────┐ ┌─────────────┐
//! │ Mapping  │ │  GuiIo      │
//! │ tables   │ │ event queue │
//! └──────────┘ └─────────────┘
//!                    ↓
//!            GUI new-frame call
//! ```
//!
//! # Data Flow
//!
//! The engine raises an input event during its input-dispatch phase → the
//! caller invokes the matching [`InputState`] setter → the setter looks up
//! the GUI key/button through the static tables → the translated event is
//! pushed into the [`GuiIo`] queue and the local mirror updated. Nothing is
//! batched; translation is synchronous and immediate. Once per frame the
//! driver drains the queue ([`GuiIo::take_events`]) and calls
//! [`InputState::clear_update_state`].
//!
//! # Usage Example
//!
//! ```rust
//! use gui_input_bridge::{InputConfig, InputState, Key, Vector2};
//!
//! let mut state = InputState::new(&InputConfig::default());
//!
//! // Engine input-dispatch phase.
//! state.set_key_down(Key::LeftShift, true);
//! state.set_mouse_position(Vector2::new(320.0, 240.0));
//! state.add_mouse_wheel_delta(1.0);
//!
//! assert!(state.is_shift_down());
//!
//! // Frame boundary: feed the queue to the GUI library, then clear.
//! let events = state.io_mut().take_events();
//! assert_eq!(events.len(), 3);
//! state.clear_update_state();
//! ```
//!
//! # Failure Semantics
//!
//! No forwarding operation returns an error. Unmapped keys and buttons
//! degrade to sentinels ([`GuiKey::None`], [`map::MOUSE_INDEX_NONE`]) the
//! GUI library treats as no-ops, and character narrowing truncates (with a
//! debug-build diagnostic). Only the configuration layer is fallible.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod gui;
pub mod map;
pub mod state;

pub use config::InputConfig;
pub use engine::{
    AnalogInputEvent, Color, EngineCursor, Key, KeyEvent, PointerEvent, Rect, TextureIndex,
    Vector2,
};
pub use error::{BridgeError, Result};
pub use gui::{
    BackendFlag, ConfigFlag, GuiCursor, GuiIo, GuiKey, GuiTextureId, GuiVec2, GuiVec4, GuiWchar,
    IoEvent,
};
pub use map::{GamepadKeyRange, MOUSE_INDEX_NONE};
pub use state::InputState;
