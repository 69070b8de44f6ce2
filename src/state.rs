//! Input State Holder
//!
//! Collects per-frame input facts from the engine, forwards each one into
//! the owned GUI IO queue at the moment it arrives, and keeps a local
//! mirror for callers that need "is shift currently down" style queries
//! outside the GUI library's own frame processing.
//!
//! One instance per GUI context, driven from the engine's input-dispatch
//! phase on its main thread. The frame driver calls
//! [`InputState::clear_update_state`] once per frame boundary after
//! draining the queue.

use crate::config::InputConfig;
use crate::engine::{AnalogInputEvent, Key, KeyEvent, PointerEvent, Vector2};
use crate::gui::{set_flag, BackendFlag, ConfigFlag, GuiIo, GuiKey};
use crate::map;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Axis deflection (after dead-zone subtraction) above which the direction
/// key reports as digitally pressed.
const AXIS_DIGITAL_THRESHOLD: f32 = 0.10;

/// Per-context input state: GUI IO queue plus the engine-side mirror.
#[derive(Debug)]
pub struct InputState {
    io: GuiIo,

    mouse_position: Vector2,
    touch_position: Vector2,
    mouse_wheel_delta: f32,

    has_mouse_pointer: bool,
    touch_down: bool,
    touch_processed: bool,

    left_control_down: bool,
    right_control_down: bool,
    control_down: bool,

    left_shift_down: bool,
    right_shift_down: bool,
    shift_down: bool,

    left_alt_down: bool,
    right_alt_down: bool,
    alt_down: bool,

    left_command_down: bool,
    right_command_down: bool,
    command_down: bool,

    keyboard_navigation_enabled: bool,
    gamepad_navigation_enabled: bool,
    has_gamepad: bool,

    axis_dead_zone: f32,

    key_down_events: HashMap<u32, KeyEvent>,
    key_up_events: HashMap<u32, KeyEvent>,
}

impl InputState {
    /// Zeroed state with the given configuration applied.
    pub fn new(config: &InputConfig) -> Self {
        let mut state = Self {
            io: GuiIo::new(),
            mouse_position: Vector2::ZERO,
            touch_position: Vector2::ZERO,
            mouse_wheel_delta: 0.0,
            has_mouse_pointer: false,
            touch_down: false,
            touch_processed: false,
            left_control_down: false,
            right_control_down: false,
            control_down: false,
            left_shift_down: false,
            right_shift_down: false,
            shift_down: false,
            left_alt_down: false,
            right_alt_down: false,
            alt_down: false,
            left_command_down: false,
            right_command_down: false,
            command_down: false,
            keyboard_navigation_enabled: false,
            gamepad_navigation_enabled: false,
            has_gamepad: false,
            axis_dead_zone: config.axis_dead_zone,
            key_down_events: HashMap::new(),
            key_up_events: HashMap::new(),
        };

        state.set_keyboard_navigation_enabled(config.keyboard_navigation);
        state.set_gamepad_navigation_enabled(config.gamepad_navigation);
        state.set_gamepad(config.gamepad_attached);
        state.set_mouse_pointer(config.draw_mouse_cursor);
        state
    }

    /// The GUI IO queue and flag words owned by this state.
    pub fn io(&self) -> &GuiIo {
        &self.io
    }

    /// Mutable access for the frame driver (draining events, reading flags).
    pub fn io_mut(&mut self) -> &mut GuiIo {
        &mut self.io
    }

    /// Forward a text input character, narrowed to the GUI character width.
    pub fn add_character(&mut self, ch: char) {
        self.io.add_input_character(map::cast_input_char(ch));
    }

    /// Forward a key transition and update the modifier mirror.
    ///
    /// Unmapped keys are forwarded with the [`GuiKey::None`] sentinel, which
    /// the GUI library ignores. Only the sub-flag belonging to the reported
    /// modifier key is written; unrelated modifiers keep their state.
    pub fn set_key_down(&mut self, key: Key, down: bool) {
        let gui_key = map::gui_key(key);
        self.io.add_key_event(gui_key, down);
        trace!(?key, ?gui_key, down, "key event forwarded");

        match gui_key {
            GuiKey::LeftCtrl => {
                self.left_control_down = down;
                self.control_down = self.left_control_down || self.right_control_down;
            }
            GuiKey::RightCtrl => {
                self.right_control_down = down;
                self.control_down = self.left_control_down || self.right_control_down;
            }
            GuiKey::LeftShift => {
                self.left_shift_down = down;
                self.shift_down = self.left_shift_down || self.right_shift_down;
            }
            GuiKey::RightShift => {
                self.right_shift_down = down;
                self.shift_down = self.left_shift_down || self.right_shift_down;
            }
            GuiKey::LeftAlt => {
                self.left_alt_down = down;
                self.alt_down = self.left_alt_down || self.right_alt_down;
            }
            GuiKey::RightAlt => {
                self.right_alt_down = down;
                self.alt_down = self.left_alt_down || self.right_alt_down;
            }
            GuiKey::LeftSuper => {
                self.left_command_down = down;
                self.command_down = self.left_command_down || self.right_command_down;
            }
            GuiKey::RightSuper => {
                self.right_command_down = down;
                self.command_down = self.left_command_down || self.right_command_down;
            }
            _ => {}
        }
    }

    /// [`InputState::set_key_down`] for a full key event; also records the
    /// event as the last down/up event for its key index.
    pub fn set_key_event_down(&mut self, event: &KeyEvent, down: bool) {
        self.set_key_down(event.key, down);

        let index = map::key_index(event);
        if down {
            self.key_down_events.insert(index, *event);
        } else {
            self.key_up_events.insert(index, *event);
        }
    }

    /// Forward a mouse button transition.
    ///
    /// Buttons without a table entry are forwarded with
    /// [`map::MOUSE_INDEX_NONE`].
    pub fn set_mouse_down(&mut self, button: Key, down: bool) {
        let index = map::mouse_index(button);
        self.io.add_mouse_button_event(index, down);
        trace!(?button, index, down, "mouse button forwarded");
    }

    /// [`InputState::set_mouse_down`] for a pointer event.
    pub fn set_pointer_down(&mut self, event: &PointerEvent, down: bool) {
        self.set_mouse_down(event.effecting_button(), down);
    }

    /// Mouse wheel delta accumulated during the current frame.
    pub fn mouse_wheel_delta(&self) -> f32 {
        self.mouse_wheel_delta
    }

    /// Forward a wheel delta and add it to the per-frame accumulator.
    pub fn add_mouse_wheel_delta(&mut self, delta: f32) {
        self.io.add_mouse_wheel_event(0.0, delta);
        self.mouse_wheel_delta += delta;
    }

    /// Mirrored mouse position.
    pub fn mouse_position(&self) -> Vector2 {
        self.mouse_position
    }

    /// Forward an absolute mouse position and update the mirror.
    pub fn set_mouse_position(&mut self, position: Vector2) {
        self.io.add_mouse_pos_event(position.x, position.y);
        self.mouse_position = position;
    }

    /// Whether a GUI-drawn cursor is requested.
    pub fn has_mouse_pointer(&self) -> bool {
        self.has_mouse_pointer
    }

    /// Toggle GUI cursor drawing.
    pub fn set_mouse_pointer(&mut self, has_pointer: bool) {
        self.io.mouse_draw_cursor = has_pointer;
        self.has_mouse_pointer = has_pointer;
    }

    /// True from touch start until one frame after it ends.
    ///
    /// The one-frame tail lets the GUI library observe the mouse release
    /// that simulates the touch ending.
    pub fn is_touch_active(&self) -> bool {
        self.touch_down || self.touch_processed
    }

    /// Whether touch input is currently down.
    pub fn is_touch_down(&self) -> bool {
        self.touch_down
    }

    /// Forward a touch press/release as a mouse button 0 transition.
    pub fn set_touch_down(&mut self, down: bool) {
        self.io.add_mouse_button_event(0, down);
        self.touch_down = down;
    }

    /// Mirrored touch position.
    pub fn touch_position(&self) -> Vector2 {
        self.touch_position
    }

    /// Forward a touch position on the shared pointer channel.
    pub fn set_touch_position(&mut self, position: Vector2) {
        self.io.add_mouse_pos_event(position.x, position.y);
        self.touch_position = position;
    }

    /// Left Control down.
    pub fn is_left_control_down(&self) -> bool {
        self.left_control_down
    }

    /// Right Control down.
    pub fn is_right_control_down(&self) -> bool {
        self.right_control_down
    }

    /// Either Control down.
    pub fn is_control_down(&self) -> bool {
        self.control_down
    }

    /// Left Shift down.
    pub fn is_left_shift_down(&self) -> bool {
        self.left_shift_down
    }

    /// Right Shift down.
    pub fn is_right_shift_down(&self) -> bool {
        self.right_shift_down
    }

    /// Either Shift down.
    pub fn is_shift_down(&self) -> bool {
        self.shift_down
    }

    /// Left Alt down.
    pub fn is_left_alt_down(&self) -> bool {
        self.left_alt_down
    }

    /// Right Alt down.
    pub fn is_right_alt_down(&self) -> bool {
        self.right_alt_down
    }

    /// Either Alt down.
    pub fn is_alt_down(&self) -> bool {
        self.alt_down
    }

    /// Left Command down.
    pub fn is_left_command_down(&self) -> bool {
        self.left_command_down
    }

    /// Right Command down.
    pub fn is_right_command_down(&self) -> bool {
        self.right_command_down
    }

    /// Either Command down.
    pub fn is_command_down(&self) -> bool {
        self.command_down
    }

    /// Forward a gamepad navigation axis value as a direction key pair.
    ///
    /// Non-gamepad keys are ignored. The dead zone is subtracted from the
    /// deflection magnitude before clamping at zero; the active direction
    /// key carries the remaining magnitude (digitally pressed above
    /// [`AXIS_DIGITAL_THRESHOLD`]) and the opposite direction is zeroed on
    /// every call.
    pub fn set_gamepad_navigation_axis(&mut self, event: &AnalogInputEvent, value: f32) {
        if !event.key.is_gamepad_key() {
            return;
        }

        let range = map::navigation_axis(event.key);

        let magnitude = (value.abs() - self.axis_dead_zone).max(0.0);
        let pressed = magnitude > AXIS_DIGITAL_THRESHOLD;

        if value < 0.0 {
            self.io.add_key_analog_event(range.negative, pressed, magnitude);
            self.io.add_key_analog_event(range.positive, false, 0.0);
        } else {
            self.io.add_key_analog_event(range.positive, pressed, magnitude);
            self.io.add_key_analog_event(range.negative, false, 0.0);
        }
    }

    /// Whether keyboard navigation is enabled.
    pub fn is_keyboard_navigation_enabled(&self) -> bool {
        self.keyboard_navigation_enabled
    }

    /// Toggle keyboard navigation on the GUI config flag word.
    pub fn set_keyboard_navigation_enabled(&mut self, enabled: bool) {
        set_flag(
            &mut self.io.config_flags,
            ConfigFlag::NavEnableKeyboard,
            enabled,
        );
        self.keyboard_navigation_enabled = enabled;
        debug!(enabled, "keyboard navigation");
    }

    /// Whether gamepad navigation is enabled.
    pub fn is_gamepad_navigation_enabled(&self) -> bool {
        self.gamepad_navigation_enabled
    }

    /// Toggle gamepad navigation on the GUI config flag word.
    pub fn set_gamepad_navigation_enabled(&mut self, enabled: bool) {
        set_flag(
            &mut self.io.config_flags,
            ConfigFlag::NavEnableGamepad,
            enabled,
        );
        self.gamepad_navigation_enabled = enabled;
        debug!(enabled, "gamepad navigation");
    }

    /// Whether a gamepad is attached.
    pub fn has_gamepad(&self) -> bool {
        self.has_gamepad
    }

    /// Toggle gamepad presence on the GUI backend flag word.
    pub fn set_gamepad(&mut self, has_gamepad: bool) {
        set_flag(
            &mut self.io.backend_flags,
            BackendFlag::HasGamepad,
            has_gamepad,
        );
        self.has_gamepad = has_gamepad;
        debug!(has_gamepad, "gamepad presence");
    }

    /// Last key-down event per key index.
    pub fn key_down_events(&self) -> &HashMap<u32, KeyEvent> {
        &self.key_down_events
    }

    /// Last key-up event per key index.
    pub fn key_up_events(&self) -> &HashMap<u32, KeyEvent> {
        &self.key_up_events
    }

    /// Per-frame cleanup, invoked once per frame boundary by the frame
    /// driver.
    ///
    /// Carries the just-ended frame's touch-down flag into the processed
    /// flag (the one-frame grace for [`InputState::is_touch_active`]) and
    /// resets the wheel accumulator. Persistent flags are untouched.
    pub fn clear_update_state(&mut self) {
        self.touch_processed = self.touch_down;
        self.mouse_wheel_delta = 0.0;
    }

    /// Reset keyboard and mouse state; for contexts gaining or losing
    /// focus.
    pub fn reset(&mut self) {
        self.reset_keyboard();
        self.reset_mouse();
    }

    /// Reset keyboard state: all modifier flags and the recorded key
    /// events.
    pub fn reset_keyboard(&mut self) {
        self.clear_modifier_keys();
        self.key_down_events.clear();
        self.key_up_events.clear();
        debug!("keyboard state reset");
    }

    /// Reset mouse state: position and wheel accumulator.
    pub fn reset_mouse(&mut self) {
        self.clear_mouse_analogue();
        debug!("mouse state reset");
    }

    fn clear_mouse_analogue(&mut self) {
        self.mouse_position = Vector2::ZERO;
        self.mouse_wheel_delta = 0.0;
    }

    fn clear_modifier_keys(&mut self) {
        self.left_control_down = false;
        self.right_control_down = false;
        self.left_shift_down = false;
        self.right_shift_down = false;
        self.left_alt_down = false;
        self.right_alt_down = false;
        self.left_command_down = false;
        self.right_command_down = false;

        self.control_down = false;
        self.shift_down = false;
        self.alt_down = false;
        self.command_down = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
