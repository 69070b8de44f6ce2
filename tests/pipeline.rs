//! End-to-end pipeline tests: engine events in, drained GUI IO queue out.

use gui_input_bridge::{
    AnalogInputEvent, GuiKey, InputConfig, InputState, IoEvent, Key, KeyEvent, PointerEvent,
    Vector2,
};
use std::io::Write;

#[test]
fn frame_of_mixed_input_reaches_gui_queue_in_order() {
    let mut state = InputState::new(&InputConfig::default());

    // Engine input-dispatch phase for one frame.
    state.set_key_event_down(&KeyEvent::new(Key::LeftControl, Some(29), None), true);
    state.set_key_event_down(&KeyEvent::new(Key::C, Some(46), None), true);
    state.add_character('c');
    state.set_mouse_position(Vector2::new(640.0, 360.0));
    state.set_pointer_down(
        &PointerEvent {
            button: Key::LeftMouseButton,
            position: Vector2::new(640.0, 360.0),
        },
        true,
    );
    state.add_mouse_wheel_delta(-1.0);

    assert!(state.is_control_down());
    assert_eq!(state.mouse_wheel_delta(), -1.0);

    // Frame boundary: the driver drains the queue for the GUI library.
    let events = state.io_mut().take_events();
    assert_eq!(
        events,
        vec![
            IoEvent::Key {
                key: GuiKey::LeftCtrl,
                down: true
            },
            IoEvent::Key {
                key: GuiKey::C,
                down: true
            },
            IoEvent::Character(0x63),
            IoEvent::MousePos { x: 640.0, y: 360.0 },
            IoEvent::MouseButton {
                index: 0,
                down: true
            },
            IoEvent::MouseWheel {
                horizontal: 0.0,
                vertical: -1.0
            },
        ]
    );

    state.clear_update_state();
    assert_eq!(state.mouse_wheel_delta(), 0.0);
    // Mirror state persists across the frame boundary.
    assert!(state.is_control_down());
    assert_eq!(state.mouse_position(), Vector2::new(640.0, 360.0));
}

#[test]
fn touch_sequence_over_three_frames() {
    let mut state = InputState::new(&InputConfig::default());

    // Frame 1: touch begins.
    state.set_touch_position(Vector2::new(100.0, 100.0));
    state.set_touch_down(true);
    assert!(state.is_touch_active());
    state.io_mut().take_events();
    state.clear_update_state();

    // Frame 2: touch ends; the simulated mouse release still needs to be
    // observed, so touch stays active through this frame.
    state.set_touch_down(false);
    let events = state.io_mut().take_events();
    assert_eq!(
        events,
        vec![IoEvent::MouseButton {
            index: 0,
            down: false
        }]
    );
    assert!(state.is_touch_active());
    state.clear_update_state();

    // Frame 3: fully inactive.
    assert!(!state.is_touch_active());
}

#[test]
fn gamepad_navigation_full_deflection() {
    let mut state = InputState::new(&InputConfig {
        gamepad_navigation: true,
        gamepad_attached: true,
        ..InputConfig::default()
    });

    state.set_gamepad_navigation_axis(&AnalogInputEvent::new(Key::GamepadLeftX), 1.0);

    let events = state.io_mut().take_events();
    assert_eq!(events.len(), 2);
    match events[0] {
        IoEvent::KeyAnalog { key, down, value } => {
            assert_eq!(key, GuiKey::GamepadLStickRight);
            assert!(down);
            assert!((value - 0.834).abs() < 1e-5);
        }
        other => panic!("expected analog event, got {other:?}"),
    }
    assert_eq!(
        events[1],
        IoEvent::KeyAnalog {
            key: GuiKey::GamepadLStickLeft,
            down: false,
            value: 0.0
        }
    );
}

#[test]
fn config_file_drives_initial_state() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "keyboard_navigation = true\ngamepad_attached = true\naxis_dead_zone = 0.25"
    )
    .unwrap();

    let config = InputConfig::load_from_file(file.path()).unwrap();
    let mut state = InputState::new(&config);

    assert!(state.is_keyboard_navigation_enabled());
    assert!(!state.is_gamepad_navigation_enabled());
    assert!(state.has_gamepad());

    // The configured dead zone swallows a 0.2 deflection entirely.
    state.io_mut().take_events();
    state.set_gamepad_navigation_axis(&AnalogInputEvent::new(Key::GamepadRightX), 0.2);
    let events = state.io_mut().take_events();
    match events[0] {
        IoEvent::KeyAnalog { down, value, .. } => {
            assert!(!down);
            assert_eq!(value, 0.0);
        }
        other => panic!("expected analog event, got {other:?}"),
    }
}

#[test]
fn rejected_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "axis_dead_zone = 2.0").unwrap();

    assert!(InputConfig::load_from_file(file.path()).is_err());
}
