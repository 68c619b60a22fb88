//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking and
//! drag detection), the sensitivity settings and the key-binding map. It is
//! the only thing that sits between raw window events and
//! [`Camera::apply`](crate::camera::Camera::apply).

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::DragState;
use crate::camera::{CameraCommand, NavigationState};

/// Maps physical key strings to [`KeyAction`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowUp"`, `"Space"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::walking()
    }
}

impl KeyBindings {
    /// Walking controls: W/A/S/D, arrows and H/J/K/L move in the horizon
    /// plane, Space goes up, Z goes down, `=`/`-` zoom.
    #[must_use]
    pub fn walking() -> Self {
        let mut bindings = Self::movement_keys();
        for (key, action) in [
            ("KeyA", KeyAction::MoveLeft),
            ("KeyH", KeyAction::MoveLeft),
            ("ArrowLeft", KeyAction::MoveLeft),
            ("KeyD", KeyAction::MoveRight),
            ("KeyL", KeyAction::MoveRight),
            ("ArrowRight", KeyAction::MoveRight),
            ("Space", KeyAction::MoveUp),
            ("KeyZ", KeyAction::MoveDown),
        ] {
            bindings.bind(key, action);
        }
        bindings
    }

    /// Flight controls: W/S (and K/J, arrows) fly forward and back, A/D
    /// (and H/L, arrows) roll, `=`/`-` zoom.
    #[must_use]
    pub fn flying() -> Self {
        let mut bindings = Self::movement_keys();
        for (key, action) in [
            ("KeyA", KeyAction::RollLeft),
            ("KeyH", KeyAction::RollLeft),
            ("ArrowLeft", KeyAction::RollLeft),
            ("KeyD", KeyAction::RollRight),
            ("KeyL", KeyAction::RollRight),
            ("ArrowRight", KeyAction::RollRight),
        ] {
            bindings.bind(key, action);
        }
        bindings
    }

    fn movement_keys() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyK".into(), KeyAction::MoveForward),
            ("ArrowUp".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyJ".into(), KeyAction::MoveBackward),
            ("ArrowDown".into(), KeyAction::MoveBackward),
            ("Equal".into(), KeyAction::ZoomIn),
            ("Minus".into(), KeyAction::ZoomOut),
        ]);
        Self { bindings }
    }

    /// Bind `key` to `action`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: &str, action: KeyAction) {
        let _ = self.bindings.insert(key.to_owned(), action);
    }

    /// Remove the binding of `key`, returning the action it had.
    pub fn unbind(&mut self, key: &str) -> Option<KeyAction> {
        self.bindings.remove(key)
    }

    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}

/// Scale factors from raw input to camera increments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sensitivity", inline)]
#[serde(default)]
pub struct Sensitivity {
    /// Mouse rotation in degrees per pixel, per degree/second of camera
    /// rotation speed.
    #[schemars(title = "Mouse Rotation", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub rotation_per_pixel: f32,
    /// Seconds of movement (or roll) one key press stands for.
    #[schemars(title = "Key Press Time", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub key_press_seconds: f32,
    /// Zoom increment per scroll-wheel click.
    #[schemars(title = "Scroll Zoom", range(min = 0.1, max = 2.0), extend("step" = 0.1))]
    pub scroll_zoom: f32,
    /// Zoom increment per zoom key press.
    #[schemars(title = "Key Zoom", range(min = 1.0, max = 15.0), extend("step" = 1.0))]
    pub key_zoom: f32,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            rotation_per_pixel: 0.02,
            key_press_seconds: 0.2,
            scroll_zoom: 0.5,
            key_zoom: 5.0,
        }
    }
}

/// Converts raw window events into [`CameraCommand`]s.
///
/// Drag with the primary button to rotate, scroll to zoom, and use the
/// bound keys to move, roll or zoom. Increments are scaled by the camera's
/// speed and rotation speed, read from the [`NavigationState`] passed in.
///
/// # Usage
///
/// ```
/// # use navcam::camera::HorizonCamera;
/// # use navcam::input::{InputProcessor, KeyBindings};
/// let mut camera = HorizonCamera::builder().with_speed(2.0).build();
/// let input = InputProcessor::with_key_bindings(KeyBindings::walking());
///
/// if let Some(cmd) = input.handle_key_press("KeyW", camera.state()) {
///     let _ = camera.apply(cmd);
/// }
/// assert!((camera.position().z + 0.4).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking and drag state.
    drag: DragState,
    /// Input-to-camera scale factors.
    sensitivity: Sensitivity,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default sensitivity and walking key
    /// bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Replace the sensitivity settings.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.drag.mouse_pos.x, self.drag.mouse_pos.y)
    }

    /// Whether a rotation drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Read-only access to the sensitivity settings.
    #[must_use]
    pub fn sensitivity(&self) -> &Sensitivity {
        &self.sensitivity
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(
        &self,
        key: &str,
        state: &NavigationState,
    ) -> Option<CameraCommand> {
        let action = self.key_bindings.lookup(key)?;
        let seconds = self.sensitivity.key_press_seconds;

        if let Some(direction) = action.move_direction() {
            return Some(CameraCommand::Move {
                direction: Some(direction),
                distance: state.speed() * seconds,
            });
        }
        let roll = state.rotation_speed() * seconds;
        let zoom = self.sensitivity.key_zoom;
        Some(match action {
            KeyAction::RollLeft => CameraCommand::Roll { degrees: roll },
            KeyAction::RollRight => CameraCommand::Roll { degrees: -roll },
            KeyAction::ZoomIn => CameraCommand::Zoom { delta: zoom },
            KeyAction::ZoomOut => CameraCommand::Zoom { delta: -zoom },
            KeyAction::MoveForward
            | KeyAction::MoveBackward
            | KeyAction::MoveLeft
            | KeyAction::MoveRight
            | KeyAction::MoveUp
            | KeyAction::MoveDown => return None,
        })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        state: &NavigationState,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.drag.handle_mouse_position(x, y)?;
                let degrees_per_pixel =
                    self.sensitivity.rotation_per_pixel * state.rotation_speed();
                // Window y grows downward; dragging up pitches up.
                Some(CameraCommand::Rotate {
                    pitch: -delta.y * degrees_per_pixel,
                    yaw: delta.x * degrees_per_pixel,
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    if pressed {
                        self.drag.press();
                    } else {
                        self.drag.release();
                    }
                }
                None
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Zoom {
                delta: delta * self.sensitivity.scroll_zoom,
            }),
        }
    }
}
