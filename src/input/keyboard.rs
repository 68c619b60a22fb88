use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [controls.key_bindings.bindings]
/// KeyW = "move_forward"
/// Space = "move_up"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the facing direction.
    MoveForward,
    /// Move against the facing direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Move along up.
    MoveUp,
    /// Move along -up.
    MoveDown,
    /// Roll counter-clockwise (flight cameras only).
    RollLeft,
    /// Roll clockwise (flight cameras only).
    RollRight,
    /// Narrow the field of view.
    ZoomIn,
    /// Widen the field of view.
    ZoomOut,
}

impl KeyAction {
    /// Movement axis, for the `Move*` actions.
    #[must_use]
    pub const fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::MoveUp => Some(MoveDirection::Up),
            Self::MoveDown => Some(MoveDirection::Down),
            Self::RollLeft | Self::RollRight | Self::ZoomIn | Self::ZoomOut => {
                None
            }
        }
    }
}
