//! Horizon-locked ("walking") orientation.
//!
//! The right vector is always re-derived against a fixed world-up, so the
//! camera never accumulates roll. Pitch is clamped just short of the poles
//! and yaw is damped by how much of the view direction still lies in the
//! horizon plane.

use glam::Vec3;

use super::basis::{reject, tilt, Basis};
use super::builder::NavigationConfig;
use super::navigable::Camera;
use super::navigation::NavigationState;
use super::orientation::{sealed::Strategy, MoveDirection, Orientation};
use crate::error::CameraError;

/// Largest angle in degrees between the view direction and the horizon
/// plane.
pub const POLE_CLAMP_DEGREES: f32 = 89.9;

/// Orientation locked to a fixed world-up reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonLocked {
    world_up: Vec3,
    forward: Vec3,
    forward_len: f32,
}

/// Builder settings for [`HorizonLocked`].
#[derive(Debug, Clone, Default)]
pub struct HorizonSettings {
    pub(crate) world_up: Option<Vec3>,
}

/// Camera with horizon-locked orientation.
pub type HorizonCamera = Camera<HorizonLocked>;

impl HorizonLocked {
    /// Fixed world-up reference (unit length).
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// View direction projected onto the horizon plane (unit length).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Length of the horizon projection before normalization; the cosine of
    /// the view elevation.
    #[must_use]
    pub fn forward_len(&self) -> f32 {
        self.forward_len
    }

    fn update_forward(&mut self, direction: Vec3) {
        let forward = reject(direction, self.world_up);
        self.forward_len = forward.length();
        self.forward = forward.normalize();
    }
}

impl Strategy for HorizonLocked {
    type Settings = HorizonSettings;

    fn init(
        state: &mut NavigationState,
        config: &NavigationConfig,
        settings: HorizonSettings,
    ) -> Self {
        let world_up = settings.world_up.unwrap_or(config.up).normalize();
        *state.basis_mut() = Basis::from_direction_up(config.direction, world_up);
        state.update_view();

        let mut horizon = Self {
            world_up,
            forward: Vec3::ZERO,
            forward_len: 0.0,
        };
        horizon.update_forward(state.direction());
        if !(horizon.forward_len >= POLE_CLAMP_DEGREES.to_radians().cos()) {
            log::warn!(
                "horizon camera direction {} is too close to world up {world_up}",
                state.direction()
            );
        }
        horizon
    }

    fn validate(
        config: &NavigationConfig,
        settings: &HorizonSettings,
    ) -> Result<(), CameraError> {
        let world_up = settings.world_up.unwrap_or(config.up);
        if Basis::spans(config.direction, world_up) {
            Ok(())
        } else {
            Err(CameraError::DegenerateBasis {
                direction: config.direction,
                up: world_up,
            })
        }
    }

    fn pitch_and_yaw(
        &mut self,
        state: &mut NavigationState,
        pitch: f32,
        yaw: f32,
    ) {
        let scaled_yaw = self.forward_len * yaw;
        let basis = state.basis_mut();

        basis.pitch(pitch);

        let cos_max = POLE_CLAMP_DEGREES.to_radians().cos();
        let cos_theta = self.forward.dot(basis.direction);
        if cos_theta < cos_max {
            basis.direction = (basis.direction
                + (cos_max - cos_theta) * self.forward)
                .normalize();
            basis.up = basis.right.cross(basis.direction);
        }

        basis.direction = tilt(basis.direction, basis.right, scaled_yaw);
        basis.right = basis.direction.cross(self.world_up).normalize();
        basis.up = basis.right.cross(basis.direction);

        self.update_forward(basis.direction);
        state.update_view();
    }

    fn roll(&mut self, _state: &mut NavigationState, degrees: f32) -> bool {
        log::debug!("horizon-locked camera ignores roll of {degrees}°");
        false
    }

    fn move_axis(
        &self,
        state: &NavigationState,
        direction: MoveDirection,
    ) -> Vec3 {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Backward => -self.forward,
            MoveDirection::Left => -state.right(),
            MoveDirection::Right => state.right(),
            MoveDirection::Up => state.up(),
            MoveDirection::Down => -state.up(),
        }
    }
}

impl Orientation for HorizonLocked {}

impl Camera<HorizonLocked> {
    /// Move `distance` along a horizon-relative axis. Forward and backward
    /// stay in the horizon plane whatever the pitch.
    pub fn walk(&mut self, distance: f32, direction: MoveDirection) {
        self.move_along(direction, distance);
    }

    /// Fixed world-up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.orientation().world_up()
    }

    /// Horizon-plane facing vector.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation().forward()
    }

    /// Yaw sensitivity scale, see [`HorizonLocked::forward_len`].
    #[must_use]
    pub fn forward_len(&self) -> f32 {
        self.orientation().forward_len()
    }
}
