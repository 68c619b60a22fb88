use glam::{Mat4, UVec2, Vec2, Vec3};

use super::basis::Basis;
use super::builder::CameraBuilder;
use super::navigation::NavigationState;
use super::orientation::{CameraCommand, MoveDirection, Orientation};
use super::ray::Ray;

/// A navigable camera: [`NavigationState`] driven by an orientation
/// strategy `O`.
///
/// Construct through [`Camera::builder`]. The aliases
/// [`FlightCamera`](super::FlightCamera) and
/// [`HorizonCamera`](super::HorizonCamera) name the two variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera<O: Orientation> {
    state: NavigationState,
    orientation: O,
}

impl<O: Orientation> Camera<O> {
    /// Start a deferred builder.
    #[must_use]
    pub fn builder() -> CameraBuilder<O> {
        CameraBuilder::new()
    }

    pub(crate) fn from_parts(state: NavigationState, orientation: O) -> Self {
        Self { state, orientation }
    }

    /// Apply an interactive command. Returns `false` if this camera variant
    /// does not support it (roll on a horizon-locked camera).
    pub fn apply(&mut self, command: CameraCommand) -> bool {
        match command {
            CameraCommand::Move {
                direction,
                distance,
            } => {
                self.move_along(direction.unwrap_or_default(), distance);
                true
            }
            CameraCommand::Rotate { pitch, yaw } => {
                self.pitch_and_yaw(pitch, yaw);
                true
            }
            CameraCommand::Roll { degrees } => {
                self.orientation.roll(&mut self.state, degrees)
            }
            CameraCommand::Zoom { delta } => {
                self.zoom(delta);
                true
            }
        }
    }

    /// Move `distance` world units along the axis `direction` selects for
    /// this camera variant.
    pub fn move_along(&mut self, direction: MoveDirection, distance: f32) {
        let axis = self.orientation.move_axis(&self.state, direction);
        self.state.translate(distance * axis);
    }

    /// Incremental pitch then yaw, in degrees.
    pub fn pitch_and_yaw(&mut self, pitch: f32, yaw: f32) {
        self.orientation.pitch_and_yaw(&mut self.state, pitch, yaw);
    }

    /// Move by `delta` in world space; orientation is unchanged.
    pub fn translate(&mut self, delta: Vec3) {
        self.state.translate(delta);
    }

    /// Zoom in (positive) or out (negative); see
    /// [`NavigationState::zoom`].
    pub fn zoom(&mut self, increment: f32) {
        self.state.zoom(increment);
    }

    /// Position, frame, lens and speeds.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Mutable access for speed, lens, clip-plane and viewport settings.
    pub fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.state
    }

    /// Orientation strategy state.
    #[must_use]
    pub fn orientation(&self) -> &O {
        &self.orientation
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.position()
    }

    /// Orthonormal camera frame.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        self.state.basis()
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.state.direction()
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.state.up()
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.state.right()
    }

    /// World-to-eye transform, read once per frame by the render pass.
    #[must_use]
    pub fn view_transform(&self) -> Mat4 {
        self.state.view_transform()
    }

    /// Projection transform for a viewport of `viewport_size` pixels.
    #[must_use]
    pub fn projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.state.projection_transform(viewport_size)
    }

    /// Projection transform with the far plane at infinity.
    #[must_use]
    pub fn infinite_projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.state.infinite_projection_transform(viewport_size)
    }

    /// World-space ray through the pixel `position` (origin bottom-left).
    #[must_use]
    pub fn screen_point_to_ray(&self, position: Vec2, window_size: UVec2) -> Ray {
        self.state.screen_point_to_ray(position, window_size)
    }
}
