//! Free-flight orientation: pitch, yaw and roll in the camera's own frame.

use glam::Vec3;

use super::builder::NavigationConfig;
use super::navigable::Camera;
use super::navigation::NavigationState;
use super::orientation::{sealed::Strategy, MoveDirection, Orientation};

/// Unconstrained orientation. Every rotation is relative to the current
/// frame, so the camera can loop and roll freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreeFlight;

/// Camera with free-flight orientation.
pub type FlightCamera = Camera<FreeFlight>;

impl Strategy for FreeFlight {
    type Settings = ();

    fn init(
        _state: &mut NavigationState,
        _config: &NavigationConfig,
        _settings: (),
    ) -> Self {
        Self
    }

    fn pitch_and_yaw(
        &mut self,
        state: &mut NavigationState,
        pitch: f32,
        yaw: f32,
    ) {
        let basis = state.basis_mut();
        basis.pitch(pitch);
        basis.yaw(yaw);
        state.update_view();
    }

    fn roll(&mut self, state: &mut NavigationState, degrees: f32) -> bool {
        roll_frame(state, degrees);
        true
    }

    fn move_axis(
        &self,
        state: &NavigationState,
        direction: MoveDirection,
    ) -> Vec3 {
        let basis = state.basis();
        match direction {
            MoveDirection::Forward => basis.direction,
            MoveDirection::Backward => -basis.direction,
            MoveDirection::Left => -basis.right,
            MoveDirection::Right => basis.right,
            MoveDirection::Up => basis.up,
            MoveDirection::Down => -basis.up,
        }
    }
}

impl Orientation for FreeFlight {}

fn roll_frame(state: &mut NavigationState, degrees: f32) {
    state.basis_mut().roll(degrees);
    state.update_view();
}

impl Camera<FreeFlight> {
    /// Move `distance` along the view direction (negative flies backward).
    pub fn fly(&mut self, distance: f32) {
        self.move_along(MoveDirection::Forward, distance);
    }

    /// Incremental roll around the view direction, in degrees.
    pub fn roll(&mut self, degrees: f32) {
        roll_frame(self.state_mut(), degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraCommand;

    fn camera() -> FlightCamera {
        FlightCamera::builder()
            .with_position(Vec3::new(0.0, 0.0, 10.0))
            .build()
    }

    #[test]
    fn fly_moves_along_direction() {
        let mut camera = camera();
        camera.fly(4.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-6));
        camera.fly(-1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 7.0), 1e-6));
    }

    #[test]
    fn fly_after_yaw_follows_new_direction() {
        let mut camera = camera();
        camera.pitch_and_yaw(0.0, 30.0);
        let direction = camera.direction();
        camera.fly(2.0);
        let expected = Vec3::new(0.0, 0.0, 10.0) + 2.0 * direction;
        assert!(camera.position().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn pitch_tilts_toward_up() {
        let mut camera = camera();
        camera.pitch_and_yaw(20.0, 0.0);
        let d = camera.direction();
        assert!(d.y > 0.0);
        assert!((d.angle_between(Vec3::NEG_Z).to_degrees() - 20.0).abs() < 1e-3);
        assert!(camera.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn flight_can_pitch_past_the_pole() {
        let mut camera = camera();
        for _ in 0..20 {
            camera.pitch_and_yaw(10.0, 0.0);
        }
        // 200 degrees of pitch: upside down and facing the other way.
        assert!(camera.up().y < 0.0);
        assert!(camera.basis().is_orthonormal());
    }

    #[test]
    fn roll_keeps_direction() {
        let mut camera = camera();
        camera.roll(15.0);
        assert!(camera.direction().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(camera.up().x > 0.0);
        assert!(camera.basis().is_orthonormal());
    }

    #[test]
    fn view_is_refreshed_after_rotation() {
        let mut camera = camera();
        camera.pitch_and_yaw(5.0, -12.0);
        camera.roll(3.0);
        let b = *camera.basis();
        let p = camera.position();
        let expected = glam::Mat4::look_at_rh(p, p + b.direction, b.up);
        assert!(camera.view_transform().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn frame_stays_orthonormal_under_irregular_input() {
        let mut camera = camera();
        let mut seed = 0x9e37_79b9_u32;
        let mut next_angle = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32 * 6.0 - 3.0
        };
        for step in 0..200_000 {
            let pitch = next_angle();
            let yaw = next_angle();
            camera.pitch_and_yaw(pitch, yaw);
            assert!(
                camera.basis().is_orthonormal(),
                "step {step}: error {}",
                camera.basis().orthonormal_error()
            );
        }
    }

    #[test]
    fn roll_matches_roll_command() {
        let mut direct = camera();
        let mut commanded = camera();
        direct.roll(7.5);
        assert!(commanded.apply(CameraCommand::Roll { degrees: 7.5 }));
        assert_eq!(direct, commanded);
    }

    #[test]
    fn move_axes_follow_frame() {
        let mut camera = camera();
        camera.move_along(MoveDirection::Right, 1.0);
        camera.move_along(MoveDirection::Up, 2.0);
        camera.move_along(MoveDirection::Backward, 3.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(1.0, 2.0, 13.0), 1e-6));
    }
}
