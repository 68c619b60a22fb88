use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::navigable::Camera;
use super::navigation::{Lens, NavigationState};
use super::orientation::Orientation;

/// Serializable read-only view of a camera, for inspectors and debug dumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler rotation in degrees, decomposed from the view transform.
    pub rotation_euler: Vec3,
    /// Unit view direction.
    pub direction: Vec3,
    /// Unit up vector.
    pub up: Vec3,
    /// Unit right vector.
    pub right: Vec3,
    /// Active lens.
    pub lens: Lens,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
}

impl CameraSnapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &NavigationState) -> Self {
        let basis = state.basis();
        Self {
            position: state.position(),
            rotation_euler: state.transform().rotation_euler(),
            direction: basis.direction,
            up: basis.up,
            right: basis.right,
            lens: state.lens(),
            near_plane: state.near_plane(),
            far_plane: state.far_plane(),
        }
    }
}

impl<O: Orientation> From<&Camera<O>> for CameraSnapshot {
    fn from(camera: &Camera<O>) -> Self {
        Self::capture(camera.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FlightCamera, HorizonCamera};

    #[test]
    fn snapshot_reports_yaw() {
        let mut camera = FlightCamera::builder().build();
        camera.pitch_and_yaw(0.0, 30.0);
        let snapshot = CameraSnapshot::from(&camera);
        // Turning right is a negative rotation about +Y.
        assert!((snapshot.rotation_euler.y + 30.0).abs() < 1e-3);
        assert!(snapshot.rotation_euler.x.abs() < 1e-3);
        assert_eq!(snapshot.direction, camera.direction());
    }

    #[test]
    fn snapshot_serializes_lens_kind() {
        let camera = HorizonCamera::builder()
            .with_position(Vec3::new(0.0, 1.5, 4.0))
            .with_world_half_height(2.0)
            .build();
        let snapshot = CameraSnapshot::from(&camera);
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["lens"]["kind"], "orthographic");
        assert_eq!(json["lens"]["world_half_height"], 2.0);
        assert_eq!(json["position"], serde_json::json!([0.0, 1.5, 4.0]));

        let back: CameraSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
