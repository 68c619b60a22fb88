use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{
    CameraBuilder, FreeFlight, HorizonLocked, Orientation, DEFAULT_FAR_PLANE,
    DEFAULT_NEAR_PLANE, DEFAULT_ROTATION_SPEED, DEFAULT_SPEED,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement, lens and speeds.
pub struct CameraOptions {
    /// Initial position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial view direction.
    #[schemars(skip)]
    pub direction: [f32; 3],
    /// Initial up direction.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Fixed world-up for horizon-locked cameras (defaults to `up`).
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_up: Option<[f32; 3]>,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Rotation speed in degrees per second.
    #[schemars(title = "Rotate Speed", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub rotation_speed: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 90.0), extend("step" = 1.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_view: Option<f32>,
    /// Widest field of view zoom may reach, in degrees.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_field_of_view: Option<f32>,
    /// Orthographic half-height (horizon-locked cameras only).
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_half_height: Option<f32>,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_plane: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far_plane: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            direction: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            world_up: None,
            speed: DEFAULT_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            field_of_view: None,
            max_field_of_view: None,
            world_half_height: None,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
        }
    }
}

impl CameraOptions {
    /// Seed a free-flight camera builder.
    #[must_use]
    pub fn flight_builder(&self) -> CameraBuilder<FreeFlight> {
        if self.world_up.is_some() || self.world_half_height.is_some() {
            log::debug!(
                "world_up and world_half_height are ignored by flight cameras"
            );
        }
        self.seed(CameraBuilder::new())
    }

    /// Seed a horizon-locked camera builder.
    #[must_use]
    pub fn horizon_builder(&self) -> CameraBuilder<HorizonLocked> {
        let mut builder = self.seed(CameraBuilder::new());
        if let Some(world_up) = self.world_up {
            builder = builder.with_world_up_direction(Vec3::from(world_up));
        }
        if let Some(world_half_height) = self.world_half_height {
            builder = builder.with_world_half_height(world_half_height);
        }
        builder
    }

    fn seed<O: Orientation>(&self, builder: CameraBuilder<O>) -> CameraBuilder<O> {
        let mut builder = builder
            .with_position(Vec3::from(self.position))
            .with_direction(Vec3::from(self.direction))
            .with_up_direction(Vec3::from(self.up))
            .with_speed(self.speed)
            .with_rotation_speed(self.rotation_speed)
            .with_near_plane(self.near_plane)
            .with_far_plane(self.far_plane);
        if let Some(field_of_view) = self.field_of_view {
            builder = builder.with_field_of_view(field_of_view);
        }
        if let Some(max_field_of_view) = self.max_field_of_view {
            builder = builder.with_max_field_of_view(max_field_of_view);
        }
        builder
    }
}
