use glam::Vec3;

use super::basis::Basis;
use super::horizon::HorizonLocked;
use super::navigable::Camera;
use super::navigation::NavigationState;
use super::orientation::Orientation;
use crate::error::CameraError;

/// Default near clipping plane distance.
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
/// Default far clipping plane distance.
pub const DEFAULT_FAR_PLANE: f32 = 100.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 1.0;
/// Default rotation speed in degrees per second.
pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;

/// Accumulated builder configuration, consumed by the init pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub(crate) position: Vec3,
    pub(crate) direction: Vec3,
    pub(crate) up: Vec3,
    pub(crate) speed: f32,
    pub(crate) rotation_speed: f32,
    pub(crate) field_of_view: Option<f32>,
    pub(crate) max_field_of_view: Option<f32>,
    pub(crate) world_half_height: Option<f32>,
    pub(crate) near_plane: f32,
    pub(crate) far_plane: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
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

impl NavigationConfig {
    /// Reject configurations `init` would only log about.
    ///
    /// Lens values are read the way the init pass reads them: non-positive
    /// values count as unset.
    pub(crate) fn validate(&self) -> Result<(), CameraError> {
        if !Basis::spans(self.direction, self.up) {
            return Err(CameraError::DegenerateBasis {
                direction: self.direction,
                up: self.up,
            });
        }
        let field_of_view = self.field_of_view.filter(|v| *v > 0.0);
        let world_half_height = self.world_half_height.filter(|v| *v > 0.0);
        if let (Some(field_of_view), Some(world_half_height)) =
            (field_of_view, world_half_height)
        {
            return Err(CameraError::AmbiguousProjection {
                field_of_view,
                world_half_height,
            });
        }
        let perspective = world_half_height.is_none();
        if !(self.near_plane < self.far_plane)
            || (perspective && self.near_plane <= 0.0)
        {
            return Err(CameraError::InvalidClipPlanes {
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        Ok(())
    }
}

/// Deferred builder for [`Camera`].
///
/// Configuration calls accumulate settings; [`build`](Self::build) runs the
/// single initialization pass that derives the orthonormal frame, resolves
/// the lens and computes the initial view. The builder is consumed, so it
/// cannot be built twice.
///
/// ```
/// # use glam::Vec3;
/// # use navcam::camera::HorizonCamera;
/// let camera = HorizonCamera::builder()
///     .with_position(Vec3::new(0.0, 0.0, 50.0))
///     .with_direction(Vec3::NEG_Z)
///     .with_world_up_direction(Vec3::Y)
///     .with_speed(2.0)
///     .with_field_of_view(45.0)
///     .build();
/// assert!(camera.right().abs_diff_eq(Vec3::X, 1e-6));
/// ```
#[derive(Debug, Clone)]
pub struct CameraBuilder<O: Orientation> {
    config: NavigationConfig,
    settings: O::Settings,
}

impl<O: Orientation> Default for CameraBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Orientation> CameraBuilder<O> {
    /// Start from the defaults: origin, looking down -Z with y up,
    /// perspective at 45°.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: NavigationConfig::default(),
            settings: O::Settings::default(),
        }
    }

    /// Camera position in world space.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.config.position = position;
        self
    }

    /// View direction (normalized at build).
    #[must_use]
    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.config.direction = direction;
        self
    }

    /// Up direction (normalized and made perpendicular to the view
    /// direction at build).
    #[must_use]
    pub fn with_up_direction(mut self, up: Vec3) -> Self {
        self.config.up = up;
        self
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.config.speed = speed;
        self
    }

    /// Rotation speed in degrees per second.
    #[must_use]
    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.config.rotation_speed = rotation_speed;
        self
    }

    /// Vertical field of view in degrees (perspective lens).
    #[must_use]
    pub fn with_field_of_view(mut self, field_of_view: f32) -> Self {
        self.config.field_of_view = Some(field_of_view);
        self
    }

    /// Widest field of view zoom may reach, in degrees.
    #[must_use]
    pub fn with_max_field_of_view(mut self, max_field_of_view: f32) -> Self {
        self.config.max_field_of_view = Some(max_field_of_view);
        self
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn with_near_plane(mut self, near_plane: f32) -> Self {
        self.config.near_plane = near_plane;
        self
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn with_far_plane(mut self, far_plane: f32) -> Self {
        self.config.far_plane = far_plane;
        self
    }

    /// Run the initialization pass. Inconsistent settings are logged and
    /// resolved (see [`try_build`](Self::try_build) for the strict variant).
    #[must_use]
    pub fn build(self) -> Camera<O> {
        log::debug!("building camera from {:?}", self.config);
        let mut state = NavigationState::init(&self.config);
        let orientation = O::init(&mut state, &self.config, self.settings);
        Camera::from_parts(state, orientation)
    }

    /// Like [`build`](Self::build), but reject a degenerate frame, an
    /// ambiguous lens or invalid clip planes instead of resolving them.
    pub fn try_build(self) -> Result<Camera<O>, CameraError> {
        self.config.validate()?;
        O::validate(&self.config, &self.settings)?;
        Ok(self.build())
    }
}

impl CameraBuilder<HorizonLocked> {
    /// Fixed world-up reference. Defaults to the up direction.
    #[must_use]
    pub fn with_world_up_direction(mut self, world_up: Vec3) -> Self {
        self.settings.world_up = Some(world_up);
        self
    }

    /// Orthographic half-height in world units (orthographic lens).
    #[must_use]
    pub fn with_world_half_height(mut self, world_half_height: f32) -> Self {
        self.config.world_half_height = Some(world_half_height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FlightCamera, HorizonCamera};

    #[test]
    fn builder_chain_keeps_concrete_type() {
        let camera = HorizonCamera::builder()
            .with_speed(2.0)
            .with_world_up_direction(Vec3::Y)
            .with_rotation_speed(7.0)
            .with_world_half_height(3.0)
            .with_near_plane(0.5)
            .build();
        assert_eq!(camera.state().speed(), 2.0);
        assert_eq!(camera.state().rotation_speed(), 7.0);
        assert_eq!(camera.state().world_half_height(), Some(3.0));
    }

    #[test]
    fn build_resolves_ambiguous_lens() {
        let camera = HorizonCamera::builder()
            .with_field_of_view(50.0)
            .with_max_field_of_view(70.0)
            .with_world_half_height(3.0)
            .build();
        assert_eq!(camera.state().field_of_view(), Some(50.0));
        assert_eq!(camera.state().max_field_of_view(), Some(70.0));
        assert_eq!(camera.state().world_half_height(), None);
    }

    #[test]
    fn try_build_rejects_ambiguous_lens() {
        let err = HorizonCamera::builder()
            .with_field_of_view(50.0)
            .with_world_half_height(3.0)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, CameraError::AmbiguousProjection { .. }));
    }

    #[test]
    fn try_build_rejects_parallel_up() {
        let err = FlightCamera::builder()
            .with_direction(Vec3::Y)
            .with_up_direction(Vec3::Y)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, CameraError::DegenerateBasis { .. }));
    }

    #[test]
    fn try_build_rejects_inverted_clip_planes() {
        let err = FlightCamera::builder()
            .with_near_plane(10.0)
            .with_far_plane(1.0)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, CameraError::InvalidClipPlanes { .. }));
    }

    #[test]
    fn try_build_checks_near_plane_of_resolved_lens() {
        // A non-positive half-height falls back to perspective.
        let err = HorizonCamera::builder()
            .with_world_half_height(-2.0)
            .with_near_plane(-1.0)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, CameraError::InvalidClipPlanes { .. }));

        let camera = HorizonCamera::builder()
            .with_world_half_height(2.0)
            .with_near_plane(-1.0)
            .try_build()
            .unwrap();
        assert_eq!(camera.state().world_half_height(), Some(2.0));
    }

    #[test]
    fn try_build_agrees_with_build_on_unset_field_of_view() {
        let builder = HorizonCamera::builder()
            .with_field_of_view(0.0)
            .with_world_half_height(3.0);
        let lenient = builder.clone().build();
        let strict = builder.try_build().unwrap();
        assert_eq!(strict.state().world_half_height(), Some(3.0));
        assert_eq!(strict.state().field_of_view(), None);
        assert_eq!(lenient, strict);
    }

    #[test]
    fn try_build_accepts_valid_configuration() {
        let camera = FlightCamera::builder()
            .with_position(Vec3::new(0.0, 1.0, 5.0))
            .with_direction(Vec3::new(0.0, -1.0, -5.0))
            .with_field_of_view(60.0)
            .with_far_plane(500.0)
            .try_build()
            .unwrap();
        assert!(camera.basis().is_orthonormal());
        assert_eq!(camera.state().far_plane(), 500.0);
    }
}
