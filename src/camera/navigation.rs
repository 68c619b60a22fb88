use glam::{Mat4, UVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::basis::Basis;
use super::builder::NavigationConfig;
use super::ray::Ray;
use super::transform::Transform;

/// Field of view used when neither a field of view nor an orthographic
/// half-height is configured.
pub const DEFAULT_FIELD_OF_VIEW: f32 = 45.0;
/// Upper zoom limit when none is configured ("warping" appears above 45°).
pub const DEFAULT_MAX_FIELD_OF_VIEW: f32 = 45.0;
/// Lower zoom limit for perspective cameras.
pub const MIN_FIELD_OF_VIEW: f32 = 1.0;

/// Lens of a navigable camera. Perspective and orthographic settings are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lens {
    /// Perspective lens; zoom narrows the field of view.
    Perspective {
        /// Vertical field of view in degrees.
        field_of_view: f32,
        /// Widest field of view zoom may reach, in degrees.
        max_field_of_view: f32,
    },
    /// Parallel projection; zoom scales the visible half-height.
    Orthographic {
        /// Half the height of the view volume in world units.
        world_half_height: f32,
    },
}

impl Default for Lens {
    fn default() -> Self {
        Self::Perspective {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            max_field_of_view: DEFAULT_MAX_FIELD_OF_VIEW,
        }
    }
}

impl Lens {
    /// Resolve builder settings into a single lens.
    ///
    /// Non-positive values count as unset. When both a field of view and a
    /// half-height are set, perspective wins and the half-height is
    /// discarded with an error log.
    pub(crate) fn resolve(
        field_of_view: Option<f32>,
        max_field_of_view: Option<f32>,
        world_half_height: Option<f32>,
    ) -> Self {
        let field_of_view = field_of_view.filter(|v| *v > 0.0);
        let world_half_height = world_half_height.filter(|v| *v > 0.0);

        match (field_of_view, world_half_height) {
            (Some(fov), Some(half_height)) => {
                log::error!(
                    "camera configured with both field of view {fov} and \
                     world half-height {half_height}; using perspective"
                );
                Self::perspective(fov, max_field_of_view)
            }
            (Some(fov), None) => Self::perspective(fov, max_field_of_view),
            (None, Some(world_half_height)) => {
                Self::Orthographic { world_half_height }
            }
            (None, None) => {
                Self::perspective(DEFAULT_FIELD_OF_VIEW, max_field_of_view)
            }
        }
    }

    fn perspective(field_of_view: f32, max_field_of_view: Option<f32>) -> Self {
        let requested = max_field_of_view.unwrap_or(DEFAULT_MAX_FIELD_OF_VIEW);
        let max_field_of_view = if requested < field_of_view {
            log::warn!(
                "max field of view {requested} below field of view \
                 {field_of_view}; raising it"
            );
            field_of_view
        } else {
            requested
        };
        Self::Perspective {
            field_of_view,
            max_field_of_view: max_field_of_view.max(MIN_FIELD_OF_VIEW),
        }
    }
}

/// World-space position, orientation frame and lens of a navigable camera,
/// together with the [`Transform`] they drive.
///
/// The view transform is recomputed whenever the position or the frame
/// changes; the projection is re-applied on zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    position: Vec3,
    basis: Basis,
    near_plane: f32,
    far_plane: f32,
    lens: Lens,
    speed: f32,
    rotation_speed: f32,
    transform: Transform,
}

impl NavigationState {
    /// Single initialization pass: derive the frame, resolve the lens,
    /// apply the projection and compute the initial view.
    pub(crate) fn init(config: &NavigationConfig) -> Self {
        let mut state = Self {
            position: config.position,
            basis: Basis::from_direction_up(config.direction, config.up),
            near_plane: config.near_plane,
            far_plane: config.far_plane,
            lens: Lens::resolve(
                config.field_of_view,
                config.max_field_of_view,
                config.world_half_height,
            ),
            speed: config.speed,
            rotation_speed: config.rotation_speed,
            transform: Transform::new(),
        };
        state.apply_projection();
        state.update_view();
        state
    }

    pub(crate) fn basis_mut(&mut self) -> &mut Basis {
        &mut self.basis
    }

    /// Recompute the view transform from position and frame.
    pub(crate) fn update_view(&mut self) {
        let Basis { direction, up, .. } = self.basis;
        self.transform
            .look_at(self.position, self.position + direction, up);
    }

    fn apply_projection(&mut self) {
        match self.lens {
            Lens::Perspective { field_of_view, .. } => {
                self.transform.set_perspective_projection(
                    field_of_view,
                    self.near_plane,
                    self.far_plane,
                );
            }
            Lens::Orthographic { world_half_height } => {
                self.transform.set_orthographic_projection(
                    world_half_height,
                    self.near_plane,
                    self.far_plane,
                );
            }
        }
    }

    /// Move the camera by `delta` in world space. The frame is unchanged.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.update_view();
    }

    /// Zoom in (positive) or out (negative).
    ///
    /// Perspective: the field of view shrinks by `increment` degrees,
    /// clamped to `[MIN_FIELD_OF_VIEW, max_field_of_view]`.
    /// Orthographic: the half-height is scaled by `1 + increment`.
    pub fn zoom(&mut self, increment: f32) {
        match &mut self.lens {
            Lens::Perspective {
                field_of_view,
                max_field_of_view,
            } => {
                *field_of_view = (*field_of_view - increment)
                    .max(MIN_FIELD_OF_VIEW)
                    .min(*max_field_of_view);
            }
            Lens::Orthographic { world_half_height } => {
                *world_half_height *= 1.0 + increment;
            }
        }
        self.apply_projection();
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orthonormal camera frame.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.basis.direction
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Active lens.
    #[must_use]
    pub fn lens(&self) -> Lens {
        self.lens
    }

    /// Vertical field of view in degrees, if the lens is perspective.
    #[must_use]
    pub fn field_of_view(&self) -> Option<f32> {
        match self.lens {
            Lens::Perspective { field_of_view, .. } => Some(field_of_view),
            Lens::Orthographic { .. } => None,
        }
    }

    /// Zoom-out limit in degrees, if the lens is perspective.
    #[must_use]
    pub fn max_field_of_view(&self) -> Option<f32> {
        match self.lens {
            Lens::Perspective {
                max_field_of_view, ..
            } => Some(max_field_of_view),
            Lens::Orthographic { .. } => None,
        }
    }

    /// Orthographic half-height, if the lens is orthographic.
    #[must_use]
    pub fn world_half_height(&self) -> Option<f32> {
        match self.lens {
            Lens::Orthographic { world_half_height } => Some(world_half_height),
            Lens::Perspective { .. } => None,
        }
    }

    /// Set the field of view (switching to a perspective lens). Takes effect
    /// at the next zoom.
    pub fn set_field_of_view(&mut self, field_of_view: f32) {
        self.lens = match self.lens {
            Lens::Perspective {
                max_field_of_view, ..
            } => Lens::Perspective {
                field_of_view,
                max_field_of_view,
            },
            Lens::Orthographic { .. } => Lens::Perspective {
                field_of_view,
                max_field_of_view: DEFAULT_MAX_FIELD_OF_VIEW
                    .max(field_of_view),
            },
        };
    }

    /// Set the zoom-out limit. Ignored for orthographic lenses.
    pub fn set_max_field_of_view(&mut self, max: f32) {
        if let Lens::Perspective {
            max_field_of_view, ..
        } = &mut self.lens
        {
            *max_field_of_view = max.max(MIN_FIELD_OF_VIEW);
        } else {
            log::debug!("max field of view ignored by orthographic lens");
        }
    }

    /// Set the orthographic half-height (switching to an orthographic
    /// lens). Takes effect at the next zoom.
    pub fn set_world_half_height(&mut self, world_half_height: f32) {
        self.lens = Lens::Orthographic { world_half_height };
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Set the near clipping plane. Takes effect at the next zoom.
    pub fn set_near_plane(&mut self, near_plane: f32) {
        self.near_plane = near_plane;
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Set the far clipping plane. Takes effect at the next zoom.
    pub fn set_far_plane(&mut self, far_plane: f32) {
        self.far_plane = far_plane;
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the movement speed in world units per second.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Rotation speed in degrees per second. Advisory: rotation calls always
    /// take explicit angles.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Set the rotation speed in degrees per second.
    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.rotation_speed = rotation_speed;
    }

    /// Define which part of the window is used for rendering, as fractions
    /// of the window size.
    pub fn set_viewport(&mut self, offset: Vec2, size: Vec2) {
        self.transform.set_viewport(offset, size);
    }

    /// Underlying view/projection transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-to-eye transform.
    #[must_use]
    pub fn view_transform(&self) -> Mat4 {
        self.transform.view_transform()
    }

    /// Projection transform for a viewport of `viewport_size` pixels.
    #[must_use]
    pub fn projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.transform.projection_transform(viewport_size)
    }

    /// Projection transform with the far plane at infinity.
    #[must_use]
    pub fn infinite_projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.transform.infinite_projection_transform(viewport_size)
    }

    /// World-space ray through the pixel `position` (origin bottom-left).
    #[must_use]
    pub fn screen_point_to_ray(&self, position: Vec2, window_size: UVec2) -> Ray {
        self.transform.screen_point_to_ray(position, window_size)
    }
}
