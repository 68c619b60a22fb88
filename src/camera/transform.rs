use glam::{EulerRot, Mat4, Quat, UVec2, Vec2, Vec3};

use super::projection::Projection;
use super::ray::Ray;

/// Region of the window used for rendering, as fractions of the window
/// size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Lower-left corner, `(0, 0)` is the window's lower-left corner.
    pub offset: Vec2,
    /// Extent, `(1, 1)` is the whole window.
    pub size: Vec2,
}

impl Viewport {
    /// The whole window.
    pub const FULL: Self = Self {
        offset: Vec2::ZERO,
        size: Vec2::ONE,
    };

    /// Pixel size of this viewport inside a window of `window` pixels.
    #[must_use]
    pub fn scaled(&self, window: UVec2) -> Vec2 {
        window.as_vec2() * self.size
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FULL
    }
}

/// View transform plus projection configuration.
///
/// The default transform sits at the origin looking down the negative
/// z-axis and views the volume between -1 and 1 orthographically. The
/// coordinate system is right-handed with y up.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    view: Mat4,
    projection: Projection,
    viewport: Viewport,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity view with the default orthographic projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Projection::default(),
            viewport: Viewport::FULL,
        }
    }

    /// Place the camera at `eye` looking at `at`, with `up` resolving the
    /// roll around the view axis.
    ///
    /// `eye` must differ from `at`. A coincident pair is logged and the
    /// resulting (non-finite) matrix is stored anyway.
    pub fn look_at(&mut self, eye: Vec3, at: Vec3, up: Vec3) {
        if eye.distance(at) < f32::EPSILON {
            log::warn!(
                "look_at: eye {eye} must be different from at {at}; view \
                 transform will not be finite"
            );
        }
        self.view = Mat4::look_at_rh(eye, at, up);
    }

    /// Replace the view transform.
    pub fn set_view_transform(&mut self, view: Mat4) {
        self.view = view;
    }

    /// World-to-eye transform.
    #[must_use]
    pub fn view_transform(&self) -> Mat4 {
        self.view
    }

    /// Set the view from a world-space position and XYZ Euler rotation in
    /// degrees (relative to looking down the negative z-axis).
    pub fn set_position_and_rotation(
        &mut self,
        position: Vec3,
        rotation_euler_degrees: Vec3,
    ) {
        let r = rotation_euler_degrees;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        self.view =
            Mat4::from_rotation_translation(rotation, position).inverse();
    }

    /// Camera position in world space, decomposed from the view transform.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (_, _, translation) =
            self.view.inverse().to_scale_rotation_translation();
        translation
    }

    /// Camera rotation as XYZ Euler angles in degrees, decomposed from the
    /// view transform.
    ///
    /// The angles are those of the camera-to-world rotation, the same ones
    /// [`set_position_and_rotation`](Self::set_position_and_rotation)
    /// accepts, so the pair round-trips. They are not negated: an inspector
    /// that expects the inverse (world-to-camera) angles must flip the signs.
    #[must_use]
    pub fn rotation_euler(&self) -> Vec3 {
        let (_, rotation, _) =
            self.view.inverse().to_scale_rotation_translation();
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    /// Perspective projection with a vertical field of view in degrees.
    pub fn set_perspective_projection(
        &mut self,
        fov_y_degrees: f32,
        near: f32,
        far: f32,
    ) {
        self.projection = Projection::Perspective {
            fov_y_degrees,
            near,
            far,
        };
    }

    /// Orthographic projection; `half_height` is half the height of the view
    /// volume, the width follows the viewport aspect ratio.
    pub fn set_orthographic_projection(
        &mut self,
        half_height: f32,
        near: f32,
        far: f32,
    ) {
        self.projection = Projection::Orthographic {
            half_height,
            near,
            far,
        };
    }

    /// Orthographic projection in pixel units with the origin in the
    /// lower-left corner and depth between -1 and 1.
    pub fn set_window_coordinates(&mut self) {
        self.projection = Projection::OrthographicWindow;
    }

    /// Custom projection matrix, returned unmodified by
    /// [`projection_transform`](Self::projection_transform).
    pub fn set_projection_transform(&mut self, projection: Mat4) {
        self.projection = Projection::Custom(projection);
    }

    /// Active projection configuration.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Projection transform for a viewport of `viewport_size` pixels.
    #[must_use]
    pub fn projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.projection.matrix(viewport_size.as_vec2())
    }

    /// Projection transform with the far plane at infinity for perspective
    /// projections (skybox rendering).
    #[must_use]
    pub fn infinite_projection_transform(&self, viewport_size: UVec2) -> Mat4 {
        self.projection.infinite_matrix(viewport_size.as_vec2())
    }

    /// Define which part of the window is used for rendering, as fractions
    /// of the window size.
    pub fn set_viewport(&mut self, offset: Vec2, size: Vec2) {
        self.viewport = Viewport { offset, size };
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Ray from the near plane through the pixel `position`.
    ///
    /// Screen space is in pixels with `(0, 0)` at the bottom-left of the
    /// window and `window_size` at the top-right; invert the y-axis of
    /// window-system coordinates before calling. The ray origin lies on the
    /// near plane and the direction is unit length.
    #[must_use]
    pub fn screen_point_to_ray(&self, position: Vec2, window_size: UVec2) -> Ray {
        let scaled = self.viewport.scaled(window_size);
        let ndc = (position / scaled - self.viewport.offset / self.viewport.size)
            * 2.0
            - Vec2::ONE;

        let inverse = (self.projection.matrix(scaled) * self.view).inverse();
        let near = inverse.project_point3(ndc.extend(-1.0));
        let far = inverse.project_point3(ndc.extend(1.0));

        Ray {
            origin: near,
            direction: (far - near).normalize(),
        }
    }
}
