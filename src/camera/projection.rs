use glam::{Mat4, Vec2, Vec4};

/// Depth epsilon for the infinite perspective; keeps points at infinity
/// strictly inside the clip volume.
const INFINITE_DEPTH_EPSILON: f32 = f32::EPSILON;

/// Projection configuration of a [`Transform`](super::Transform).
///
/// Exactly one variant is active at a time; parameters of the other
/// variants do not exist, so they cannot be read under the wrong tag.
/// All matrices use the right-handed OpenGL convention with clip depth in
/// `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric perspective frustum.
    Perspective {
        /// Vertical field of view in degrees.
        fov_y_degrees: f32,
        /// Near clipping plane distance.
        near: f32,
        /// Far clipping plane distance.
        far: f32,
    },
    /// Symmetric parallel viewing volume; the half-width follows the
    /// viewport aspect ratio.
    Orthographic {
        /// Half the height of the view volume in world units.
        half_height: f32,
        /// Near clipping plane distance.
        near: f32,
        /// Far clipping plane distance.
        far: f32,
    },
    /// Pixel coordinates with the origin in the lower-left corner.
    OrthographicWindow,
    /// Caller-supplied matrix, returned unmodified.
    Custom(Mat4),
}

impl Default for Projection {
    /// Views the volume between -1 and 1.
    fn default() -> Self {
        Self::Orthographic {
            half_height: 1.0,
            near: -1.0,
            far: 1.0,
        }
    }
}

impl Projection {
    /// Build the projection matrix for a viewport of `size` pixels.
    #[must_use]
    pub fn matrix(&self, size: Vec2) -> Mat4 {
        match *self {
            Self::Perspective {
                fov_y_degrees,
                near,
                far,
            } => Mat4::perspective_rh_gl(
                fov_y_degrees.to_radians(),
                size.x / size.y,
                near,
                far,
            ),
            Self::Orthographic {
                half_height,
                near,
                far,
            } => {
                let half_width = half_height * size.x / size.y;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    near,
                    far,
                )
            }
            Self::OrthographicWindow => {
                Mat4::orthographic_rh_gl(0.0, size.x, 0.0, size.y, 1.0, -1.0)
            }
            Self::Custom(m) => m,
        }
    }

    /// Like [`matrix`](Self::matrix), but a perspective projection gets its
    /// far plane pushed to infinity (sky domes, backgrounds). Other variants
    /// return the regular matrix.
    #[must_use]
    pub fn infinite_matrix(&self, size: Vec2) -> Mat4 {
        match *self {
            Self::Perspective {
                fov_y_degrees,
                near,
                ..
            } => {
                let f = 1.0 / (0.5 * fov_y_degrees.to_radians()).tan();
                let aspect = size.x / size.y;
                Mat4::from_cols(
                    Vec4::new(f / aspect, 0.0, 0.0, 0.0),
                    Vec4::new(0.0, f, 0.0, 0.0),
                    Vec4::new(0.0, 0.0, INFINITE_DEPTH_EPSILON - 1.0, -1.0),
                    Vec4::new(
                        0.0,
                        0.0,
                        (INFINITE_DEPTH_EPSILON - 2.0) * near,
                        0.0,
                    ),
                )
            }
            _ => self.matrix(size),
        }
    }

    /// Whether this is a perspective projection.
    #[must_use]
    pub const fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective { .. })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const SIZE: Vec2 = Vec2::new(800.0, 600.0);

    fn ndc(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * p.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn default_views_unit_volume() {
        let m = Projection::default().matrix(Vec2::splat(100.0));
        assert!(m.abs_diff_eq(
            Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
            1e-6
        ));
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        let p = Projection::Perspective {
            fov_y_degrees: 60.0,
            near: 0.5,
            far: 50.0,
        };
        let m = p.matrix(SIZE);
        assert!((ndc(m, Vec3::new(0.0, 0.0, -0.5)).z + 1.0).abs() < 1e-5);
        assert!((ndc(m, Vec3::new(0.0, 0.0, -50.0)).z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn orthographic_width_follows_aspect() {
        let p = Projection::Orthographic {
            half_height: 2.0,
            near: 0.1,
            far: 10.0,
        };
        let m = p.matrix(SIZE);
        // half-width = 2 * 800 / 600
        let edge = ndc(m, Vec3::new(2.0 * 800.0 / 600.0, 2.0, -1.0));
        assert!((edge.x - 1.0).abs() < 1e-5);
        assert!((edge.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn window_coordinates_map_pixels_from_lower_left() {
        let m = Projection::OrthographicWindow.matrix(SIZE);
        assert!(ndc(m, Vec3::ZERO).abs_diff_eq(Vec3::new(-1.0, -1.0, 0.0), 1e-6));
        assert!(ndc(m, Vec3::new(800.0, 600.0, 0.0))
            .abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
        assert!((ndc(m, Vec3::new(0.0, 0.0, 1.0)).z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn custom_is_returned_verbatim() {
        let custom = Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        let p = Projection::Custom(custom);
        assert_eq!(p.matrix(SIZE), custom);
        assert_eq!(p.infinite_matrix(SIZE), custom);
    }

    #[test]
    fn infinite_perspective_keeps_distant_points_inside_clip() {
        let p = Projection::Perspective {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 10.0,
        };
        let finite = p.matrix(SIZE);
        let infinite = p.infinite_matrix(SIZE);

        // Same lateral scaling as the finite projection.
        assert!((finite.x_axis.x - infinite.x_axis.x).abs() < 1e-6);
        assert!((finite.y_axis.y - infinite.y_axis.y).abs() < 1e-6);

        let far_away = ndc(infinite, Vec3::new(0.0, 0.0, -1.0e6));
        assert!(far_away.z < 1.0);
        assert!((ndc(infinite, Vec3::new(0.0, 0.0, -0.1)).z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn infinite_falls_back_for_orthographic() {
        let p = Projection::default();
        assert_eq!(p.infinite_matrix(SIZE), p.matrix(SIZE));
    }
}
