//! Orthonormal camera frame and the incremental rotation primitive shared by
//! every orientation strategy.

use glam::Vec3;

/// Tolerance used when checking that a [`Basis`] is orthonormal.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-4;

/// Right-handed orthonormal camera frame.
///
/// `right = direction × up` and `up = right × direction`; all three are unit
/// length. The camera looks along `direction`. Each rotation re-derives the
/// dependent axis from the other two and renormalizes it, so rounding error
/// does not build up over long rotation sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit vector pointing from the camera toward its target.
    pub direction: Vec3,
    /// Unit vector perpendicular to `direction`, "up" on screen.
    pub up: Vec3,
    /// Unit vector perpendicular to `direction` and `up`, "right" on screen.
    pub right: Vec3,
}

impl Default for Basis {
    /// Looking down the negative z-axis with y up.
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
        }
    }
}

impl Basis {
    /// Derive a frame from a (not necessarily unit) direction and up.
    ///
    /// `right = normalize(direction × up)`, then `up` is re-derived as
    /// `right × direction` so it is perpendicular to `direction` even when
    /// the supplied up was not. Parallel inputs produce non-finite vectors.
    #[must_use]
    pub fn from_direction_up(direction: Vec3, up: Vec3) -> Self {
        let direction = direction.normalize();
        let right = direction.cross(up.normalize()).normalize();
        Self {
            direction,
            up: right.cross(direction),
            right,
        }
    }

    /// Whether `direction` and `up` span a plane, i.e. a frame can be built
    /// from them.
    #[must_use]
    pub fn spans(direction: Vec3, up: Vec3) -> bool {
        direction.is_finite()
            && up.is_finite()
            && direction.cross(up).length_squared()
                > f32::EPSILON * direction.length_squared() * up.length_squared()
    }

    /// Largest deviation from orthonormality: the worst of `| |v| - 1 |`
    /// over the three axes and `|a · b|` over the three pairs.
    #[must_use]
    pub fn orthonormal_error(&self) -> f32 {
        let Self {
            direction,
            up,
            right,
        } = *self;
        [
            (direction.length() - 1.0).abs(),
            (up.length() - 1.0).abs(),
            (right.length() - 1.0).abs(),
            direction.dot(up).abs(),
            direction.dot(right).abs(),
            up.dot(right).abs(),
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }

    /// Whether the frame is orthonormal within [`ORTHONORMAL_TOLERANCE`].
    #[must_use]
    pub fn is_orthonormal(&self) -> bool {
        self.orthonormal_error() <= ORTHONORMAL_TOLERANCE
    }

    /// Tilt `direction` toward `up` by `degrees`; `up` follows.
    pub(crate) fn pitch(&mut self, degrees: f32) {
        self.direction = tilt(self.direction, self.up, degrees);
        self.up = self.right.cross(self.direction).normalize();
    }

    /// Tilt `direction` toward `right` by `degrees`; `right` follows.
    pub(crate) fn yaw(&mut self, degrees: f32) {
        self.direction = tilt(self.direction, self.right, degrees);
        self.right = self.direction.cross(self.up).normalize();
    }

    /// Tilt `up` toward `right` by `degrees`; `right` follows and
    /// `direction` is unchanged.
    pub(crate) fn roll(&mut self, degrees: f32) {
        self.up = tilt(self.up, self.right, degrees);
        self.right = self.direction.cross(self.up).normalize();
    }
}

/// Small-angle rotation of `v` toward the perpendicular unit vector
/// `toward`: `normalize(v + tan(degrees) * toward)`.
///
/// Exact for the angle between input and output, but the blend is not a
/// rotation by `degrees` about a fixed axis once other axes are updated from
/// the result. Tuned for per-frame increments of a few degrees.
#[inline]
#[must_use]
pub fn tilt(v: Vec3, toward: Vec3, degrees: f32) -> Vec3 {
    (v + degrees.to_radians().tan() * toward).normalize()
}

/// Component of `v` in the plane perpendicular to the unit vector `normal`.
#[inline]
#[must_use]
pub fn reject(v: Vec3, normal: Vec3) -> Vec3 {
    v - v.dot(normal) * normal
}
