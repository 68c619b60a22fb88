use glam::Vec3;

/// World-space ray produced by unprojecting a screen point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Point on the near plane.
    pub origin: Vec3,
    /// Unit direction from the near plane toward the far plane.
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
