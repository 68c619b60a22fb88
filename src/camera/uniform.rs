use glam::{Mat4, UVec2};

use super::navigation::NavigationState;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform buffer block holding the camera matrices and metadata, laid out
/// for std140 (every field group is 16-byte aligned).
pub struct CameraUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Projection transform.
    pub proj: [[f32; 4]; 4],
    /// Combined `proj * view`.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees (0 for orthographic lenses).
    pub fovy: f32,
    /// Camera view direction for lighting.
    pub forward: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity matrices looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            proj: identity,
            view_proj: identity,
            position: [0.0; 3],
            fovy: 0.0,
            forward: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Refresh from the camera state for a viewport of `viewport_size`
    /// pixels.
    pub fn update(&mut self, state: &NavigationState, viewport_size: UVec2) {
        let view = state.view_transform();
        let proj = state.projection_transform(viewport_size);
        self.view = view.to_cols_array_2d();
        self.proj = proj.to_cols_array_2d();
        self.view_proj = (proj * view).to_cols_array_2d();
        self.position = state.position().to_array();
        self.fovy = state.field_of_view().unwrap_or(0.0);
        self.forward = state.direction().to_array();
        let size = viewport_size.as_vec2();
        self.aspect = if size.y > 0.0 { size.x / size.y } else { 1.0 };
    }
}
