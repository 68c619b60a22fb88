use glam::Vec2;

/// Tracks the cursor and whether a rotation drag is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct DragState {
    /// Last cursor position in physical pixels.
    pub mouse_pos: Vec2,
    /// Whether the drag button is held.
    pub dragging: bool,
}

impl DragState {
    /// Start a drag from the current cursor position.
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// End the drag.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Update the cursor position and return the movement since the last
    /// position if a drag is in progress.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;
        self.dragging.then_some(delta)
    }
}
