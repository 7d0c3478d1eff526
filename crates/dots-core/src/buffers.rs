use glam::Vec3;

// 3 floats per point in each array
#[derive(Clone, Debug)]
pub struct RenderBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
    dirty: bool,
}

impl RenderBuffers {
    pub(crate) fn zeroed(count: usize) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            colors: vec![0.0; count * 3],
            dirty: true,
        }
    }

    #[inline]
    pub(crate) fn write(&mut self, index: usize, position: Vec3, color: [f32; 3]) {
        let base = index * 3;
        self.positions[base..base + 3].copy_from_slice(&position.to_array());
        self.colors[base..base + 3].copy_from_slice(&color);
    }

    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    pub fn color(&self, index: usize) -> [f32; 3] {
        let base = index * 3;
        [self.colors[base], self.colors[base + 1], self.colors[base + 2]]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether an upload is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
