/// Per-frame model transform driven by pointer and keyboard input
use crate::math::{Mat4, Vec3};

/// Mutable transform applied to every vertex before projection.
///
/// Only the translation column is ever written; the linear part stays
/// identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    matrix: Mat4,
    origin: (f32, f32),
    pointer_scale: f32,
}

impl FrameTransform {
    /// `origin` is the pointer position that maps to zero translation, and
    /// `pointer_scale` the number of pixels per unit of translation.
    pub fn new(origin: (f32, f32), pointer_scale: f32) -> Self {
        Self {
            matrix: Mat4::identity(),
            origin,
            pointer_scale,
        }
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Set the x/y translation from an absolute pointer position in pixels
    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.matrix[(0, 3)] = (x as f32 - self.origin.0) / self.pointer_scale;
        self.matrix[(1, 3)] = (y as f32 - self.origin.1) / self.pointer_scale;
    }

    /// Move along z by `delta`
    pub fn nudge_depth(&mut self, delta: f32) {
        self.matrix[(2, 3)] += delta;
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::new((400.0, 300.0), 100.0)
    }
}
