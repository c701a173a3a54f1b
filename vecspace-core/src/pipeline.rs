/// Vertex to pixel projection
use crate::config::ViewerConfig;
use crate::geometry::Mesh;
use crate::math::{self, Mat4, Vec2, Vec3};
use crate::projection::ViewProjection;
use crate::transform::FrameTransform;

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Map device coordinates to pixels, flipping y for a top-left origin
    pub fn to_pixels(&self, device_x: f32, device_y: f32) -> Vec2 {
        Vec2::new(
            device_x * self.width + self.width / 2.0,
            -device_y * self.height + self.height / 2.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Whether projected points are divided by their homogeneous w
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivideMode {
    /// Use x and y straight from the view-projection, as the viewer always has
    #[default]
    Omit,
    /// Divide x and y by w; points with w near zero are dropped
    Divide,
}

/// Project `point` through `view_projection` and map it to pixels.
///
/// The x and y of the transformed point are used as device coordinates
/// without a perspective divide.
pub fn project(point: &Vec3, view_projection: &Mat4, viewport: &Viewport) -> Vec2 {
    let device = math::apply_to_point3(view_projection, point);
    viewport.to_pixels(device.x, device.y)
}

/// Static view-projection plus the surface it projects onto
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    view_projection: ViewProjection,
    viewport: Viewport,
    divide_mode: DivideMode,
}

impl Projector {
    pub fn new(
        view_projection: ViewProjection,
        viewport: Viewport,
        divide_mode: DivideMode,
    ) -> Self {
        Self {
            view_projection,
            viewport,
            divide_mode,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            ViewProjection::new(config),
            config.viewport,
            config.divide_mode,
        )
    }

    pub fn view_projection(&self) -> &ViewProjection {
        &self.view_projection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Apply the frame transform, then the view-projection, then map to pixels
    pub fn project_vertex(&self, vertex: &Vec3, frame: &FrameTransform) -> Option<Vec2> {
        let moved = math::apply_to_point3(frame.matrix(), vertex);
        let combined = &self.view_projection.combined;

        match self.divide_mode {
            DivideMode::Omit => Some(project(&moved, combined, &self.viewport)),
            DivideMode::Divide => {
                let clip = math::apply_to_point4(combined, &moved);
                if clip.w.abs() < 1e-6 {
                    return None;
                }
                Some(self.viewport.to_pixels(clip.x / clip.w, clip.y / clip.w))
            }
        }
    }

    /// Line segments for `mesh`, each vertex joined to its predecessor.
    ///
    /// A vertex that cannot be projected breaks the strip: neither of its
    /// neighbouring segments is produced.
    pub fn project_strip(&self, mesh: &Mesh, frame: &FrameTransform) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::with_capacity(mesh.vertices.len().saturating_sub(1));
        let mut last: Option<Vec2> = None;

        for vertex in &mesh.vertices {
            let point = self.project_vertex(vertex, frame);
            if let (Some(from), Some(to)) = (last, point) {
                segments.push((from, to));
            }
            last = point;
        }

        segments
    }
}
