/// Viewer configuration
use crate::pipeline::{DivideMode, Viewport};
use crate::projection::{Camera, Perspective, ViewMode};
use crate::transform::FrameTransform;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub viewport: Viewport,
    pub perspective: Perspective,
    pub view_mode: ViewMode,
    pub camera: Camera,
    pub divide_mode: DivideMode,
    /// Depth change per 'w'/'s' key press
    pub depth_step: f32,
    /// Pointer pixels per unit of translation
    pub pointer_scale: f32,
    /// Frame-rate cap; `None` runs frames back to back
    pub max_fps: Option<u32>,
}

impl ViewerConfig {
    /// Frame transform centred on the viewport
    pub fn frame_transform(&self) -> FrameTransform {
        FrameTransform::new(self.viewport.center(), self.pointer_scale)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "vectorspace".to_string(),
            viewport: Viewport::default(),
            perspective: Perspective::default(),
            view_mode: ViewMode::Identity,
            camera: Camera::default(),
            divide_mode: DivideMode::Omit,
            depth_step: 0.1,
            pointer_scale: 100.0,
            max_fps: None,
        }
    }
}
