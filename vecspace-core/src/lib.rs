/// vecspace core library - projection math and the wireframe frame loop
///
/// This library holds everything that does not touch a real terminal or
/// window: vector and matrix helpers, the camera and projection builders, the
/// mesh model, the vertex-to-pixel pipeline, input handling and the frame
/// loop, which talks to its front end through [`EventSource`] and [`Surface`].

pub mod config;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use frame::{EventSource, Rgba, Surface, Viewer};
pub use geometry::Mesh;
pub use input::{Controls, Flow, InputEvent};
pub use math::{Mat4, Vec2, Vec3};
pub use pipeline::{DivideMode, Projector, Viewport};
pub use projection::{Camera, Perspective, ViewMode, ViewProjection};
pub use transform::FrameTransform;
