/// Input events and how they drive the frame transform
use crate::transform::FrameTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Absolute pointer position in window pixels
    MouseMotion { x: i32, y: i32 },
    KeyDown { symbol: char },
}

/// Whether the frame loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Maps input events onto the frame transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub depth_step: f32,
}

impl Controls {
    pub const DEPTH_FORWARD: char = 'w';
    pub const DEPTH_BACKWARD: char = 's';

    pub fn new(depth_step: f32) -> Self {
        Self { depth_step }
    }

    pub fn apply(&self, event: &InputEvent, transform: &mut FrameTransform) -> Flow {
        match *event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::MouseMotion { x, y } => transform.set_pointer(x, y),
            InputEvent::KeyDown { symbol } => {
                log::debug!("Key down: {symbol:?}");
                match symbol {
                    Self::DEPTH_FORWARD => transform.nudge_depth(self.depth_step),
                    Self::DEPTH_BACKWARD => transform.nudge_depth(-self.depth_step),
                    _ => {}
                }
            }
        }
        Flow::Continue
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(0.1)
    }
}
