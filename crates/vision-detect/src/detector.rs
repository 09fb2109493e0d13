//! The vision capability trait

use crate::event::VisualEvent;
use crate::VisionError;
use serde::{Deserialize, Serialize};

/// Request for one detection pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameRequest {
    /// Camera index (0 = front)
    pub camera_id: u8,
}

impl Default for FrameRequest {
    fn default() -> Self {
        Self { camera_id: 0 }
    }
}

/// Capability interface to the detection pipeline.
///
/// One call captures a frame and classifies it. An empty vector means the
/// pass completed and found nothing; errors mean the pass itself failed and
/// the caller should treat the waypoint as unsensed.
#[allow(async_fn_in_trait)]
pub trait VisionDetector {
    /// Run one capture-and-detect pass
    async fn detect(&mut self, request: &FrameRequest) -> Result<Vec<VisualEvent>, VisionError>;
}
