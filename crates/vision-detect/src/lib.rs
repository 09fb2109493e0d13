//! Human detection capability interface
//!
//! The mission layer requests one detection pass per waypoint and receives
//! normalized [`VisualEvent`]s - whatever model or pipeline produced them is
//! behind the [`VisionDetector`] trait. The [`synthetic`] backend generates
//! seeded detections for demos and tests; a production backend would wrap a
//! real person-detection model.

pub mod detector;
pub mod event;
pub mod synthetic;

pub use detector::{FrameRequest, VisionDetector};
pub use event::VisualEvent;
pub use synthetic::{SyntheticDetector, SyntheticVisionConfig};

use thiserror::Error;

/// Vision pipeline error types
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Detector unavailable: {0}")]
    Unavailable(String),

    #[error("Frame capture failed: {0}")]
    Capture(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}
