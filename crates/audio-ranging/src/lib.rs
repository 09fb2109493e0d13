//! Proximity audio cue capability interface
//!
//! Models the "heard a cry for help" channel: a sensor that, at the current
//! position, may report a single ranged cue. Whether that is a microphone
//! array, an ultrasonic ranger, or a staged simulation is behind the
//! [`ProximitySensor`] trait.

pub mod sensor;
pub mod sim;

pub use sensor::{AudioEvent, ProximitySensor};
pub use sim::{RandomCueSensor, StagedCueField};

use thiserror::Error;

/// Audio sensing error types
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Sensor unavailable: {0}")]
    Unavailable(String),

    #[error("Sensor read failed: {0}")]
    Read(String),
}
