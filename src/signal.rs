//! Signal input type
//!
//! This module defines the validated input to the moment engine: a finite,
//! uniformly-sampled sequence of real samples paired with its sampling
//! frequency. Validation happens once at construction; every downstream
//! computation can assume a well-formed signal.

use crate::error::MomentError;
use serde::{Deserialize, Serialize};

/// A finite, uniformly-sampled discrete-time signal
///
/// Immutable once constructed. Trapezoidal integration needs at least one
/// interval, so the sample count must be at least 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignal")]
pub struct Signal {
    data: Vec<f64>,
    fs: f64,
}

/// Unvalidated form used for deserialization
#[derive(Deserialize)]
struct RawSignal {
    data: Vec<f64>,
    fs: f64,
}

impl TryFrom<RawSignal> for Signal {
    type Error = MomentError;

    fn try_from(raw: RawSignal) -> Result<Self, Self::Error> {
        Signal::new(raw.data, raw.fs)
    }
}

impl Signal {
    /// Create a signal from a sample sequence and sampling frequency (Hz)
    pub fn new(data: Vec<f64>, fs: f64) -> Result<Self, MomentError> {
        if data.len() < 2 {
            return Err(MomentError::InvalidInput(format!(
                "signal must contain at least 2 samples, got {}",
                data.len()
            )));
        }
        if !fs.is_finite() || fs <= 0.0 {
            return Err(MomentError::InvalidInput(format!(
                "sampling frequency must be positive and finite, got {fs}"
            )));
        }
        if let Some(i) = data.iter().position(|x| !x.is_finite()) {
            return Err(MomentError::InvalidInput(format!(
                "sample {i} is not finite: {}",
                data[i]
            )));
        }

        Ok(Self { data, fs })
    }

    /// Sample values
    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    /// Sampling frequency (Hz)
    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Sample period (seconds)
    pub fn dt(&self) -> f64 {
        1.0 / self.fs
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects signals shorter than 2 samples
    pub fn is_empty(&self) -> bool {
        false
    }
}
