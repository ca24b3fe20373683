//! Aggregate moment views
//!
//! This module packs the individual moment accessors into the two canonical
//! orderings: the full ten-value set and the reduced six-value set. Each
//! value is produced by the same accessor a caller would invoke directly,
//! so the packed views are bit-identical to per-moment calls.

use crate::engine::MomentEngine;
use crate::error::MomentError;
use serde::{Deserialize, Serialize};

/// Complete set of temporal moments plus the peak value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FullMoments {
    /// Peak amplitude
    pub peak_value: f64,
    /// Energy (E)
    pub energy: f64,
    /// Central time (T)
    pub central_time: f64,
    /// Mean-square duration (D2)
    pub ms_duration: f64,
    /// Root-mean-square duration (D)
    pub rms_duration: f64,
    /// Central skewness (St)
    pub central_skew: f64,
    /// Normalized skewness (S)
    pub norm_skew: f64,
    /// Central kurtosis (Kt)
    pub central_kurt: f64,
    /// Normalized kurtosis (K)
    pub norm_kurt: f64,
    /// Root energy amplitude (Ae)
    pub root_energy_amplitude: f64,
}

impl FullMoments {
    /// Compute every moment from the engine
    pub fn compute(engine: &MomentEngine) -> Result<Self, MomentError> {
        Ok(Self {
            peak_value: engine.peak_value(),
            energy: engine.energy(),
            central_time: engine.central_time()?,
            ms_duration: engine.ms_duration()?,
            rms_duration: engine.rms_duration()?,
            central_skew: engine.central_skew()?,
            norm_skew: engine.norm_skew()?,
            central_kurt: engine.central_kurt()?,
            norm_kurt: engine.norm_kurt()?,
            root_energy_amplitude: engine.root_energy_amplitude()?,
        })
    }

    /// Canonical ordering of the full set
    pub fn to_array(&self) -> [f64; 10] {
        [
            self.peak_value,
            self.energy,
            self.central_time,
            self.ms_duration,
            self.rms_duration,
            self.central_skew,
            self.norm_skew,
            self.central_kurt,
            self.norm_kurt,
            self.root_energy_amplitude,
        ]
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reduced set of the most relevant temporal moments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemiMoments {
    /// Energy (E)
    pub energy: f64,
    /// Central time (T)
    pub central_time: f64,
    /// Root-mean-square duration (D)
    pub rms_duration: f64,
    /// Central skewness (St)
    pub central_skew: f64,
    /// Central kurtosis (Kt)
    pub central_kurt: f64,
    /// Root energy amplitude (Ae)
    pub root_energy_amplitude: f64,
}

impl SemiMoments {
    /// Compute the reduced moment set from the engine
    pub fn compute(engine: &MomentEngine) -> Result<Self, MomentError> {
        Ok(Self {
            energy: engine.energy(),
            central_time: engine.central_time()?,
            rms_duration: engine.rms_duration()?,
            central_skew: engine.central_skew()?,
            central_kurt: engine.central_kurt()?,
            root_energy_amplitude: engine.root_energy_amplitude()?,
        })
    }

    /// Canonical ordering of the reduced set
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.energy,
            self.central_time,
            self.rms_duration,
            self.central_skew,
            self.central_kurt,
            self.root_energy_amplitude,
        ]
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// All ten statistics in canonical order: peak value, energy, central time,
/// mean-square duration, rms duration, central skewness, normalized
/// skewness, central kurtosis, normalized kurtosis, root energy amplitude
pub fn full(engine: &MomentEngine) -> Result<[f64; 10], MomentError> {
    Ok(FullMoments::compute(engine)?.to_array())
}

/// The six most relevant statistics in canonical order: energy, central
/// time, rms duration, central skewness, central kurtosis, root energy
/// amplitude
pub fn semi(engine: &MomentEngine) -> Result<[f64; 6], MomentError> {
    Ok(SemiMoments::compute(engine)?.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    use pretty_assertions::assert_eq;

    fn make_decay_engine() -> MomentEngine {
        let fs = 2048.0;
        let dt = 1.0 / fs;
        let data: Vec<f64> = (0..2048).map(|i| (-20.0 * i as f64 * dt).exp()).collect();
        MomentEngine::new(Signal::new(data, fs).unwrap())
    }

    #[test]
    fn test_full_matches_accessors_bit_for_bit() {
        let engine = make_decay_engine();
        let full = full(&engine).unwrap();

        assert_eq!(full[0], engine.peak_value());
        assert_eq!(full[1], engine.energy());
        assert_eq!(full[2], engine.central_time().unwrap());
        assert_eq!(full[3], engine.ms_duration().unwrap());
        assert_eq!(full[4], engine.rms_duration().unwrap());
        assert_eq!(full[5], engine.central_skew().unwrap());
        assert_eq!(full[6], engine.norm_skew().unwrap());
        assert_eq!(full[7], engine.central_kurt().unwrap());
        assert_eq!(full[8], engine.norm_kurt().unwrap());
        assert_eq!(full[9], engine.root_energy_amplitude().unwrap());
    }

    #[test]
    fn test_semi_matches_accessors_bit_for_bit() {
        let engine = make_decay_engine();
        let semi = semi(&engine).unwrap();

        assert_eq!(semi[0], engine.energy());
        assert_eq!(semi[1], engine.central_time().unwrap());
        assert_eq!(semi[2], engine.rms_duration().unwrap());
        assert_eq!(semi[3], engine.central_skew().unwrap());
        assert_eq!(semi[4], engine.central_kurt().unwrap());
        assert_eq!(semi[5], engine.root_energy_amplitude().unwrap());
    }

    #[test]
    fn test_semi_is_subset_of_full() {
        let engine = make_decay_engine();
        let full = FullMoments::compute(&engine).unwrap();
        let semi = SemiMoments::compute(&engine).unwrap();

        assert_eq!(semi.energy, full.energy);
        assert_eq!(semi.central_time, full.central_time);
        assert_eq!(semi.rms_duration, full.rms_duration);
        assert_eq!(semi.central_skew, full.central_skew);
        assert_eq!(semi.central_kurt, full.central_kurt);
        assert_eq!(semi.root_energy_amplitude, full.root_energy_amplitude);
    }

    #[test]
    fn test_full_fails_on_zero_signal() {
        let engine = MomentEngine::new(Signal::new(vec![0.0; 16], 100.0).unwrap());
        assert!(matches!(
            full(&engine),
            Err(MomentError::UndefinedMoment(_))
        ));
        assert!(matches!(
            semi(&engine),
            Err(MomentError::UndefinedMoment(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let engine = make_decay_engine();
        let moments = FullMoments::compute(&engine).unwrap();

        let json = moments.to_json().unwrap();
        let loaded = FullMoments::from_json(&json).unwrap();

        assert_eq!(moments, loaded);
    }
}
