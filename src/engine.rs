//! Temporal moment computation
//!
//! This module computes temporal moments of a transient signal: statistical
//! descriptors of how the signal's energy is distributed over time, after
//! Sallwood's band-limited temporal moments formulation (Shock and Vibration,
//! vol. 1, no. 6, 1994). All moments of order 2 and higher are taken about
//! the central time T.
//!
//! Every moment weights time by the instantaneous squared amplitude and
//! integrates with the trapezoidal rule. The discretization is deliberately
//! specific: time-weighted sums evaluate the weight per sample (adjacent
//! samples are double-counted) and apply the trapezoidal 1/2 once after
//! summation. A textbook per-segment trapezoid gives a slightly different,
//! incompatible result.

use crate::error::MomentError;
use crate::signal::Signal;

/// Moment engine bound to one signal
///
/// Each accessor is a pure function of the signal; higher moments recompute
/// energy and central time rather than caching them across calls.
#[derive(Debug, Clone)]
pub struct MomentEngine {
    signal: Signal,
}

impl MomentEngine {
    /// Create an engine that owns the given signal
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }

    /// Create an engine directly from a sample sequence and sampling
    /// frequency, validating the input
    pub fn from_samples(data: Vec<f64>, fs: f64) -> Result<Self, MomentError> {
        Ok(Self::new(Signal::new(data, fs)?))
    }

    /// The bound signal
    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    /// Peak value: largest absolute sample amplitude
    ///
    /// Not a temporal moment, but commonly reported alongside them.
    pub fn peak_value(&self) -> f64 {
        self.signal
            .samples()
            .iter()
            .fold(0.0, |peak, x| peak.max(x.abs()))
    }

    /// Energy (E): moment of order 0
    pub fn energy(&self) -> f64 {
        let data = self.signal.samples();
        let dt = self.signal.dt();
        let mut e = 0.0;

        for i in 0..data.len() - 1 {
            e += (dt / 2.0) * (data[i] * data[i] + data[i + 1] * data[i + 1]);
        }

        e
    }

    /// Central time (T): energy-weighted mean time, moment of order 1
    pub fn central_time(&self) -> Result<f64, MomentError> {
        let e = self.nonzero_energy()?;
        Ok(self.time_weighted_sum(|t| t) / e)
    }

    /// Mean-square duration (D2): moment of order 2 about the central time
    pub fn ms_duration(&self) -> Result<f64, MomentError> {
        let e = self.nonzero_energy()?;
        let t_c = self.central_time()?;
        Ok(self.time_weighted_sum(|t| (t - t_c).powi(2)) / e)
    }

    /// Root-mean-square duration (D): spread of energy around the central time
    pub fn rms_duration(&self) -> Result<f64, MomentError> {
        let d2 = self.ms_duration()?;
        if d2 < 0.0 {
            return Err(MomentError::NumericDomain(format!(
                "mean-square duration is negative ({d2}), cannot take square root"
            )));
        }
        Ok(d2.sqrt())
    }

    /// Root energy amplitude (Ae): characteristic amplitude scale, sqrt(E/D)
    pub fn root_energy_amplitude(&self) -> Result<f64, MomentError> {
        let e = self.energy();
        let d = self.rms_duration()?;
        if d == 0.0 {
            return Err(MomentError::UndefinedMoment(
                "rms duration is zero, root energy amplitude is undefined".to_string(),
            ));
        }
        let ratio = e / d;
        if ratio < 0.0 {
            return Err(MomentError::NumericDomain(format!(
                "energy-to-duration ratio is negative ({ratio}), cannot take square root"
            )));
        }
        Ok(ratio.sqrt())
    }

    /// Central skewness (St): moment of order 3 about the central time
    ///
    /// The cube root preserves the sign of the underlying moment.
    pub fn central_skew(&self) -> Result<f64, MomentError> {
        let e = self.nonzero_energy()?;
        let t_c = self.central_time()?;
        let st3 = self.time_weighted_sum(|t| (t - t_c).powi(3)) / e;
        Ok(st3.cbrt())
    }

    /// Normalized skewness (S): central skewness relative to the rms duration
    pub fn norm_skew(&self) -> Result<f64, MomentError> {
        let d = self.rms_duration()?;
        let st = self.central_skew()?;
        if d == 0.0 {
            return Err(MomentError::UndefinedMoment(
                "rms duration is zero, normalized skewness is undefined".to_string(),
            ));
        }
        Ok(st / d)
    }

    /// Central kurtosis (Kt): moment of order 4 about the central time
    pub fn central_kurt(&self) -> Result<f64, MomentError> {
        let e = self.nonzero_energy()?;
        let t_c = self.central_time()?;
        let kt4 = self.time_weighted_sum(|t| (t - t_c).powi(4)) / e;
        if kt4 < 0.0 {
            return Err(MomentError::NumericDomain(format!(
                "fourth central moment is negative ({kt4}), cannot take fourth root"
            )));
        }
        Ok(kt4.powf(0.25))
    }

    /// Normalized kurtosis (K): central kurtosis relative to the rms duration
    pub fn norm_kurt(&self) -> Result<f64, MomentError> {
        let d = self.rms_duration()?;
        let kt = self.central_kurt()?;
        if d == 0.0 {
            return Err(MomentError::UndefinedMoment(
                "rms duration is zero, normalized kurtosis is undefined".to_string(),
            ));
        }
        Ok(kt / d)
    }

    /// Energy, or an error if it cannot serve as a denominator
    ///
    /// Energy is a sum of squares of finite samples, so it is never negative;
    /// exact zero is the degenerate all-zero signal.
    fn nonzero_energy(&self) -> Result<f64, MomentError> {
        let e = self.energy();
        if e <= 0.0 {
            return Err(MomentError::UndefinedMoment(
                "signal energy is zero, energy-normalized moments are undefined".to_string(),
            ));
        }
        Ok(e)
    }

    /// Accumulate `g(t_i) * dt * (data[i]^2 + data[i+1]^2)` over all segments
    /// and halve once at the end, with `t_i = dt * (i + 0.5)` the midpoint
    /// time of segment i.
    fn time_weighted_sum<F>(&self, g: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let data = self.signal.samples();
        let dt = self.signal.dt();
        let mut sum = 0.0;

        for i in 0..data.len() - 1 {
            let t = dt * (i as f64 + 0.5);
            sum += g(t) * dt * (data[i] * data[i] + data[i + 1] * data[i + 1]);
        }

        0.5 * sum
    }
}
