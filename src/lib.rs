//! Tempmom - temporal moments of transient discrete-time signals
//!
//! Temporal moments statistically characterize transient dynamic signals by
//! describing how a signal's energy is distributed over time, following
//! Sallwood's band-limited temporal moments formulation:
//!
//! > D. O. Sallwood, "Characterization and simulation of transient
//! > vibrations using band limited temporal moments," Shock and Vibration,
//! > vol. 1, no. 6, pp. 507-527, 1994.
//!
//! ## Modules
//!
//! - **signal**: validated signal input (samples + sampling frequency)
//! - **engine**: per-moment accessors over one bound signal
//! - **summary**: the canonical full (10-value) and semi (6-value) views
//!
//! ## Example
//!
//! ```
//! use tempmom::{full, MomentEngine, Signal};
//!
//! let fs = 2048.0;
//! let data: Vec<f64> = (0..2048)
//!     .map(|i| (-20.0 * i as f64 / fs).exp())
//!     .collect();
//!
//! let engine = MomentEngine::new(Signal::new(data, fs)?);
//! let moments = full(&engine)?;
//! assert!((moments[1] - 0.025).abs() < 1e-4); // energy of exp(-20t)
//! # Ok::<(), tempmom::MomentError>(())
//! ```

pub mod engine;
pub mod error;
pub mod signal;
pub mod summary;

pub use engine::MomentEngine;
pub use error::MomentError;
pub use signal::Signal;
pub use summary::{full, semi, FullMoments, SemiMoments};

/// Crate version, for callers that report it alongside computed moments
pub const TEMPMOM_VERSION: &str = env!("CARGO_PKG_VERSION");
