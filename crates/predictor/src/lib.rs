//! Conditional branch direction predictors for cycle-accurate and
//! trace-driven CPU simulators.
//!
//! The crate exposes a family of predictors behind the [`BranchPredictor`]
//! trait and a single configurable [`Predictor`] that selects one of them:
//!
//! - **Static:** always predicts taken.
//! - **GShare:** PC bits XOR global history index a table of 2-bit counters.
//! - **Tournament:** local and global predictors arbitrated by a meta table.
//! - **Custom:** a perceptron predictor over the global history.
//!
//! The [`trace`], [`stats`] and [`sim`] modules provide a minimal harness
//! for replaying branch traces through a predictor.

pub mod bp;
pub mod config;
pub mod error;
pub mod sim;
pub mod stats;
pub mod trace;

pub use crate::bp::{BranchPredictor, Predictor};
pub use crate::config::{PerceptronIndex, PredictorConfig, PredictorKind};
pub use crate::error::{ConfigError, TraceError};
pub use crate::stats::SimStats;
pub use crate::trace::Branch;
