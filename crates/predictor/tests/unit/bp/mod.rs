//! # Branch Predictor Unit Tests
//!
//! Each predictor is exercised directly, without the facade, so tests can
//! inspect table and history state after every training step.


/// Unit tests for the history shift register.
pub mod history;

/// Unit tests for the gshare predictor, including the documented
/// two-bit-history walk-through.
pub mod gshare;
