//! Configurable predictor facade.

use log::debug;

use super::{
    BranchPredictor, GSharePredictor, PerceptronPredictor, StaticPredictor, TournamentPredictor,
};
use crate::config::{PredictorConfig, PredictorKind};
use crate::error::ConfigError;

/// One of the supported predictors, selected and sized by a
/// [`PredictorConfig`].
///
/// A `Predictor` only exists in a configured state: every table it owns is
/// allocated by [`Predictor::configure`].
pub enum Predictor {
    Static(StaticPredictor),
    GShare(GSharePredictor),
    Tournament(TournamentPredictor),
    Perceptron(PerceptronPredictor),
}

impl Predictor {
    /// Validates `config` and allocates the tables its kind needs.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for zero or oversized bit widths, or a
    /// perceptron table above [`MAX_PERCEPTRON_WEIGHTS`](crate::config::MAX_PERCEPTRON_WEIGHTS).
    pub fn configure(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let bp = match config.kind {
            PredictorKind::Static => Predictor::Static(StaticPredictor::new()),
            PredictorKind::Gshare => Predictor::GShare(GSharePredictor::new(
                config.ghistory_bits,
                config.counter_bits,
            )),
            PredictorKind::Tournament => {
                Predictor::Tournament(TournamentPredictor::new(config))
            }
            PredictorKind::Custom => Predictor::Perceptron(PerceptronPredictor::new(config)),
        };

        debug!("configured {} predictor ({})", bp.name(), config.describe());
        Ok(bp)
    }

    pub fn kind(&self) -> PredictorKind {
        match self {
            Predictor::Static(_) => PredictorKind::Static,
            Predictor::GShare(_) => PredictorKind::Gshare,
            Predictor::Tournament(_) => PredictorKind::Tournament,
            Predictor::Perceptron(_) => PredictorKind::Custom,
        }
    }
}

impl BranchPredictor for Predictor {
    fn predict(&self, pc: u64) -> bool {
        match self {
            Predictor::Static(bp) => bp.predict(pc),
            Predictor::GShare(bp) => bp.predict(pc),
            Predictor::Tournament(bp) => bp.predict(pc),
            Predictor::Perceptron(bp) => bp.predict(pc),
        }
    }

    fn train(&mut self, pc: u64, taken: bool) {
        match self {
            Predictor::Static(bp) => bp.train(pc, taken),
            Predictor::GShare(bp) => bp.train(pc, taken),
            Predictor::Tournament(bp) => bp.train(pc, taken),
            Predictor::Perceptron(bp) => bp.train(pc, taken),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
