pub use self::branch_predictor::BranchPredictor;
pub use self::counter::SaturatingCounter;
pub use self::gshare::GSharePredictor;
pub use self::history::HistoryRegister;
pub use self::local::LocalPredictor;
pub use self::perceptron::PerceptronPredictor;
pub use self::predictor::Predictor;
pub use self::static_bp::StaticPredictor;
pub use self::tournament::TournamentPredictor;

pub mod branch_predictor;
pub mod counter;
pub mod gshare;
pub mod history;
pub mod local;
pub mod perceptron;
pub mod predictor;
pub mod static_bp;
pub mod tournament;

/// Low `bits` set. Callers pass widths already checked against
/// [`MAX_TABLE_BITS`](crate::config::MAX_TABLE_BITS).
#[inline(always)]
pub(crate) fn index_mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}
