/// The interface that all Branch Predictors must implement.
///
/// The caller predicts a branch, resolves it, then trains with the same PC
/// exactly once. Predictions never mutate predictor state.
pub trait BranchPredictor {
    /// Returns the predicted direction (true = taken) of the branch at `pc`.
    fn predict(&self, pc: u64) -> bool;

    /// Updates the predictor tables with the resolved outcome.
    fn train(&mut self, pc: u64, taken: bool);

    /// Short name for reports and logs.
    fn name(&self) -> &'static str;
}
