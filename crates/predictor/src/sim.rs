//! Trace replay driver.

use log::{debug, trace};

use crate::bp::BranchPredictor;
use crate::error::TraceError;
use crate::stats::SimStats;
use crate::trace::Branch;

/// Replays `branches` through `bp` in order.
///
/// Each branch is predicted, reported to `on_prediction`, scored, then used
/// to train the predictor. Replay stops at the first trace error.
pub fn run<P, I, F>(bp: &mut P, branches: I, mut on_prediction: F) -> Result<SimStats, TraceError>
where
    P: BranchPredictor + ?Sized,
    I: IntoIterator<Item = Result<Branch, TraceError>>,
    F: FnMut(&Branch, bool),
{
    let mut stats = SimStats::default();

    for branch in branches {
        let branch = branch?;
        let predicted = bp.predict(branch.pc);
        trace!(
            "pc={:#x} predicted={} taken={}",
            branch.pc, predicted, branch.taken
        );

        on_prediction(&branch, predicted);
        stats.record(predicted, branch.taken);
        bp.train(branch.pc, branch.taken);
    }

    debug!(
        "{}: {} branches, {} mispredicted",
        bp.name(),
        stats.branches,
        stats.mispredictions
    );
    Ok(stats)
}

/// Replays already-parsed branches and returns the prediction made for each.
///
/// Same predict-then-train order as [`run`], without scoring.
pub fn predictions<P>(bp: &mut P, branches: &[Branch]) -> Vec<bool>
where
    P: BranchPredictor + ?Sized,
{
    branches
        .iter()
        .map(|branch| {
            let predicted = bp.predict(branch.pc);
            bp.train(branch.pc, branch.taken);
            predicted
        })
        .collect()
}
