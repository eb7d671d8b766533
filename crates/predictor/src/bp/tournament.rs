//! Tournament (hybrid) predictor.
//!
//! A local predictor and a gshare predictor run side by side. A meta table
//! of saturating counters, indexed by PC, picks which one to trust: the
//! not-taken half of each meta counter means "use local", the taken half
//! means "use global".
//!
//! Both components are trained on every branch, whichever one supplied
//! the prediction. The meta counter only moves when the components
//! disagree, one step toward the component that was right.

use super::{
    BranchPredictor, GSharePredictor, LocalPredictor, SaturatingCounter, index_mask,
};
use crate::config::PredictorConfig;

pub struct TournamentPredictor {
    meta: Vec<SaturatingCounter>,
    meta_mask: u64,
    local: LocalPredictor,
    global: GSharePredictor,
}

impl TournamentPredictor {
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            meta: vec![
                SaturatingCounter::weakly_not_taken(config.counter_bits);
                1usize << config.pc_index_bits
            ],
            meta_mask: index_mask(config.pc_index_bits),
            local: LocalPredictor::new(
                config.pc_index_bits,
                config.lhistory_bits,
                config.counter_bits,
            ),
            global: GSharePredictor::new(config.ghistory_bits, config.counter_bits),
        }
    }

    pub fn meta_counter(&self, pc: u64) -> SaturatingCounter {
        self.meta[(pc & self.meta_mask) as usize]
    }

    /// Whether `predict(pc)` currently defers to the global component.
    pub fn uses_global(&self, pc: u64) -> bool {
        self.meta_counter(pc).read()
    }

    pub fn local(&self) -> &LocalPredictor {
        &self.local
    }

    pub fn global(&self) -> &GSharePredictor {
        &self.global
    }
}

impl BranchPredictor for TournamentPredictor {
    fn predict(&self, pc: u64) -> bool {
        if self.uses_global(pc) {
            self.global.predict(pc)
        } else {
            self.local.predict(pc)
        }
    }

    fn train(&mut self, pc: u64, taken: bool) {
        let local_taken = self.local.predict(pc);
        let global_taken = self.global.predict(pc);

        if local_taken != global_taken {
            // Exactly one component was right; lean toward it.
            let meta_idx = (pc & self.meta_mask) as usize;
            self.meta[meta_idx].update(global_taken == taken);
        }

        self.local.train(pc, taken);
        self.global.train(pc, taken);
    }

    fn name(&self) -> &'static str {
        "Tournament"
    }
}
