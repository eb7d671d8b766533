//! Two-level local predictor.
//!
//! The low PC bits select a per-address history register; that register's
//! value selects a counter in a shared pattern table. Distinct branches that
//! share low PC bits share a history register.

use super::{BranchPredictor, HistoryRegister, SaturatingCounter, index_mask};

pub struct LocalPredictor {
    histories: Vec<HistoryRegister>,
    pht: Vec<SaturatingCounter>,
    pc_mask: u64,
}

impl LocalPredictor {
    pub fn new(pc_index_bits: u32, lhistory_bits: u32, counter_bits: u32) -> Self {
        Self {
            histories: vec![HistoryRegister::new(lhistory_bits); 1usize << pc_index_bits],
            pht: vec![SaturatingCounter::weakly_not_taken(counter_bits); 1usize << lhistory_bits],
            pc_mask: index_mask(pc_index_bits),
        }
    }

    #[inline(always)]
    fn slot(&self, pc: u64) -> usize {
        (pc & self.pc_mask) as usize
    }

    /// Local history register tracking the branch at `pc`.
    pub fn history(&self, pc: u64) -> HistoryRegister {
        self.histories[self.slot(pc)]
    }

    /// Pattern table counter currently selected for `pc`.
    pub fn counter(&self, pc: u64) -> SaturatingCounter {
        self.pht[self.history(pc).value() as usize]
    }

    pub fn counter_at(&self, pattern: usize) -> SaturatingCounter {
        self.pht[pattern]
    }
}

impl BranchPredictor for LocalPredictor {
    fn predict(&self, pc: u64) -> bool {
        self.counter(pc).read()
    }

    fn train(&mut self, pc: u64, taken: bool) {
        let slot = self.slot(pc);
        let pattern = self.histories[slot].value() as usize;
        self.pht[pattern].update(taken);
        self.histories[slot].shift_in(taken);
    }

    fn name(&self) -> &'static str {
        "Local"
    }
}
