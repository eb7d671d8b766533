use super::{BranchPredictor, HistoryRegister, SaturatingCounter, index_mask};

pub struct GSharePredictor {
    ghr: HistoryRegister,
    pht: Vec<SaturatingCounter>,
    pc_mask: u64,
}

impl GSharePredictor {
    /// Creates a predictor with `2^ghistory_bits` counters, all Weakly Not
    /// Taken, and an empty global history.
    pub fn new(ghistory_bits: u32, counter_bits: u32) -> Self {
        let table_size = 1usize << ghistory_bits;
        Self {
            ghr: HistoryRegister::new(ghistory_bits),
            pht: vec![SaturatingCounter::weakly_not_taken(counter_bits); table_size],
            pc_mask: index_mask(ghistory_bits),
        }
    }

    /// GShare Index = (PC & mask) ^ GlobalHistory
    #[inline(always)]
    pub fn index(&self, pc: u64) -> usize {
        ((pc & self.pc_mask) ^ self.ghr.value()) as usize
    }

    /// Counter that `predict(pc)` would read right now.
    pub fn counter(&self, pc: u64) -> SaturatingCounter {
        self.pht[self.index(pc)]
    }

    pub fn counter_at(&self, idx: usize) -> SaturatingCounter {
        self.pht[idx]
    }

    pub fn history(&self) -> HistoryRegister {
        self.ghr
    }

    pub fn table_size(&self) -> usize {
        self.pht.len()
    }
}

impl BranchPredictor for GSharePredictor {
    fn predict(&self, pc: u64) -> bool {
        self.pht[self.index(pc)].read()
    }

    fn train(&mut self, pc: u64, taken: bool) {
        let idx = self.index(pc);
        self.pht[idx].update(taken);
        self.ghr.shift_in(taken);
    }

    fn name(&self) -> &'static str {
        "GShare"
    }
}
