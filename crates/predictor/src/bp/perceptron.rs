//! Perceptron branch predictor.
//!
//! Each table row holds a bias weight and one weight per global history
//! bit. The output `y = bias + sum(w[i] * x[i])`, with `x[i]` = +1 for a
//! taken history bit and -1 otherwise, predicts taken when `y >= 0`.
//!
//! Training follows "Dynamic Branch Prediction with Perceptrons"
//! (Jiménez and Lin, 2001): weights only move on a misprediction or when
//! `|y|` is at or below the threshold `1.93 * h + 14`, where `h` is the
//! history length. Weights are plain integers, not saturating counters.

use super::{BranchPredictor, HistoryRegister, index_mask};
use crate::config::{PerceptronIndex, PredictorConfig};

const THETA_COEFF: f64 = 1.93;
const THETA_BIAS: f64 = 14.0;

/// Starting value of every row's bias weight.
pub const INITIAL_BIAS: i32 = 1;

pub struct PerceptronPredictor {
    ghr: HistoryRegister,
    // Row-major: [bias, w0, w1, ..] per row.
    table: Vec<i32>,
    history_length: usize,
    row_size: usize,
    table_mask: u64,
    indexing: PerceptronIndex,
    threshold: i64,
}

impl PerceptronPredictor {
    pub fn new(config: &PredictorConfig) -> Self {
        let hist_len = config.ghistory_bits as usize;
        let table_bits = match config.perceptron_index {
            PerceptronIndex::Hashed => config.ghistory_bits,
            PerceptronIndex::Pc => config.pc_index_bits,
        };
        let table_entries = 1usize << table_bits;
        let row_size = hist_len + 1;

        let mut table = vec![0; table_entries * row_size];
        for row in table.chunks_exact_mut(row_size) {
            row[0] = INITIAL_BIAS;
        }

        Self {
            ghr: HistoryRegister::new(config.ghistory_bits),
            table,
            history_length: hist_len,
            row_size,
            table_mask: index_mask(table_bits),
            indexing: config.perceptron_index,
            threshold: threshold_for(hist_len),
        }
    }

    /// Row selected for `pc` under the current global history.
    pub fn index(&self, pc: u64) -> usize {
        let idx = match self.indexing {
            PerceptronIndex::Hashed => pc ^ self.ghr.value(),
            PerceptronIndex::Pc => pc,
        };
        (idx & self.table_mask) as usize
    }

    /// Bias followed by the history weights of row `idx`.
    pub fn row(&self, idx: usize) -> &[i32] {
        let base = idx * self.row_size;
        &self.table[base..base + self.row_size]
    }

    /// Raw perceptron output for `pc`; its sign is the prediction.
    pub fn output(&self, pc: u64) -> i64 {
        self.row_output(self.index(pc))
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn history(&self) -> HistoryRegister {
        self.ghr
    }

    pub fn table_size(&self) -> usize {
        self.table.len() / self.row_size
    }

    fn row_output(&self, idx: usize) -> i64 {
        let row = self.row(idx);
        let mut y = row[0] as i64;

        for (i, &w) in row[1..].iter().enumerate() {
            let x = if self.ghr.bit(i as u32) { 1 } else { -1 };
            y += w as i64 * x;
        }
        y
    }
}

/// Training threshold for a history of `hist_len` bits.
pub fn threshold_for(hist_len: usize) -> i64 {
    (THETA_COEFF * (hist_len as f64) + THETA_BIAS) as i64
}

impl BranchPredictor for PerceptronPredictor {
    fn predict(&self, pc: u64) -> bool {
        self.output(pc) >= 0
    }

    fn train(&mut self, pc: u64, taken: bool) {
        let idx = self.index(pc);
        let y = self.row_output(idx);
        let t: i32 = if taken { 1 } else { -1 };

        if (y >= 0) != taken || y.abs() <= self.threshold {
            let base = idx * self.row_size;
            self.table[base] = self.table[base].saturating_add(t);

            for i in 0..self.history_length {
                let x = if self.ghr.bit(i as u32) { 1 } else { -1 };
                let w = &mut self.table[base + 1 + i];
                *w = w.saturating_add(t * x);
            }
        }

        self.ghr.shift_in(taken);
    }

    fn name(&self) -> &'static str {
        "Perceptron"
    }
}
