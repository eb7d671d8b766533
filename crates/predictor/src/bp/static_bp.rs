use super::BranchPredictor;

/// Predicts every branch taken and never learns.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    fn predict(&self, _pc: u64) -> bool {
        true
    }

    fn train(&mut self, _pc: u64, _taken: bool) {}

    fn name(&self) -> &'static str {
        "Static"
    }
}
