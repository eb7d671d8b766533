use serde::Serialize;

/// Prediction outcome counters for one trace replay.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub branches: u64,
    pub mispredictions: u64,
    pub taken: u64,
}

impl SimStats {
    pub fn record(&mut self, predicted: bool, taken: bool) {
        self.branches += 1;
        if taken {
            self.taken += 1;
        }
        if predicted != taken {
            self.mispredictions += 1;
        }
    }

    pub fn correct(&self) -> u64 {
        self.branches - self.mispredictions
    }

    /// Fraction of branches predicted correctly, 0.0 for an empty trace.
    pub fn accuracy(&self) -> f64 {
        if self.branches > 0 {
            self.correct() as f64 / self.branches as f64
        } else {
            0.0
        }
    }

    /// Mispredicted branches as a percentage.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches > 0 {
            100.0 * self.mispredictions as f64 / self.branches as f64
        } else {
            0.0
        }
    }

    pub fn print(&self, predictor: &str) {
        println!("\n-----------------------------");
        println!("Predictor:            {}", predictor);
        println!("Branches:             {}", self.branches);
        println!("Taken:                {}", self.taken);
        println!("Incorrect:            {}", self.mispredictions);

        if self.branches > 0 {
            println!(
                "Branch Prediction:    {:.2}% accuracy ({} / {})",
                self.accuracy() * 100.0,
                self.correct(),
                self.branches
            );
            println!("Misprediction Rate:   {:.3}%", self.misprediction_rate());
        } else {
            println!("Branch Prediction:    N/A");
        }
        println!("-----------------------------");
    }
}
