use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub precision: f64,
    pub recall: f64,
}

impl ScoreResult {
    pub fn as_pair(&self) -> (f64, f64) {
        (self.precision, self.recall)
    }

    pub fn is_perfect(&self) -> bool {
        self.precision == 1.0 && self.recall == 1.0
    }
}

/// Raw tallies behind a [`ScoreResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub tp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub fp: usize,
}

impl LabelCounts {
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    pub fn to_score(&self) -> ScoreResult {
        ScoreResult {
            precision: self.precision(),
            recall: self.recall(),
        }
    }

    pub fn add(&mut self, other: &LabelCounts) {
        self.tp += other.tp;
        self.fn_ += other.fn_;
        self.fp += other.fp;
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
