pub mod labels;
pub mod scores;

pub use labels::LabelSequence;
pub use scores::{LabelCounts, ScoreResult};
