//! Multilabel scoring of predicted genres against ground truth.

pub mod batch;
pub mod label_set;

pub use batch::{BatchEvaluation, BatchSummary, ItemScore, evaluate_batch};
pub use label_set::{ScoreError, count_labels, score, score_labels, try_count_labels};
