//! Scoring helpers for multilabel movie-genre experiments.
//!
//! The core is [`metrics::score`], a precision/recall routine over label
//! sequences. Provider adapters normalize TMDB and IMDb genre payloads into
//! [`model::LabelSequence`] before they reach the scorer.

pub mod input;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod providers;
pub mod report;

pub use metrics::{ScoreError, score, score_labels};
pub use model::{LabelCounts, LabelSequence, ScoreResult};
