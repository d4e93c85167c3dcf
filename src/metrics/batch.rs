use serde::Serialize;
use tracing::info;

use crate::input::batch::BatchRecord;
use crate::metrics::label_set::{ScoreError, try_count_labels};
use crate::model::{LabelCounts, LabelSequence, ScoreResult};
use crate::report::{mean, median, p10, p90};

#[derive(Debug, Clone)]
pub struct ItemScore {
    pub title: String,
    pub n_truth: usize,
    pub n_predicted: usize,
    pub counts: LabelCounts,
    pub score: ScoreResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub n_items: usize,
    pub precision: DistributionStats,
    pub recall: DistributionStats,
    pub micro: ScoreResult,
    pub totals: LabelCounts,
    pub perfect_fraction: f64,
}

#[derive(Debug, Clone)]
pub struct BatchEvaluation {
    pub items: Vec<ItemScore>,
    pub summary: BatchSummary,
}

/// Scores every record in order. The first record missing a label list aborts
/// the batch with the record's index and title in the error.
pub fn evaluate_batch(records: &[BatchRecord]) -> Result<BatchEvaluation, ScoreError> {
    let mut items = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let truth = record.ground_truth.as_ref().map(LabelSequence::as_slice);
        let predicted = record.predicted.as_ref().map(LabelSequence::as_slice);
        let counts = try_count_labels(truth, predicted).map_err(|err| {
            let ScoreError::InvalidInput(msg) = err;
            ScoreError::InvalidInput(format!("record {} ({}): {}", idx, record.title, msg))
        })?;
        items.push(ItemScore {
            title: record.title.clone(),
            n_truth: truth.map_or(0, <[String]>::len),
            n_predicted: predicted.map_or(0, <[String]>::len),
            counts,
            score: counts.to_score(),
        });
    }

    let summary = summarize(&items);
    info!(
        "scored {} items: mean precision {:.6}, mean recall {:.6}",
        summary.n_items, summary.precision.mean, summary.recall.mean
    );
    Ok(BatchEvaluation { items, summary })
}

pub fn summarize(items: &[ItemScore]) -> BatchSummary {
    let precision = items.iter().map(|i| i.score.precision).collect::<Vec<_>>();
    let recall = items.iter().map(|i| i.score.recall).collect::<Vec<_>>();

    let mut totals = LabelCounts::default();
    let mut perfect = 0usize;
    for item in items {
        totals.add(&item.counts);
        if item.score.is_perfect() {
            perfect += 1;
        }
    }
    let perfect_fraction = if items.is_empty() {
        0.0
    } else {
        perfect as f64 / items.len() as f64
    };

    BatchSummary {
        n_items: items.len(),
        precision: distribution(&precision),
        recall: distribution(&recall),
        micro: totals.to_score(),
        totals,
        perfect_fraction,
    }
}

fn distribution(values: &[f64]) -> DistributionStats {
    DistributionStats {
        mean: mean(values),
        median: median(values),
        p10: p10(values),
        p90: p90(values),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/batch.rs"]
mod tests;
