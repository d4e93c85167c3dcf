use tracing::debug;

use crate::model::{LabelCounts, ScoreResult};

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Precision and recall of `predicted` against `ground_truth`.
///
/// A ground-truth label is a true positive whenever it appears anywhere in
/// `predicted`, otherwise a false negative. A predicted label is a false
/// positive when it appears nowhere in `ground_truth`. Both passes visit every
/// occurrence, so a label repeated in `ground_truth` is counted once per
/// occurrence even if it is predicted only once.
///
/// Either side being `None` is rejected with [`ScoreError::InvalidInput`].
/// Empty sequences are fine and score `(0, 0)`.
pub fn score<S: AsRef<str>>(
    ground_truth: Option<&[S]>,
    predicted: Option<&[S]>,
) -> Result<ScoreResult, ScoreError> {
    Ok(try_count_labels(ground_truth, predicted)?.to_score())
}

/// Tallies behind [`score`], with the same rejection of absent inputs.
pub fn try_count_labels<S: AsRef<str>>(
    ground_truth: Option<&[S]>,
    predicted: Option<&[S]>,
) -> Result<LabelCounts, ScoreError> {
    let ground_truth = ground_truth
        .ok_or_else(|| ScoreError::InvalidInput("ground truth labels are missing".to_string()))?;
    let predicted = predicted
        .ok_or_else(|| ScoreError::InvalidInput("predicted labels are missing".to_string()))?;
    Ok(count_labels(ground_truth, predicted))
}

pub fn score_labels<S: AsRef<str>>(ground_truth: &[S], predicted: &[S]) -> ScoreResult {
    count_labels(ground_truth, predicted).to_score()
}

pub fn count_labels<S: AsRef<str>>(ground_truth: &[S], predicted: &[S]) -> LabelCounts {
    debug!(
        ground_truth = ground_truth.len(),
        predicted = predicted.len(),
        "scoring label sets"
    );

    let mut counts = LabelCounts::default();
    for truth in ground_truth {
        if contains(predicted, truth.as_ref()) {
            counts.tp += 1;
        } else {
            counts.fn_ += 1;
        }
    }
    for prediction in predicted {
        if !contains(ground_truth, prediction.as_ref()) {
            counts.fp += 1;
        }
    }
    counts
}

fn contains<S: AsRef<str>>(labels: &[S], needle: &str) -> bool {
    labels.iter().any(|l| l.as_ref() == needle)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/label_set.rs"]
mod tests;
