use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::input::{InputError, open_maybe_gz};
use crate::metrics::{BatchEvaluation, evaluate_batch};
use crate::model::LabelSequence;
use crate::providers::GenreField;

/// One movie to score. Label lists are optional so that a record missing one
/// side is reported by the scorer instead of failing deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub title: String,
    pub ground_truth: Option<LabelSequence>,
    pub predicted: Option<LabelSequence>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    ground_truth: Option<GenreField>,
    #[serde(default)]
    predicted: Option<GenreField>,
}

impl RawRecord {
    fn into_record(self, idx: usize) -> BatchRecord {
        BatchRecord {
            title: self.title.unwrap_or_else(|| format!("item_{idx}")),
            ground_truth: self.ground_truth.map(GenreField::into_labels),
            predicted: self.predicted.map(GenreField::into_labels),
        }
    }
}

pub fn load_batch(path: &Path) -> Result<Vec<BatchRecord>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let records = parse_batch(&text)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads and scores a batch file. A record missing a label list surfaces as
/// [`InputError::Score`].
pub fn evaluate_batch_file(path: &Path) -> Result<BatchEvaluation, InputError> {
    let records = load_batch(path)?;
    Ok(evaluate_batch(&records)?)
}

/// Accepts a JSON array of records or JSON Lines.
pub fn parse_batch(text: &str) -> Result<Vec<BatchRecord>, InputError> {
    let trimmed = text.trim_start();
    let raw: Vec<RawRecord> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        let mut out = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|e| {
                InputError::Parse(format!("batch line {}: {}", line_no + 1, e))
            })?;
            out.push(record);
        }
        out
    };

    if raw.is_empty() {
        return Err(InputError::Parse("batch file has no records".to_string()));
    }

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(idx, r)| r.into_record(idx))
        .collect::<Vec<_>>();
    for (idx, record) in records.iter().enumerate() {
        if record.ground_truth.is_none() || record.predicted.is_none() {
            warn!(
                "record {} ({}) is missing a label list; scoring will reject it",
                idx, record.title
            );
        }
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/batch.rs"]
mod tests;
