use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::metrics::BatchEvaluation;

pub mod json;
pub mod text;

pub const TOOL_NAME: &str = "genre-eval";

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

/// Writes `items.tsv`, `summary.json` and `report.txt` into `out_dir`.
pub fn write_reports(eval: &BatchEvaluation, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_items_tsv(eval, &out_dir.join("items.tsv"))?;

    let json = json::render_summary_json(&eval.summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = text::render_report_text(&eval.summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    Ok(())
}

fn write_items_tsv(eval: &BatchEvaluation, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "title",
        "n_truth",
        "n_predicted",
        "tp",
        "fn",
        "fp",
        "precision",
        "recall",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for item in &eval.items {
        let row = [
            sanitize_field(&item.title),
            item.n_truth.to_string(),
            item.n_predicted.to_string(),
            item.counts.tp.to_string(),
            item.counts.fn_.to_string(),
            item.counts.fp.to_string(),
            format_f64_6(item.score.precision),
            format_f64_6(item.score.recall),
        ];
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn sanitize_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
