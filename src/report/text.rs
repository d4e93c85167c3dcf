use crate::metrics::BatchSummary;
use crate::report::format_f64_6;

pub fn render_report_text(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("Genre Prediction Report\n");
    out.push_str("=======================\n\n");

    out.push_str(&format!("Items scored: {}\n", summary.n_items));
    out.push_str(&format!(
        "Perfect matches: {}\n\n",
        format_f64_6(summary.perfect_fraction)
    ));

    out.push_str("1. Per-item precision\n");
    out.push_str(&format!(
        "mean: {}  median: {}  p10: {}  p90: {}\n\n",
        format_f64_6(summary.precision.mean),
        format_f64_6(summary.precision.median),
        format_f64_6(summary.precision.p10),
        format_f64_6(summary.precision.p90)
    ));

    out.push_str("2. Per-item recall\n");
    out.push_str(&format!(
        "mean: {}  median: {}  p10: {}  p90: {}\n\n",
        format_f64_6(summary.recall.mean),
        format_f64_6(summary.recall.median),
        format_f64_6(summary.recall.p10),
        format_f64_6(summary.recall.p90)
    ));

    out.push_str("3. Pooled counts\n");
    out.push_str(&format!(
        "TP: {}  FN: {}  FP: {}\n",
        summary.totals.tp, summary.totals.fn_, summary.totals.fp
    ));
    out.push_str(&format!(
        "Micro precision: {}\nMicro recall: {}\n",
        format_f64_6(summary.micro.precision),
        format_f64_6(summary.micro.recall)
    ));
    out.push_str(&format!("{}\n", balance_statement(summary)));

    out
}

fn balance_statement(summary: &BatchSummary) -> &'static str {
    let p = summary.micro.precision;
    let r = summary.micro.recall;
    if summary.n_items == 0 {
        "No items were scored."
    } else if (p - r).abs() < 0.05 {
        "Precision and recall are balanced."
    } else if p > r {
        "Predictions are conservative: genres are missed more often than invented."
    } else {
        "Predictions over-label: extra genres outnumber missed ones."
    }
}
