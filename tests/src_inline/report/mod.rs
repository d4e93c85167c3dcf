use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::batch::parse_batch;
use crate::metrics::evaluate_batch;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("genre_eval_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_quantiles() {
    let v = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(p10(&v), 2.0);
    assert_eq!(mean(&v), 3.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_write_reports() {
    let records = parse_batch(
        "{\"title\":\"Heat\",\"ground_truth\":[\"action\",\"drama\"],\"predicted\":[\"drama\",\"comedy\"]}\n\
         {\"title\":\"Tab\\tTitle\",\"ground_truth\":[\"a\",\"a\"],\"predicted\":[\"a\"]}\n",
    )
    .unwrap();
    let eval = evaluate_batch(&records).unwrap();
    let out = make_temp_dir().join("nested");
    write_reports(&eval, &out).unwrap();

    let tsv = fs::read_to_string(out.join("items.tsv")).unwrap();
    let lines = tsv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "title\tn_truth\tn_predicted\ttp\tfn\tfp\tprecision\trecall"
    );
    assert_eq!(lines[1], "Heat\t2\t2\t1\t1\t1\t0.500000\t0.500000");
    assert_eq!(lines[2], "Tab Title\t2\t1\t2\t0\t0\t1.000000\t1.000000");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["tool"], "genre-eval");
    assert_eq!(json["n_items"], 2);
    assert_eq!(json["totals"]["tp"], 3);
    assert_eq!(json["totals"]["fn"], 1);
    assert_eq!(json["perfect_fraction"], 0.5);

    let report = fs::read_to_string(out.join("report.txt")).unwrap();
    assert!(report.starts_with("Genre Prediction Report"));
    assert!(report.contains("Items scored: 2"));
}
