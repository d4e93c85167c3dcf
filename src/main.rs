use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use genre_eval::input::api_key::resolve_api_key;
use genre_eval::input::batch::evaluate_batch_file;
use genre_eval::metrics::count_labels;
use genre_eval::model::LabelSequence;
use genre_eval::report::{format_f64_6, write_reports};

#[derive(Debug, Parser)]
#[command(name = "genre-eval")]
#[command(version, about = "Precision/recall scoring for predicted movie genres")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one pair of comma-separated label lists
    Score {
        #[arg(long)]
        truth: String,
        #[arg(long)]
        predicted: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a JSON / JSON Lines batch file and write reports
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Check whether a TMDB API key can be resolved
    ApiKey {
        #[arg(long, default_value = "./")]
        folder: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    genre_eval::logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Score {
            truth,
            predicted,
            json,
        } => {
            println!("{}", run_score(&truth, &predicted, json)?);
            Ok(())
        }
        Command::Batch { input, out } => run_batch(&input, &out),
        Command::ApiKey { folder } => {
            println!("{}", run_api_key(&folder)?);
            Ok(())
        }
    }
}

fn run_api_key(folder: &Path) -> Result<String, String> {
    let key = resolve_api_key(folder).map_err(|e| e.to_string())?;
    if key.is_empty() {
        Ok("no TMDB API key found".to_string())
    } else {
        Ok(format!("TMDB API key found ({} characters)", key.len()))
    }
}

fn run_score(truth: &str, predicted: &str, json: bool) -> Result<String, String> {
    let truth = LabelSequence::parse_csv(truth);
    let predicted = LabelSequence::parse_csv(predicted);
    let counts = count_labels(truth.as_slice(), predicted.as_slice());
    let score = counts.to_score();
    if json {
        let doc = serde_json::json!({
            "precision": score.precision,
            "recall": score.recall,
            "counts": counts,
        });
        serde_json::to_string(&doc).map_err(|e| e.to_string())
    } else {
        Ok(format!(
            "precision\t{}\nrecall\t{}",
            format_f64_6(score.precision),
            format_f64_6(score.recall)
        ))
    }
}

fn run_batch(input: &Path, out: &Path) -> Result<(), String> {
    let eval = evaluate_batch_file(input).map_err(|e| e.to_string())?;
    write_reports(&eval, out).map_err(|e| e.to_string())?;
    info!("reports written to {}", out.display());
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
