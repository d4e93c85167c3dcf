use serde::Serialize;

use crate::metrics::BatchSummary;
use crate::report::TOOL_NAME;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    summary: &'a BatchSummary,
}

pub fn render_summary_json(summary: &BatchSummary) -> std::io::Result<String> {
    let doc = SummaryJson {
        tool: TOOL_NAME,
        version: env!("CARGO_PKG_VERSION"),
        summary,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
