//! Result cards
//!
//! One card per result, fields shown verbatim in the order date, dimension,
//! indicator, value.

use std::fmt;

use crate::client::IndicatorResult;

/// How results are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Boxed text cards
    #[default]
    Cards,
    /// The decoded result list as JSON (normalized, see [`render_results`])
    Json,
}

/// Text card for a single result
pub struct ResultCard<'a> {
    result: &'a IndicatorResult,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a IndicatorResult) -> Self {
        Self { result }
    }

    /// Card body lines
    pub fn lines(&self) -> [String; 4] {
        [
            self.result.date.clone(),
            self.result.dimension.clone(),
            self.result.indicator.clone(),
            self.result.value.to_string(),
        ]
    }
}

impl fmt::Display for ResultCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = format!("+{}+", "-".repeat(width + 2));

        writeln!(f, "{}", border)?;
        for line in &lines {
            writeln!(f, "| {:<width$} |", line, width = width)?;
        }
        write!(f, "{}", border)
    }
}

/// Render the result list in the requested format
///
/// The JSON view re-serializes the decoded results rather than echoing the
/// response body: every `value` is written as a float (`1000` becomes
/// `1000.0`) and numeric dimension ids are written as strings.
pub fn render_results(
    results: &[IndicatorResult],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results),
        OutputFormat::Cards => {
            let mut out = String::from("Results:\n");
            if results.is_empty() {
                out.push_str("(none)\n");
            }
            for result in results {
                out.push_str(&ResultCard::new(result).to_string());
                out.push('\n');
            }
            Ok(out)
        }
    }
}
