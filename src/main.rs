//! Indicator Dashboard CLI
//!
//! Terminal front end for the dashboard:
//! - Submit the query form and print one card per result
//! - Show the indicator checkboxes
//! - Look up dimensions
//! - Generate a default config file

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use indicator_dashboard::config::{generate_default_config, Config};
use indicator_dashboard::dashboard::{
    render_results, IndicatorSelection, OutputFormat, PeriodField, QueryForm, SubmitError,
};
use indicator_dashboard::logging::init_logging;
use indicator_dashboard::{Dimension, IndicatorsApi, IndicatorsClient};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query indicators by date range and show one card per result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Indicators API URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Cards, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit the query form
    Query {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<NaiveDate>,
        /// Click an indicator's checkbox; every indicator starts checked
        #[arg(short, long)]
        toggle: Vec<String>,
        /// Only report these dimension ids
        #[arg(short, long)]
        dimension: Vec<i64>,
    },

    /// Show the indicator checkboxes
    Indicators {
        /// Indicators to toggle before printing
        #[arg(short, long)]
        toggle: Vec<String>,
    },

    /// List all dimensions
    Dimensions,

    /// Show a single dimension
    Dimension {
        /// Dimension id
        id: i64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    init_logging(&config.logging)?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    match cli.command {
        Commands::Query {
            start,
            end,
            toggle,
            dimension,
        } => {
            let client = Arc::new(IndicatorsClient::new(config.api.clone())?);
            let mut form = QueryForm::new(
                Arc::clone(&client) as Arc<dyn IndicatorsApi>,
                config.dashboard.indicators.clone(),
            );

            for name in &toggle {
                form.toggle_indicator(name);
            }
            form.set_period_field(PeriodField::StartDate, format_date(start));
            form.set_period_field(PeriodField::EndDate, format_date(end));

            let outcome = if dimension.is_empty() {
                form.submit().await.map(|results| results.to_vec())
            } else {
                match form.validate() {
                    Ok(query) => client
                        .query(&query.dimensions(dimension))
                        .await
                        .map_err(SubmitError::from),
                    Err(e) => Err(SubmitError::from(e)),
                }
            };

            match outcome {
                Ok(results) => print!("{}", render_results(&results, cli.format)?),
                Err(SubmitError::Invalid(e)) => {
                    eprintln!("{} ({})", e.notice(), e);
                    std::process::exit(2);
                }
                Err(SubmitError::Fetch(e)) => {
                    eprintln!("Failed to fetch indicators: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Indicators { toggle } => {
            let mut selection = IndicatorSelection::all(config.dashboard.indicators.clone());
            for name in &toggle {
                selection.toggle(name);
            }

            for (name, checked) in selection.checkboxes() {
                println!("[{}] {}", if checked { "x" } else { " " }, name);
            }
        }

        Commands::Dimensions => {
            let client = IndicatorsClient::new(config.api.clone())?;
            let dimensions = client
                .fetch_dimensions()
                .await
                .context("Failed to fetch dimensions")?;
            print_dimensions(&dimensions, cli.format)?;
        }

        Commands::Dimension { id } => {
            let client = IndicatorsClient::new(config.api.clone())?;
            let dimensions = client
                .fetch_dimension_by_id(id)
                .await
                .with_context(|| format!("Failed to fetch dimension {}", id))?;
            print_dimensions(&dimensions, cli.format)?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Date input as the form holds it; unset stays empty
fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn print_dimensions(dimensions: &[Dimension], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(dimensions)?),
        OutputFormat::Cards => {
            println!("{:<6} {:<12} {}", "ID", "COUNTRY", "BUSINESS UNIT");
            for dim in dimensions {
                println!("{:<6} {:<12} {}", dim.id, dim.country, dim.business_unit);
            }
        }
    }
    Ok(())
}
