//! malthus — run a Malthusian population model and print a step table
//! followed by the final-step report.
//!
//! Usage:
//!
//! ```text
//! malthus [config.json]
//! ```
//!
//! Without an argument the built-in defaults are used (population 100, birth
//! and death rates 0.1, 5 steps).  Missing keys in the file also fall back to
//! the defaults.  Set `RUST_LOG=debug` (or `trace`) for per-step events.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use pd_core::{MalthusConfig, Step};
use pd_model::{ModelBuilder, ModelObserver, RangeSummary, ReportWriter, StepOutcome};

// ── Observer: step table + report ─────────────────────────────────────────────

/// Prints one row per step, then forwards the range summary to the report
/// writer.
struct TablePrinter<W: std::io::Write> {
    report: ReportWriter<W>,
}

impl<W: std::io::Write> ModelObserver for TablePrinter<W> {
    fn on_step(&mut self, step: Step, outcome: &StepOutcome) {
        println!(
            "{:<6} {:>14.4} {:>14.4} {:>14.4}",
            step.0, outcome.births, outcome.deaths, outcome.population,
        );
    }

    fn on_range_end(&mut self, summary: &RangeSummary) {
        self.report.on_range_end(summary);
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<MalthusConfig> {
    let Some(path) = path else {
        return Ok(MalthusConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    info!(
        initial_population = config.initial_population,
        birth_rate         = config.birth_rate,
        death_rate         = config.death_rate,
        steps              = config.steps,
        "loaded config"
    );

    let mut model = ModelBuilder::from_config(&config)?.build_ready()?;

    println!("{:<6} {:>14} {:>14} {:>14}", "Step", "Births", "Deaths", "Population");
    println!("{}", "-".repeat(51));

    let mut printer = TablePrinter { report: ReportWriter::stdout() };
    let summary = model.describe_to(config.steps, &mut printer)?;
    if let Some(e) = printer.report.take_error() {
        return Err(e).context("writing report");
    }

    info!(final_population = summary.population, "done");
    Ok(())
}
