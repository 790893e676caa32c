mod commands;
mod logging;
mod progress;

use anyhow::Context;
use clap::Parser;
use commands::Cli;
use dotenv::dotenv;
use image_report_core::{AuditEngine, ReportRenderer};
use progress::CliReporter;
use std::io::{self, Write};
use std::process;
use tracing::{debug, error};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let config = image_report_core::config::load_configuration()
        .context("Error loading configuration")?;
    debug!("config: {:?}", config);

    let engine = AuditEngine::new(config);
    let result = {
        let reporter = CliReporter::new();
        engine
            .audit(&args.dir, &reporter)
            .with_context(|| format!("Error auditing {}", args.dir.display()))?
    };
    debug!(
        "Scan: {:.2}s, Analysis: {:.2}s",
        result.scan_duration.as_secs_f64(),
        result.analysis_duration.as_secs_f64(),
    );

    let renderer = ReportRenderer::from_config(engine.config());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer
        .render(&result, &mut out)
        .context("Error writing report")?;
    out.flush().context("Error writing report")?;

    Ok(())
}
