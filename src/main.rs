use anyhow::{Context, Result};
use clap::Parser;

use roadtag::app::{Cli, run};
use roadtag::config::TranslatorConfig;
use roadtag::translate::Translator;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("CLI: Failed to initialize thread pool")?;
    }

    let config = match &cli.config {
        Some(path) => TranslatorConfig::load(path)?,
        None => TranslatorConfig::default(),
    };
    let translator = Translator::from_config(&config)?;

    let start = std::time::Instant::now();
    let summary = run(&cli, &translator)?;

    let elapsed = start.elapsed();
    tracing::info!(
        "Done! Translated {} of {} records in {:.2}s ({} skipped, {} diagnostics)",
        summary.written,
        summary.read,
        elapsed.as_secs_f64(),
        summary.skipped,
        summary.diagnostics
    );
    for (message, count) in &summary.by_message {
        tracing::info!("  {} x{}", message, count);
    }

    if cli.runtime().fail_on_diagnostics && summary.diagnostics > 0 {
        anyhow::bail!(
            "Translation raised {} diagnostics ({} distinct)",
            summary.diagnostics,
            summary.by_message.len()
        );
    }

    Ok(())
}
