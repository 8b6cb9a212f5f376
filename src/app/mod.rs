use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::RuntimeConfig;
use crate::diagnostic::Diagnostic;
use crate::sinks::{DataSink, GeoJsonSink, GeoJsonlSink, TaggedFeature};
use crate::source::{SourceRecord, open_records};
use crate::translate::{Translation, Translator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input road centerlines (.geojson, .geojsonl, or - for GeoJSONL on stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (.geojson, .geojsonl, or - for stdout)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Translator configuration file (YAML)
    #[arg(short, long, env = "ROADTAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of threads (default: all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Records translated per parallel batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (auto-detected if omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit with an error if any record raised a diagnostic
    #[arg(long)]
    pub fail_on_diagnostics: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum OutputFormat {
    #[value(name = "geojson")]
    GeoJson,
    #[value(name = "geojsonl")]
    GeoJsonl,
}

impl Cli {
    pub fn runtime(&self) -> RuntimeConfig {
        let defaults = RuntimeConfig::default();
        RuntimeConfig {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size).max(1),
            fail_on_diagnostics: self.fail_on_diagnostics,
        }
    }

    /// Explicit `--format`, else from the output extension; stdout means GeoJSONL.
    pub fn output_format(&self) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        if self.output == Path::new("-") {
            return Ok(OutputFormat::GeoJsonl);
        }
        self.output
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "geojson" => Some(OutputFormat::GeoJson),
                "geojsonl" | "jsonl" | "json" => Some(OutputFormat::GeoJsonl),
                _ => None,
            })
            .context("CLI: Could not detect output format from extension; use --format")
    }
}

pub fn output_format_label(format: &OutputFormat) -> &'static str {
    match format {
        OutputFormat::GeoJson => "geojson",
        OutputFormat::GeoJsonl => "geojsonl",
    }
}

pub fn init_sink(format: &OutputFormat, output: &Path) -> Result<Box<dyn DataSink + Send>> {
    match format {
        OutputFormat::GeoJson => {
            if output == Path::new("-") {
                anyhow::bail!(
                    "CLI: GeoJSON output to stdout is not supported; use geojsonl instead"
                );
            }
            tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
            Ok(Box::new(
                GeoJsonSink::new(output).context("Sink: Failed to create output file")?,
            ))
        }
        OutputFormat::GeoJsonl => {
            if output == Path::new("-") {
                tracing::info!("Sink: {} -> stdout", output_format_label(format));
                Ok(Box::new(GeoJsonlSink::stdout()?))
            } else {
                tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
                Ok(Box::new(
                    GeoJsonlSink::new(output).context("Sink: Failed to create output file")?,
                ))
            }
        }
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub read: u64,
    pub written: u64,
    pub skipped: u64,
    pub diagnostics: u64,
    /// Occurrences per distinct diagnostic message
    pub by_message: BTreeMap<String, u64>,
}

impl RunSummary {
    fn record(&mut self, index: usize, translation: &Option<Translation>) {
        self.read += 1;
        let Some(translation) = translation else {
            self.skipped += 1;
            tracing::debug!("Record {}: no fields, skipped", index);
            return;
        };

        self.written += 1;
        for diagnostic in &translation.diagnostics {
            self.note(index, diagnostic);
        }
    }

    fn note(&mut self, index: usize, diagnostic: &Diagnostic) {
        tracing::warn!("Record {}: {}", index, diagnostic);
        self.diagnostics += 1;
        *self.by_message.entry(diagnostic.to_string()).or_default() += 1;
    }
}

/// Translate records in parallel batches and write them in input order.
pub fn process_records<I>(
    records: I,
    translator: &Translator,
    sink: &mut dyn DataSink,
    runtime: &RuntimeConfig,
) -> Result<RunSummary>
where
    I: Iterator<Item = Result<SourceRecord>>,
{
    let mut summary = RunSummary::default();
    let mut batch = Vec::with_capacity(runtime.batch_size);

    for record in records {
        batch.push(record?);
        if batch.len() >= runtime.batch_size {
            flush_batch(&mut batch, translator, sink, &mut summary)?;
        }
    }
    flush_batch(&mut batch, translator, sink, &mut summary)?;

    Ok(summary)
}

fn flush_batch(
    batch: &mut Vec<SourceRecord>,
    translator: &Translator,
    sink: &mut dyn DataSink,
    summary: &mut RunSummary,
) -> Result<()> {
    if batch.is_empty() {
        return Ok(());
    }

    let translations: Vec<Option<Translation>> = batch
        .par_iter()
        .map(|source| translator.translate(&source.record))
        .collect();

    for (source, translation) in batch.drain(..).zip(translations) {
        summary.record(source.index, &translation);
        if let Some(translation) = translation {
            sink.add_feature(TaggedFeature {
                id: source.id,
                geometry: source.geometry,
                tags: translation.tags,
            })
            .with_context(|| format!("Sink: Failed to write record {}", source.index))?;
        }
    }

    Ok(())
}

/// Run a full conversion from the CLI arguments.
pub fn run(cli: &Cli, translator: &Translator) -> Result<RunSummary> {
    let runtime = cli.runtime();
    let format = cli.output_format()?;

    let records = open_records(&cli.input)?;
    let mut sink = init_sink(&format, &cli.output)?;

    let summary = process_records(records, translator, sink.as_mut(), &runtime)?;
    sink.finish().context("Sink: Failed to finalize output")?;

    Ok(summary)
}
