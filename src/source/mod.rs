//! GeoJSON record source.
//!
//! Reads road segments from a GeoJSON `FeatureCollection` or from GeoJSONL
//! (one feature per line, `-` for stdin). Geometry is carried through as-is.

use anyhow::{Context, Result, bail};
use geojson::feature::Id;
use geojson::{Feature, GeoJson, JsonObject};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::translate::Record;

/// One input feature, reduced to what translation needs.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Zero-based position in the input
    pub index: usize,
    pub id: Option<Id>,
    pub geometry: Option<geojson::Geometry>,
    pub record: Record,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    FeatureCollection,
    Lines,
}

impl InputFormat {
    pub fn detect(path: &Path) -> Self {
        if path == Path::new("-") {
            return InputFormat::Lines;
        }
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("geojsonl") | Some("jsonl") | Some("ndjson") => InputFormat::Lines,
            _ => InputFormat::FeatureCollection,
        }
    }
}

pub type RecordIter = Box<dyn Iterator<Item = Result<SourceRecord>> + Send>;

pub fn open_records(path: &Path) -> Result<RecordIter> {
    let format = InputFormat::detect(path);
    tracing::info!("Input: {:?} ({:?})", path, format);

    let reader: Box<dyn Read + Send> = if path == Path::new("-") {
        Box::new(std::io::stdin())
    } else {
        Box::new(File::open(path).with_context(|| format!("Input: Failed to open {:?}", path))?)
    };
    let reader = BufReader::new(reader);

    match format {
        InputFormat::Lines => Ok(read_lines(reader)),
        InputFormat::FeatureCollection => read_collection(reader),
    }
}

fn read_lines<R: BufRead + Send + 'static>(reader: R) -> RecordIter {
    let iter = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .enumerate()
        .map(|(index, (line_no, line))| {
            let line = line.with_context(|| format!("Input: Failed to read line {}", line_no + 1))?;
            let feature: Feature = serde_json::from_str(&line)
                .with_context(|| format!("Input: Invalid feature on line {}", line_no + 1))?;
            Ok(source_record(index, feature))
        });
    Box::new(iter)
}

fn read_collection<R: Read>(reader: R) -> Result<RecordIter> {
    let geojson: GeoJson =
        serde_json::from_reader(reader).context("Input: Failed to parse GeoJSON document")?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            bail!("Input: Expected a Feature or FeatureCollection, found a bare geometry")
        }
    };

    let iter = features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| Ok(source_record(index, feature)));
    Ok(Box::new(iter))
}

fn source_record(index: usize, feature: Feature) -> SourceRecord {
    let record = feature
        .properties
        .as_ref()
        .map(record_from_properties)
        .unwrap_or_default();

    SourceRecord {
        index,
        id: feature.id,
        geometry: feature.geometry,
        record,
    }
}

/// Coerce feature properties into string fields.
///
/// Strings are kept, numbers and booleans use their JSON text, `null` counts
/// as absent and nested arrays or objects are dropped.
pub fn record_from_properties(properties: &JsonObject) -> Record {
    properties
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => return None,
                Value::Array(_) | Value::Object(_) => {
                    tracing::debug!("Input: Ignoring non-scalar property '{}'", key);
                    return None;
                }
            };
            Some((key.clone(), value))
        })
        .collect()
}
