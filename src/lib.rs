//! Spartanburg County road centerline to OpenStreetMap tag translation.
//!
//! The core is [`translate::build_tags`]: it turns one record of source
//! fields (`PREDIR`, `STNAME`, `TYPE`, `FULLNAME`, `LANECOUNT`,
//! `STATEHWYCL`) into OSM tags (`name`, `lanes`, `highway`, `surface`).
//! Data-quality problems come back as [`diagnostic::Diagnostic`] values next
//! to the tags instead of failing the record.

pub mod app;
pub mod config;
pub mod diagnostic;
pub mod lookup;
pub mod mapping;
pub mod names;
pub mod sinks;
pub mod source;
pub mod translate;

pub use diagnostic::Diagnostic;
pub use translate::{Record, Tags, Translation, Translator, build_tags};
