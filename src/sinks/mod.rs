use anyhow::Result;
use geojson::feature::Id;
use geojson::{Feature, JsonObject};
use serde_json::Value;

use crate::translate::Tags;

pub mod geojson_collection;
pub mod geojsonl;

pub use self::geojson_collection::GeoJsonSink;
pub use self::geojsonl::GeoJsonlSink;

/// A translated road segment ready to be written.
#[derive(Clone, Debug)]
pub struct TaggedFeature {
    pub id: Option<Id>,
    pub geometry: Option<geojson::Geometry>,
    pub tags: Tags,
}

impl TaggedFeature {
    /// Convert to a GeoJSON feature with the tags as string properties.
    pub fn into_feature(self) -> Feature {
        let properties: JsonObject = self
            .tags
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        Feature {
            bbox: None,
            geometry: self.geometry,
            id: self.id,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

pub trait DataSink: Send {
    fn add_feature(&mut self, feature: TaggedFeature) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}
