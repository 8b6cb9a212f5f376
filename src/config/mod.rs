use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::lookup::LookupEntry;
use crate::mapping::ClassificationConfig;

/// Optional overrides for the built-in translation tables.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TranslatorConfig {
    /// Appended after the built-in suffix table
    #[serde(default)]
    pub suffixes: Vec<LookupEntry>,
    /// Appended after the built-in direction table
    #[serde(default)]
    pub directions: Vec<LookupEntry>,
    /// Replaces the built-in highway classification
    #[serde(default)]
    pub highway: Option<ClassificationConfig>,
}

impl TranslatorConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .with_context(|| format!("Config: Failed to read {:?}", path))?;
        settings
            .try_deserialize()
            .with_context(|| format!("Config: Invalid translator config in {:?}", path))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuntimeConfig {
    pub batch_size: usize,
    pub fail_on_diagnostics: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            batch_size: 4096,
            fail_on_diagnostics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_yaml(
            r#"
suffixes:
  - { abbr: Cswy, full: Causeway }
directions:
  - abbr: "N"
    full: New
highway:
  rules:
    - match: INT
      tags: { highway: motorway }
    - match: Gravel
      tags:
        highway: unclassified
        surface: gravel
  default: unclassified
"#,
        );

        let config = TranslatorConfig::load(file.path()).unwrap();
        assert_eq!(config.suffixes.len(), 1);
        assert_eq!(config.suffixes[0].full, "Causeway");
        assert_eq!(config.directions[0].abbr, "N");

        let highway = config.highway.unwrap();
        assert_eq!(highway.rules.len(), 2);
        assert_eq!(highway.rules[1].code, "Gravel");
        assert_eq!(highway.rules[1].tags["surface"], "gravel");
        assert_eq!(highway.default, "unclassified");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let file = write_yaml("suffixes: []\n");
        let config = TranslatorConfig::load(file.path()).unwrap();
        assert!(config.directions.is_empty());
        assert!(config.highway.is_none());
    }

    #[test]
    fn highway_default_falls_back_to_residential() {
        let file = write_yaml(
            r#"
highway:
  rules:
    - match: MAJA
      tags: { highway: primary }
"#,
        );
        let config = TranslatorConfig::load(file.path()).unwrap();
        assert_eq!(config.highway.unwrap().default, "residential");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TranslatorConfig::load(Path::new("/nonexistent/roadtag.yaml")).unwrap_err();
        assert!(err.to_string().starts_with("Config:"));
    }
}
