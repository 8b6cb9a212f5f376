//! Road centerline record to OSM tag translation.

use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::config::TranslatorConfig;
use crate::diagnostic::Diagnostic;
use crate::lookup::LookupTable;
use crate::mapping::{Classification, HighwayClasses};
use crate::names::{NameExpander, collapse_whitespace, fix_numbered_capitalization, title_case};

/// Source field names.
pub mod fields {
    pub const PREDIR: &str = "PREDIR";
    pub const STNAME: &str = "STNAME";
    pub const TYPE: &str = "TYPE";
    pub const FULLNAME: &str = "FULLNAME";
    pub const LANECOUNT: &str = "LANECOUNT";
    pub const STATEHWYCL: &str = "STATEHWYCL";
}

pub type Record = HashMap<String, String>;
pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub tags: Tags,
    pub diagnostics: Vec<Diagnostic>,
}

static DEFAULT_TRANSLATOR: LazyLock<Translator> = LazyLock::new(Translator::default);

/// Translate a record with the built-in tables.
pub fn build_tags(record: &Record) -> Option<Translation> {
    DEFAULT_TRANSLATOR.translate(record)
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    names: NameExpander,
    classes: HighwayClasses,
}

impl Translator {
    pub fn new(names: NameExpander, classes: HighwayClasses) -> Self {
        Self { names, classes }
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let mut suffixes = LookupTable::suffixes();
        suffixes.extend_from(&config.suffixes);
        suffixes.add_identities();

        let mut directions = LookupTable::directions();
        directions.extend_from(&config.directions);

        let classes = match &config.highway {
            Some(highway) => HighwayClasses::compile(highway)?,
            None => HighwayClasses::default(),
        };

        tracing::info!(
            "Translator: {} suffixes, {} directions, {} highway rules (default {})",
            suffixes.len(),
            directions.len(),
            classes.rules.len(),
            classes.default
        );

        Ok(Self::new(NameExpander::new(suffixes, directions), classes))
    }

    /// Translate one record. Returns `None` for an empty record.
    pub fn translate(&self, record: &Record) -> Option<Translation> {
        if record.is_empty() {
            return None;
        }

        let mut diagnostics = Vec::new();
        let mut tags = Tags::new();

        let name = self.build_name(record, &mut diagnostics);
        if !name.is_empty() {
            tags.insert("name".to_string(), name);
        }

        if let Some(lanes) = record.get(fields::LANECOUNT) {
            let lanes = lanes.trim();
            if lanes != "0" {
                tags.insert("lanes".to_string(), lanes.to_string());
            }
        }

        let code = record.get(fields::STATEHWYCL).map(String::as_str);
        match self.classes.classify(code) {
            Classification::Matched(class_tags) => {
                for (key, value) in class_tags {
                    tags.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
            Classification::Unknown => {
                let code = code.unwrap_or_default().trim().to_string();
                diagnostics.push(Diagnostic::UnknownHighwayClass(code));
            }
            Classification::Default => {}
        }
        tags.entry("highway".to_string())
            .or_insert_with(|| self.classes.default.clone());

        Some(Translation { tags, diagnostics })
    }

    fn build_name(&self, record: &Record, diagnostics: &mut Vec<Diagnostic>) -> String {
        let mut name = String::new();

        if let Some(predir) = record.get(fields::PREDIR) {
            name.push_str(&self.names.expand_direction(predir));
        }
        if let Some(stname) = record.get(fields::STNAME) {
            name.push(' ');
            name.push_str(title_case(stname).trim());
        }
        if let Some(road_type) = record.get(fields::TYPE) {
            name.push(' ');
            name.push_str(&self.names.expand_word(&title_case(road_type), true, diagnostics));
        }

        let mut name = name.trim().to_string();
        if name.is_empty()
            && let Some(full) = record.get(fields::FULLNAME)
        {
            name = self.names.expand_full_name(&title_case(full), diagnostics);
        }

        let name = fix_numbered_capitalization(name.trim());
        let name = collapse_whitespace(&name);
        self.names.collapse_double_suffix(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn structured_fields_build_name() {
        let result = build_tags(&record(&[
            ("PREDIR", "N"),
            ("STNAME", "oak"),
            ("TYPE", "St"),
            ("LANECOUNT", "2"),
            ("STATEHWYCL", "COLL"),
        ]))
        .unwrap();

        assert_eq!(
            result.tags,
            tags(&[
                ("name", "North Oak Street"),
                ("lanes", "2"),
                ("highway", "tertiary")
            ])
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn full_name_fallback() {
        let result = build_tags(&record(&[("FULLNAME", "22nd St"), ("STATEHWYCL", "")])).unwrap();
        assert_eq!(
            result.tags,
            tags(&[("name", "22nd Street"), ("highway", "residential")])
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn full_name_ignored_when_structured_name_exists() {
        let result = build_tags(&record(&[
            ("STNAME", "MAIN"),
            ("TYPE", "ST"),
            ("FULLNAME", "Something Else Rd"),
        ]))
        .unwrap();
        assert_eq!(result.tags["name"], "Main Street");
    }

    #[test]
    fn blank_structured_fields_fall_back_to_full_name() {
        let result = build_tags(&record(&[
            ("PREDIR", " "),
            ("STNAME", ""),
            ("FULLNAME", "e  main st"),
        ]))
        .unwrap();
        assert_eq!(result.tags["name"], "East Main Street");
    }

    #[test]
    fn zero_lanes_are_omitted() {
        let result = build_tags(&record(&[("LANECOUNT", "0")])).unwrap();
        assert_eq!(result.tags, tags(&[("highway", "residential")]));

        let result = build_tags(&record(&[("LANECOUNT", " 4 ")])).unwrap();
        assert_eq!(result.tags["lanes"], "4");
    }

    #[test]
    fn empty_record_yields_nothing() {
        assert_eq!(build_tags(&Record::new()), None);
    }

    #[test]
    fn unrecognized_fields_still_get_highway() {
        let result = build_tags(&record(&[("OBJECTID", "17")])).unwrap();
        assert_eq!(result.tags, tags(&[("highway", "residential")]));
    }

    #[test]
    fn highway_codes() {
        let result = build_tags(&record(&[("STATEHWYCL", "Highway Ramp")])).unwrap();
        assert_eq!(result.tags["highway"], "motorway_link");

        let result = build_tags(&record(&[("STATEHWYCL", "Gravel")])).unwrap();
        assert_eq!(
            result.tags,
            tags(&[("highway", "residential"), ("surface", "gravel")])
        );

        let result = build_tags(&record(&[("STATEHWYCL", " INT ")])).unwrap();
        assert_eq!(result.tags["highway"], "motorway");
    }

    #[test]
    fn every_county_code_translates_without_diagnostics() {
        let cases: &[(&str, &[(&str, &str)])] = &[
            ("INT", &[("highway", "motorway")]),
            ("MAJA", &[("highway", "primary")]),
            ("MINA", &[("highway", "secondary")]),
            ("COLL", &[("highway", "tertiary")]),
            ("Local", &[("highway", "residential")]),
            ("Lane", &[("highway", "service")]),
            ("Gravel", &[("highway", "residential"), ("surface", "gravel")]),
            ("Highway Ramp", &[("highway", "motorway_link")]),
        ];

        for (code, expected) in cases {
            let result = build_tags(&record(&[("STATEHWYCL", *code)])).unwrap();
            assert_eq!(result.tags, tags(expected), "code {code}");
            assert!(result.diagnostics.is_empty(), "code {code}: {:?}", result.diagnostics);
        }
    }

    #[test]
    fn unknown_highway_code_reports_and_defaults() {
        let result = build_tags(&record(&[("STATEHWYCL", "XYZ")])).unwrap();
        assert_eq!(result.tags, tags(&[("highway", "residential")]));
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::UnknownHighwayClass("XYZ".to_string())]
        );
    }

    #[test]
    fn unknown_type_reports_but_keeps_word() {
        let result = build_tags(&record(&[("STNAME", "harbor"), ("TYPE", "CSWY")])).unwrap();
        assert_eq!(result.tags["name"], "Harbor Cswy");
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::UnknownSuffix("Cswy".to_string())]
        );
    }

    #[test]
    fn numbered_streets_are_lowercased() {
        let result = build_tags(&record(&[("STNAME", "22ND"), ("TYPE", "AVE")])).unwrap();
        assert_eq!(result.tags["name"], "22nd Avenue");
    }

    #[test]
    fn repeated_type_collapses() {
        let result = build_tags(&record(&[("STNAME", "oak st"), ("TYPE", "street")])).unwrap();
        assert_eq!(result.tags["name"], "Oak Street");
    }

    #[test]
    fn old_prefix_expands() {
        let result = build_tags(&record(&[
            ("PREDIR", "O"),
            ("STNAME", "CANNONS CAMPGROUND"),
            ("TYPE", "RD"),
        ]))
        .unwrap();
        assert_eq!(result.tags["name"], "Old Cannons Campground Road");
    }

    #[test]
    fn config_extends_tables_and_replaces_classes() {
        let config = TranslatorConfig {
            suffixes: vec![crate::lookup::LookupEntry {
                abbr: "Cswy".into(),
                full: "Causeway".into(),
            }],
            directions: Vec::new(),
            highway: Some(crate::mapping::ClassificationConfig {
                rules: vec![crate::mapping::ClassRuleConfig {
                    code: "INT".into(),
                    tags: tags(&[("highway", "trunk")]),
                }],
                default: "unclassified".into(),
            }),
        };
        let translator = Translator::from_config(&config).unwrap();

        let result = translator
            .translate(&record(&[
                ("STNAME", "harbor"),
                ("TYPE", "cswy"),
                ("STATEHWYCL", "INT"),
            ]))
            .unwrap();
        assert_eq!(
            result.tags,
            tags(&[("name", "Harbor Causeway"), ("highway", "trunk")])
        );
        assert!(result.diagnostics.is_empty());

        let result = translator
            .translate(&record(&[("STATEHWYCL", "COLL")]))
            .unwrap();
        assert_eq!(result.tags["highway"], "unclassified");
        assert_eq!(result.diagnostics.len(), 1);
    }
}
