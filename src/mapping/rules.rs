//! Classification rule definitions and evaluation.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HIGHWAY: &str = "residential";

/// Built-in county codes, in evaluation order.
const BUILTIN_RULES: &[(&str, &[(&str, &str)])] = &[
    ("INT", &[("highway", "motorway")]),
    ("MAJA", &[("highway", "primary")]),
    ("MINA", &[("highway", "secondary")]),
    ("COLL", &[("highway", "tertiary")]),
    ("Local", &[("highway", "residential")]),
    ("Lane", &[("highway", "service")]),
    ("Gravel", &[("highway", "residential"), ("surface", "gravel")]),
    ("Highway Ramp", &[("highway", "motorway_link")]),
];

/// Ordered rules plus the highway value used when nothing matches.
#[derive(Debug, Clone)]
pub struct HighwayClasses {
    pub rules: Vec<ClassRule>,
    pub default: String,
}

/// A compiled classification rule.
#[derive(Debug, Clone)]
pub struct ClassRule {
    pub code: String,
    pub tags: BTreeMap<String, String>,
}

/// Raw rule from YAML (before compilation).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassRuleConfig {
    /// The `STATEHWYCL` code, compared after trimming
    #[serde(rename = "match")]
    pub code: String,
    /// Tags to set when this rule matches
    pub tags: BTreeMap<String, String>,
}

/// Raw classification from YAML (before compilation).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassificationConfig {
    pub rules: Vec<ClassRuleConfig>,
    #[serde(default = "default_highway")]
    pub default: String,
}

fn default_highway() -> String {
    DEFAULT_HIGHWAY.to_string()
}

/// Outcome of classifying one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    Matched(&'a BTreeMap<String, String>),
    /// Empty or absent code.
    Default,
    /// A non-empty code that no rule covers.
    Unknown,
}

impl Default for HighwayClasses {
    fn default() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(code, tags)| ClassRule {
                code: code.to_string(),
                tags: tags
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
            .collect();

        Self {
            rules,
            default: default_highway(),
        }
    }
}

impl HighwayClasses {
    /// Compile a classification from config.
    pub fn compile(config: &ClassificationConfig) -> Result<Self> {
        let mut rules: Vec<ClassRule> = Vec::with_capacity(config.rules.len());

        for (i, rule) in config.rules.iter().enumerate() {
            let code = rule.code.trim();
            if code.is_empty() {
                bail!("Config: highway rule {} has an empty match code", i + 1);
            }
            if rule.tags.is_empty() {
                bail!("Config: highway rule {} ('{}') sets no tags", i + 1, code);
            }
            if rules.iter().any(|existing| existing.code == code) {
                tracing::warn!(
                    "Config: highway rule {} repeats code '{}' and will never match",
                    i + 1,
                    code
                );
            }

            rules.push(ClassRule {
                code: code.to_string(),
                tags: rule.tags.clone(),
            });
        }

        let default = config.default.trim();
        if default.is_empty() {
            bail!("Config: highway default must not be empty");
        }

        Ok(HighwayClasses {
            rules,
            default: default.to_string(),
        })
    }

    pub fn classify(&self, code: Option<&str>) -> Classification<'_> {
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            return Classification::Default;
        };

        match evaluate_class(self, code) {
            Some(rule) => Classification::Matched(&rule.tags),
            None => Classification::Unknown,
        }
    }
}

/// Evaluate rules against a trimmed code, returning the first matching rule.
pub fn evaluate_class<'a>(classes: &'a HighwayClasses, code: &str) -> Option<&'a ClassRule> {
    classes.rules.iter().find(|rule| rule.code == code)
}
