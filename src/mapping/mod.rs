//! Highway classification rules.
//!
//! A classification maps a `STATEHWYCL` code to a set of OSM tags with
//! first-match-wins rule evaluation and a default highway value.

mod rules;

pub use rules::{
    ClassRule, ClassRuleConfig, Classification, ClassificationConfig, HighwayClasses,
    evaluate_class,
};
