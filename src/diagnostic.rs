//! Advisory data-quality messages raised while translating a record.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A suffix or road type token missing from the suffix table.
    UnknownSuffix(String),
    /// A `STATEHWYCL` code with no classification rule.
    UnknownHighwayClass(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownSuffix(token) => write!(f, "unknown suffix translation: {token}"),
            Diagnostic::UnknownHighwayClass(code) => write!(f, "unknown highway type: {code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            Diagnostic::UnknownSuffix("Cswy".into()).to_string(),
            "unknown suffix translation: Cswy"
        );
        assert_eq!(
            Diagnostic::UnknownHighwayClass("XYZ".into()).to_string(),
            "unknown highway type: XYZ"
        );
    }
}
