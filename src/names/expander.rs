use crate::diagnostic::Diagnostic;
use crate::lookup::LookupTable;

/// Expands suffix and direction abbreviations in street names.
#[derive(Debug, Clone)]
pub struct NameExpander {
    suffixes: LookupTable,
    directions: LookupTable,
}

impl Default for NameExpander {
    fn default() -> Self {
        Self::new(LookupTable::suffixes(), LookupTable::directions())
    }
}

impl NameExpander {
    pub fn new(suffixes: LookupTable, directions: LookupTable) -> Self {
        Self {
            suffixes,
            directions,
        }
    }

    /// Expand every token against the suffix table.
    ///
    /// Unknown tokens are kept; with `warn` set each one is reported.
    pub fn expand_word(&self, raw: &str, warn: bool, diagnostics: &mut Vec<Diagnostic>) -> String {
        raw.split_whitespace()
            .map(|token| match self.suffixes.get(token) {
                Some(full) => full,
                None => {
                    if warn {
                        diagnostics.push(Diagnostic::UnknownSuffix(token.to_string()));
                    }
                    token
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Expand every token against the direction table. Unknown tokens pass through.
    pub fn expand_direction(&self, raw: &str) -> String {
        raw.split_whitespace()
            .map(|token| self.directions.get(token).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Expand the first token as a direction and the last as a suffix.
    pub fn expand_full_name(&self, raw: &str, diagnostics: &mut Vec<Diagnostic>) -> String {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let last = parts.len().saturating_sub(1);
        parts
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                if idx == 0 {
                    self.expand_direction(part)
                } else if idx == last {
                    self.expand_word(part, true, diagnostics)
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drop a trailing road type repeated by the word before it ("Oak St Street").
    ///
    /// The comparison is case-sensitive and only the final two tokens change.
    pub fn collapse_double_suffix(&self, raw: &str) -> String {
        let mut parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        let count = parts.len();
        if count < 3 {
            return raw.trim().to_string();
        }

        let expanded = self.expand_word(&parts[count - 2], false, &mut Vec::new());
        if parts[count - 1] != expanded {
            return raw.trim().to_string();
        }

        parts.pop();
        parts[count - 2] = expanded;
        parts.join(" ")
    }
}
