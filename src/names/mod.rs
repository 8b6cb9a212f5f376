//! Street name normalization.
//!
//! The free functions here are table-independent text fixes; abbreviation
//! handling lives on [`NameExpander`].

mod expander;

pub use expander::NameExpander;

/// Capitalize the first cased letter of each word and lower-case the rest.
///
/// Digits, punctuation and caseless scripts break words, so `"22nd st"`
/// becomes `"22Nd St"` and `"o'neal"` becomes `"O'Neal"`. A word-initial
/// letter whose upper-case form is several characters keeps only the first
/// one upper-case (`"ß"` -> `"Ss"`).
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_cased = false;
    for ch in raw.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            let mut upper = ch.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        }
        prev_cased = cased;
    }
    out
}

/// Lower-case whole tokens that start with a numeric character (`"22Nd"` -> `"22nd"`).
pub fn fix_numbered_capitalization(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            if word.starts_with(char::is_numeric) {
                word.to_lowercase()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace every run of whitespace with a single space and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
