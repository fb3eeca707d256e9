//! OCR text cleanup that runs before coordinate matching.
//!
//! Two corruption patterns are repaired: a decimal point read as a dash
//! (`12-34`) and a decimal point separated from its fraction (`56.  78`).
use once_cell::sync::Lazy;
use regex::Regex;

// `<digit>-<digit>`, replaced left to right without overlap
static DASH_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)-(\d)").expect("dash decimal pattern"));

// `<digits>.<whitespace><digits>`
static SPLIT_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\.[\s\x1C-\x1F]+(\d+)").expect("split fraction pattern"));

/// Unicode whitespace plus the C0 separators U+001C..U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Replace every whitespace run with a single space.
///
/// Leading and trailing whitespace is dropped. Empty input gives empty output.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for word in text.split(is_separator).filter(|w| !w.is_empty()) {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed
}

/// Rewrite dash-for-dot and detached fractions back into plain decimals.
///
/// The dash rule is global: it touches every `<digit>-<digit>` in the text,
/// not only the ones inside a coordinate.
pub fn repair_decimal_markers(text: &str) -> String {
    let dotted = DASH_DECIMAL.replace_all(text, "${1}.${2}");
    SPLIT_FRACTION.replace_all(&dotted, "${1}.${2}").into_owned()
}

/// Full normalization: whitespace collapse followed by decimal repair.
pub fn normalize(raw: &str) -> String {
    tracing::debug!("Original extracted text: {:?}", raw);

    let collapsed = collapse_whitespace(raw);
    tracing::debug!("Normalized extracted text: {:?}", collapsed);

    let cleaned = repair_decimal_markers(&collapsed);
    tracing::debug!("Cleaned extracted text: {:?}", cleaned);

    cleaned
}
