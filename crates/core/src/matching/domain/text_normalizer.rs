use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const APOSTROPHE: char = '\'';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Canonicalize text into a comparable form.
///
/// - lowercases (locale independent)
/// - decomposes and drops combining marks, so "café" becomes "cafe"
/// - treats `-`, `_` and any whitespace as a word separator
/// - keeps letters, digits and apostrophes; drops other punctuation
/// - separates words with exactly one space, no leading or trailing space
///
/// Never fails; blank input yields an empty string. Idempotent.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c == '-' || c == '_' || c.is_whitespace() {
            pending_space = true;
            continue;
        }
        let c = if c == RIGHT_SINGLE_QUOTE { APOSTROPHE } else { c };
        if c.is_alphanumeric() || c == APOSTROPHE {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }

    out
}

/// Split normalized text into tokens. Empty tokens are never returned.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}
