use super::lite_stemmer::stem;

/// Phrase tokens this short or shorter must match exactly (after stemming).
pub const SHORT_TOKEN_MAX_LEN: usize = 2;

/// Decide whether transcript token `a` is close enough to phrase token `b`.
///
/// Checked in order: exact equality, equal stems, then edit distance between
/// the stems. Edit distance is never applied when `b` is a short token, so
/// words like "a" or "to" cannot fuzzy-match.
pub fn tokens_match(a: &str, b: &str, max_distance: usize) -> bool {
    if a == b {
        return true;
    }

    let (stem_a, stem_b) = (stem(a), stem(b));
    if stem_a == stem_b {
        return true;
    }

    let max_distance = effective_max_distance(b, max_distance);
    if max_distance == 0 {
        return false;
    }

    let (len_a, len_b) = (stem_a.chars().count(), stem_b.chars().count());
    if len_a.abs_diff(len_b) > max_distance {
        return false;
    }

    levenshtein(stem_a, stem_b) <= max_distance
}

fn effective_max_distance(phrase_token: &str, max_distance: usize) -> usize {
    if phrase_token.chars().count() <= SHORT_TOKEN_MAX_LEN {
        0
    } else {
        max_distance
    }
}

/// Classic Levenshtein distance over chars, unit cost for insert, delete and
/// substitute. Uses two rolling rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
