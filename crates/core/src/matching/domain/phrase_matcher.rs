use super::text_normalizer::{normalize, tokenize};
use super::token_similarity::tokens_match;

/// Report whether `phrase` (already normalized) occurs in `haystack`,
/// tolerating stemming and up to `max_distance` edits per token.
///
/// With `allow_substring`, a literal occurrence of the phrase inside the
/// normalized haystack is accepted without token comparison. Otherwise a
/// window of phrase length slides over the haystack tokens and the first
/// window whose tokens all match, in order, accepts.
pub fn soft_contains(
    haystack: &str,
    phrase: &str,
    max_distance: usize,
    allow_substring: bool,
) -> bool {
    let haystack = normalize(haystack);
    if allow_substring && !phrase.is_empty() && haystack.contains(phrase) {
        return true;
    }

    let phrase_tokens = tokenize(phrase);
    let haystack_tokens = tokenize(&haystack);
    if phrase_tokens.is_empty() || haystack_tokens.len() < phrase_tokens.len() {
        return false;
    }

    haystack_tokens.windows(phrase_tokens.len()).any(|window| {
        window
            .iter()
            .zip(&phrase_tokens)
            .all(|(candidate, expected)| tokens_match(candidate, expected, max_distance))
    })
}
