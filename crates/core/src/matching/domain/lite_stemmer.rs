/// Strip a possessive `'s`, or a plural `s` from tokens longer than three
/// characters. Shallow on purpose: it only absorbs plural/possessive drift.
pub fn stem(token: &str) -> &str {
    if let Some(base) = token.strip_suffix("'s") {
        return base;
    }
    if token.chars().count() > 3 {
        if let Some(base) = token.strip_suffix('s') {
            return base;
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::short_word("is", "is")]
    #[case::three_letters("bus", "bus")]
    #[case::possessive("dog's", "dog")]
    #[case::short_possessive("a's", "a")]
    #[case::plural("cats", "cat")]
    #[case::no_suffix("hello", "hello")]
    #[case::double_s("glass", "glas")]
    #[case::empty("", "")]
    fn test_stem(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(stem(token), expected);
    }

    #[test]
    fn test_possessive_takes_priority_over_plural() {
        // "boss's" loses only the possessive
        assert_eq!(stem("boss's"), "boss");
    }
}
