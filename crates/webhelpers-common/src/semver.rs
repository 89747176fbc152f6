//! Pre-release label sanitizing.
//!
//! Semantic versioning restricts pre-release identifiers to ASCII digits,
//! ASCII letters and the hyphen. The helpers here strip everything else; they
//! do not check dot-separated identifier structure or leading-zero rules.

/// Characters permitted in the pre-release portion of a semantic version.
pub const SEMANTIC_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-";

/// Returns `input` with every character that does not occur in `alphabet`
/// removed. Retained characters keep their original order.
///
/// Matching is per Unicode scalar value, so a multi-byte character in
/// `alphabet` is kept as a whole or dropped as a whole.
pub fn normalize_sem_string(input: &str, alphabet: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if alphabet.contains(ch) {
            out.push(ch);
        }
    }
    out
}

/// Strips every character that is not allowed in a semantic-version
/// pre-release label.
///
/// ```
/// use webhelpers_common::normalize_pre_release_string;
///
/// assert_eq!(normalize_pre_release_string("abc_123!XYZ-"), "abc123XYZ-");
/// assert_eq!(normalize_pre_release_string("rc.1"), "rc1");
/// ```
pub fn normalize_pre_release_string(input: &str) -> String {
    normalize_sem_string(input, SEMANTIC_ALPHABET)
}

/// True when [`normalize_pre_release_string`] would return `input` unchanged.
#[inline]
pub fn is_normalized_pre_release(input: &str) -> bool {
    input.chars().all(|ch| SEMANTIC_ALPHABET.contains(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_pre_release_string(""), "");
        assert!(is_normalized_pre_release(""));
    }

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(normalize_pre_release_string("abc_123!XYZ-"), "abc123XYZ-");
        assert_eq!(normalize_pre_release_string("beta.2+build.7"), "beta2build7");
        assert_eq!(normalize_pre_release_string("  pre release  "), "prerelease");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize_pre_release_string("ünïcödé"), "ncd");
        assert_eq!(normalize_pre_release_string("rc\u{200B}1"), "rc1");
        assert_eq!(normalize_pre_release_string("日本語"), "");
    }

    #[test]
    fn keeps_already_clean_labels() {
        let clean = "alpha-0-RC9";
        assert_eq!(normalize_pre_release_string(clean), clean);
        assert!(is_normalized_pre_release(clean));
        assert!(!is_normalized_pre_release("alpha.1"));
    }

    #[test]
    fn custom_alphabet_is_respected() {
        assert_eq!(normalize_sem_string("a1b2c3", "0123456789"), "123");
        assert_eq!(normalize_sem_string("anything", ""), "");
        assert_eq!(normalize_sem_string("xéyé", "é"), "éé");
    }

    #[test]
    fn alphabet_has_expected_shape() {
        assert_eq!(SEMANTIC_ALPHABET.len(), 10 + 26 + 26 + 1);
        assert!(SEMANTIC_ALPHABET
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}
