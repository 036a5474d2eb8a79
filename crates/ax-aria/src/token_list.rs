//! Token Lists
//!
//! Ordered-unique-token algebra over whitespace-separated attribute
//! values. Pure string operations; attribute I/O stays with callers.
//! Readers tolerate arbitrary whitespace runs, writers emit single
//! spaces.

/// Check whether `token` appears in `value`
pub fn contains(value: Option<&str>, token: &str) -> bool {
    value.is_some_and(|v| v.split_whitespace().any(|t| t == token))
}

/// Union `tokens` into `value`
///
/// Existing tokens keep their order, new ones append in input order,
/// duplicates collapse. An absent value yields the tokens joined by
/// single spaces.
pub fn add(value: Option<&str>, tokens: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for t in value.map(str::split_whitespace).into_iter().flatten() {
        if !out.contains(&t) {
            out.push(t);
        }
    }
    for &t in tokens {
        if !t.is_empty() && !out.contains(&t) {
            out.push(t);
        }
    }
    out.join(" ")
}

/// Delete every listed token from `value`
///
/// Whitespace runs collapse to single spaces and ends are trimmed.
/// An absent value stays absent: removal never creates the attribute.
pub fn remove(value: Option<&str>, tokens: &[&str]) -> Option<String> {
    let v = value?;
    let kept: Vec<&str> = v
        .split_whitespace()
        .filter(|t| !tokens.contains(t))
        .collect();
    Some(kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains(Some("a b c"), "b"));
        assert!(contains(Some("  a \t b "), "a"));
        assert!(!contains(Some("ab c"), "a"));
        assert!(!contains(None, "a"));
    }

    #[test]
    fn test_add_to_absent() {
        assert_eq!(add(None, &["a", "b"]), "a b");
    }

    #[test]
    fn test_add_existing_is_noop() {
        assert_eq!(add(Some("a b"), &["a"]), "a b");
    }

    #[test]
    fn test_add_preserves_order() {
        assert_eq!(add(Some("c a"), &["b", "a"]), "c a b");
    }

    #[test]
    fn test_add_skips_empty_tokens() {
        assert_eq!(add(Some("a"), &["", "b"]), "a b");
    }

    #[test]
    fn test_remove_never_creates() {
        assert_eq!(remove(None, &["a"]), None);
    }

    #[test]
    fn test_remove_collapses_whitespace() {
        assert_eq!(remove(Some("a  b \t c"), &["b"]).unwrap(), "a c");
        assert_eq!(remove(Some(" a "), &["a"]).unwrap(), "");
    }

    #[test]
    fn test_remove_missing_token_is_noop() {
        assert_eq!(remove(Some("a b"), &["z"]).unwrap(), "a b");
    }

    #[test]
    fn test_add_after_remove_round_trip() {
        // Re-adding removed tokens restores the same member set
        let added = add(None, &["x", "y"]);
        let removed = remove(Some(&added), &["x", "y"]).unwrap();
        let readded = add(Some(&removed), &["x", "y"]);
        assert_eq!(readded, added);
    }
}
