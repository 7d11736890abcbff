#[cfg(test)]
mod tests {
    use qstree::segment::segment;

    #[test]
    fn test_plain_key() {
        assert_eq!(segment("f").unwrap(), vec!["f"]);
    }

    #[test]
    fn test_bracket_chain() {
        assert_eq!(segment("f[a][b]").unwrap(), vec!["f", "a", "b"]);
        assert_eq!(segment("f[]").unwrap(), vec!["f", ""]);
        assert_eq!(segment("f[][a]").unwrap(), vec!["f", "", "a"]);
    }

    #[test]
    fn test_chain_stops_at_non_bracket() {
        assert_eq!(segment("f[a]b[c]").unwrap(), vec!["f", "a"]);
    }

    #[test]
    fn test_sanitizes_first_segment_only() {
        assert_eq!(segment("a b.c[d e.f]").unwrap(), vec!["a_b_c", "d e.f"]);
        assert_eq!(segment("a .[[b").unwrap(), vec!["a___[b"]);
    }

    #[test]
    fn test_leading_spaces() {
        assert_eq!(segment("   f[a]").unwrap(), vec!["f", "a"]);
    }

    #[test]
    fn test_rejected_keys() {
        assert!(segment("").is_none());
        assert!(segment("   ").is_none());
        assert!(segment("[a]").is_none());
        assert!(segment("  [a]").is_none());
    }

    #[test]
    fn test_multibyte_key() {
        assert_eq!(segment("名字[姓]").unwrap(), vec!["名字", "姓"]);
    }
}
