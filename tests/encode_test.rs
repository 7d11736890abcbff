#[cfg(test)]
mod tests {
    use qstree::{ Params, decode, encode, encode_pairs, http_build_query, params_from_tree };

    #[test]
    fn test_http_build_query() {
        let mut params = Params::new();
        params.insert("first".to_string(), vec!["value".to_string()]);
        params.insert("multi".to_string(), vec!["foo bar".to_string(), "baz".to_string()]);

        assert_eq!(http_build_query(&params), "first=value&multi=foo+bar&multi=baz");
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let mut params = Params::new();
        params.insert("a&b".to_string(), vec!["c=d%".to_string(), "é".to_string()]);

        assert_eq!(encode(&params), "a%26b=c%3Dd%25&a%26b=%C3%A9");
    }

    #[test]
    fn test_empty_values_emit_nothing() {
        let mut params = Params::new();
        params.insert("none".to_string(), Vec::new());
        params.insert("one".to_string(), vec![String::new()]);

        assert_eq!(encode(&params), "one=");
        assert_eq!(encode(&Params::new()), "");
    }

    #[test]
    fn test_encode_pairs_keeps_order() {
        let query = encode_pairs(vec![("z", vec!["1"]), ("a", vec!["2", "3"])]);
        assert_eq!(query, "z=1&a=2&a=3");
    }

    #[test]
    fn test_flat_round_trip_is_stable() {
        let input = "tags[]=rust&tags[]=web+dev&q=hello%26bye&tags2[]=x";
        let first = decode(input).unwrap();

        let params = params_from_tree(&first).unwrap();
        let second = decode(&encode(&params)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&second).unwrap(),
            r#"{"tags":["rust","web dev"],"q":"hello&bye","tags2":["x"]}"#
        );
    }

    #[test]
    fn test_nested_tree_has_no_flat_params() {
        let tree = decode("f[a]=m").unwrap();
        assert!(params_from_tree(&tree).is_none());

        let tree = decode("f[][a]=m").unwrap();
        assert!(params_from_tree(&tree).is_none());
    }
}
