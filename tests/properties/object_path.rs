//! Property tests for the object path codec.

use proptest::prelude::*;

use wardrobe::ObjectPath;

fn segment() -> impl Strategy<Value = String> {
    // Separators and escapes are over-represented on purpose.
    proptest::string::string_regex(r"([A-Za-z0-9 _.-]|/|\\){1,12}").unwrap()
}

fn path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any list of non-empty names survives encode then parse.
    #[test]
    fn property_encoded_paths_round_trip(segments in path()) {
        let original = ObjectPath::new(segments.clone());
        let parsed = ObjectPath::parse(&original.encode()).unwrap();

        prop_assert_eq!(parsed.segments(), segments.as_slice());
    }

    /// PROPERTY: names without separators encode to their plain binding form.
    #[test]
    fn property_plain_names_encode_unchanged(
        segments in proptest::collection::vec("[A-Za-z0-9_]{1,10}", 1..=4)
    ) {
        let path = ObjectPath::new(segments.clone());

        prop_assert_eq!(path.encode(), segments.join("/"));
        prop_assert_eq!(path.to_string(), segments.join("/"));
    }

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(input in ".{0,40}") {
        let _ = ObjectPath::parse(&input);
    }
}
