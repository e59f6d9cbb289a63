// tests/path_properties.rs
use blscheck_keys::DerivationPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_accepts_any_u32_components(indices in proptest::collection::vec(any::<u32>(), 0..8)) {
        let rendered = std::iter::once("m".to_string())
            .chain(indices.iter().map(u32::to_string))
            .collect::<Vec<_>>()
            .join("/");
        let path: DerivationPath = rendered.parse().unwrap();
        prop_assert_eq!(path.indices(), indices.as_slice());
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,40}") {
        let _ = input.parse::<DerivationPath>();
    }

    #[test]
    fn non_master_root_is_rejected(root in "[0-9a-z]{1,6}", rest in proptest::collection::vec(any::<u32>(), 0..4)) {
        prop_assume!(root != "m");
        let mut rendered = root.clone();
        for index in &rest {
            rendered.push('/');
            rendered.push_str(&index.to_string());
        }
        prop_assert!(rendered.parse::<DerivationPath>().is_err());
    }
}
