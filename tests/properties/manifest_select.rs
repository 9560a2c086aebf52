//! Property tests for manifest selection and job expansion.

use std::path::Path;

use proptest::prelude::*;

use icongen::manifest::{IconEntry, Manifest, PathLayout};
use icongen::IconError;

fn builtin_names() -> Vec<String> {
    Manifest::builtin()
        .entries()
        .iter()
        .map(|e| e.name().to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selecting any subset keeps manifest order and drops
    /// duplicates.
    #[test]
    fn property_select_keeps_manifest_order(
        picks in proptest::collection::vec(0usize..19, 1..30)
    ) {
        let names = builtin_names();
        let requested: Vec<String> = picks.iter().map(|&i| names[i].clone()).collect();

        let selected = Manifest::builtin().select(&requested).unwrap();
        let selected_names: Vec<&str> = selected.entries().iter().map(|e| e.name()).collect();

        let expected: Vec<&str> = names
            .iter()
            .filter(|n| requested.contains(n))
            .map(String::as_str)
            .collect();
        prop_assert_eq!(selected_names, expected);
    }

    /// PROPERTY: a name outside the manifest is always rejected.
    #[test]
    fn property_unknown_name_rejected(name in "[a-z_]{1,20}") {
        prop_assume!(!builtin_names().contains(&name));

        let err = Manifest::builtin().select(&[name.clone()]).unwrap_err();
        let is_unknown = matches!(err, IconError::UnknownIcon { name: ref n, .. } if *n == name);
        prop_assert!(is_unknown);
    }

    /// PROPERTY: job expansion yields exactly one job per (entry, size), in
    /// order.
    #[test]
    fn property_jobs_match_entries(
        entries in proptest::collection::vec(
            ("[a-z]{1,8}", proptest::collection::vec(1u32..256, 1..4)),
            0..8,
        )
    ) {
        let manifest = Manifest::new(
            entries
                .iter()
                .map(|(name, sizes)| IconEntry::new(name.clone(), sizes).unwrap())
                .collect(),
        );
        let jobs = manifest.jobs(&PathLayout::under(Path::new("p")));

        let expected: Vec<(String, u32)> = entries
            .iter()
            .flat_map(|(name, sizes)| sizes.iter().map(move |&s| (name.clone(), s)))
            .collect();
        let actual: Vec<(String, u32)> = jobs.iter().map(|j| (j.name.clone(), j.size)).collect();

        prop_assert_eq!(manifest.job_count(), jobs.len());
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: a zero height is never accepted.
    #[test]
    fn property_zero_height_rejected(
        mut sizes in proptest::collection::vec(1u32..256, 0..4),
        at in 0usize..4,
    ) {
        let at = at.min(sizes.len());
        sizes.insert(at, 0);
        prop_assert!(IconEntry::new("x", &sizes).is_err());
    }
}
