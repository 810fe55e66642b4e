use std::collections::HashSet;

use proptest::prelude::*;
use ymanifest_core::{LocalExtension, reconcile};

fn extension_name() -> impl Strategy<Value = String> {
    // Small alphabet so the two sources overlap often.
    "[a-e]{1,3}"
}

proptest! {
    #[test]
    fn test_reconcile_size_is_distinct_union(
        manifest in prop::collection::vec(extension_name(), 0..20),
        local in prop::collection::vec(extension_name(), 0..20),
    ) {
        let local_extensions: Vec<LocalExtension> =
            local.iter().cloned().map(LocalExtension::new).collect();

        let set = reconcile(&manifest, &local_extensions);

        let distinct: HashSet<&String> = manifest.iter().chain(local.iter()).collect();
        prop_assert_eq!(set.len(), distinct.len());
    }

    #[test]
    fn test_reconcile_contains_every_name_once(
        manifest in prop::collection::vec(extension_name(), 0..20),
        local in prop::collection::vec(extension_name(), 0..20),
    ) {
        let local_extensions: Vec<LocalExtension> =
            local.iter().cloned().map(LocalExtension::new).collect();

        let set = reconcile(&manifest, &local_extensions);

        for name in manifest.iter().chain(local.iter()) {
            prop_assert!(set.contains(name));
        }
        let rendered = set.to_string();
        let tokens: Vec<&str> = rendered.split_whitespace().collect();
        let unique: HashSet<&str> = tokens.iter().copied().collect();
        prop_assert_eq!(tokens.len(), unique.len());
    }

    #[test]
    fn test_reconcile_without_local_is_distinct_manifest(
        manifest in prop::collection::vec(extension_name(), 0..20),
    ) {
        let set = reconcile(&manifest, &[]);
        let distinct: HashSet<&str> = manifest.iter().map(String::as_str).collect();
        let produced: HashSet<&str> = set.iter().collect();
        prop_assert_eq!(produced, distinct);
    }
}
