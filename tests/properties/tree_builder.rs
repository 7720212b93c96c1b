//! Property tests for tree construction.

use std::collections::HashSet;

use proptest::prelude::*;

use tagtree::domain::entities::{walk_forest, ClassificationType};
use tagtree::{build_tree, ClassificationRegistry, EntityCountIndex, TreeOptions};

/// Up to 12 distinct names with optional counts
fn registry_and_counts() -> impl Strategy<Value = (ClassificationRegistry, EntityCountIndex)> {
    proptest::collection::vec(proptest::option::of(0u64..5), 0..12).prop_map(|counts| {
        let types = (0..counts.len())
            .map(|i| ClassificationType::new(format!("T{}", i), format!("g{}", i)));
        let mut index = EntityCountIndex::new();
        for (i, count) in counts.iter().enumerate() {
            if let Some(count) = count {
                index.set(format!("T{}", i), *count);
            }
        }
        (ClassificationRegistry::from_types(types), index)
    })
}

/// A forest: every type after the first may pick an earlier type as its parent,
/// so super/sub links are consistent and acyclic.
fn acyclic_registry() -> impl Strategy<Value = ClassificationRegistry> {
    proptest::collection::vec(proptest::option::of(any::<prop::sample::Index>()), 0..12).prop_map(
        |parents| {
            let mut types: Vec<ClassificationType> = (0..parents.len())
                .map(|i| ClassificationType::new(format!("T{}", i), format!("g{}", i)))
                .collect();
            for (i, parent) in parents.into_iter().enumerate() {
                let Some(parent) = parent.filter(|_| i > 0) else {
                    continue;
                };
                let p = parent.index(i);
                let child = types[i].name.clone();
                let parent_name = types[p].name.clone();
                types[p].sub_types.push(child);
                types[i].super_types.push(parent_name);
            }
            ClassificationRegistry::from_types(types)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flat mode shows every type, or exactly the used ones.
    #[test]
    fn property_flat_mode_node_count((registry, counts) in registry_and_counts()) {
        let all = build_tree(&registry, &counts, TreeOptions::flat().with_show_empty(true), None);
        prop_assert_eq!(all.nodes.len(), registry.len());
        prop_assert!(all.nodes.iter().all(|n| n.children.is_empty()));

        let used = build_tree(&registry, &counts, TreeOptions::flat(), None);
        let expected = registry.iter().filter(|t| counts.count(&t.name) > 0).count();
        prop_assert_eq!(used.nodes.len(), expected);
    }

    /// PROPERTY: on an acyclic, consistent registry every name is reachable from a root.
    #[test]
    fn property_group_mode_reaches_every_type(registry in acyclic_registry()) {
        let counts = EntityCountIndex::new();
        let build = build_tree(&registry, &counts, TreeOptions::group().with_show_empty(true), None);

        let reached: HashSet<&str> = walk_forest(&build.nodes)
            .into_iter()
            .map(|n| n.name.as_str())
            .collect();
        let names: HashSet<&str> = registry.names().into_iter().collect();

        prop_assert_eq!(reached, names);
        prop_assert!(build.diagnostics.is_empty());
        prop_assert_eq!(walk_forest(&build.nodes).len(), registry.len());
    }

    /// PROPERTY: the selected tag's guid is reported whenever that tag exists.
    #[test]
    fn property_selected_tag_is_matched(registry in acyclic_registry(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!registry.is_empty());
        let ty = &registry.all()[pick.index(registry.len())];
        let counts = EntityCountIndex::new();

        let build = build_tree(&registry, &counts, TreeOptions::group(), Some(&ty.name));
        prop_assert_eq!(build.matched_guid.as_deref(), Some(ty.guid.as_str()));
    }
}
