//! Property tests for the working selection.

use proptest::prelude::*;

use wardrobe::{Hierarchy, Item, NodeId, Selection, WardrobeError};

fn avatar_with_children(count: usize) -> (Hierarchy, NodeId, Vec<NodeId>) {
    let mut hierarchy = Hierarchy::new();
    let root = hierarchy.add_root("Avatar");
    let nodes = (0..count)
        .map(|i| hierarchy.add_child(root, format!("Node{i}")).unwrap())
        .collect();
    (hierarchy, root, nodes)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding any sequence of nodes keeps each node at most once, in first-seen order.
    #[test]
    fn property_selection_never_holds_duplicates(
        picks in proptest::collection::vec(0usize..8, 0..24)
    ) {
        let (hierarchy, root, nodes) = avatar_with_children(8);
        let mut selection = Selection::new();
        let mut expected: Vec<NodeId> = Vec::new();

        for pick in picks {
            let node = nodes[pick];
            let outcome = selection.validate_and_add(
                Item::from_node(&hierarchy, node).unwrap(),
                &hierarchy,
                root,
            );
            if expected.contains(&node) {
                let is_duplicate = matches!(outcome, Err(WardrobeError::DuplicateItem { .. }));
                prop_assert!(is_duplicate);
            } else {
                prop_assert!(outcome.is_ok());
                expected.push(node);
            }
        }

        let actual: Vec<NodeId> = selection.iter().map(Item::node).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: removing position i shifts later values down by one and keeps order.
    #[test]
    fn property_remove_keeps_relative_order(count in 1usize..12, index in 0usize..12) {
        let (hierarchy, root, nodes) = avatar_with_children(count);
        let mut selection = Selection::new();
        for node in &nodes {
            selection
                .validate_and_add(Item::from_node(&hierarchy, *node).unwrap(), &hierarchy, root)
                .unwrap();
        }
        let index = index % count;

        let removed = selection.remove_at(index).unwrap();

        prop_assert_eq!(removed.node(), nodes[index]);
        let mut expected = nodes.clone();
        expected.remove(index);
        let actual: Vec<NodeId> = selection.iter().map(Item::node).collect();
        prop_assert_eq!(actual, expected);
        for (value, item) in selection.values() {
            prop_assert_eq!(item.node(), selection.items()[value - 1].node());
        }
    }

    /// PROPERTY: an out-of-range removal is an error and changes nothing.
    #[test]
    fn property_out_of_range_remove_is_rejected(count in 0usize..8, extra in 0usize..4) {
        let (hierarchy, root, nodes) = avatar_with_children(count);
        let mut selection = Selection::new();
        for node in &nodes {
            selection
                .validate_and_add(Item::from_node(&hierarchy, *node).unwrap(), &hierarchy, root)
                .unwrap();
        }
        let before = selection.clone();

        let is_out_of_range = matches!(
            selection.remove_at(count + extra),
            Err(WardrobeError::IndexOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
        prop_assert_eq!(selection, before);
    }
}
