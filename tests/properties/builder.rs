//! Property tests for the exclusive selector builder.

use proptest::prelude::*;

use wardrobe::{ExclusiveSelectorBuilder, Hierarchy, Item, NodeId, Selection};

/// Avatar with `count` direct children, all selected in order.
fn rig(count: usize) -> (Hierarchy, NodeId, Selection) {
    let mut hierarchy = Hierarchy::new();
    let root = hierarchy.add_root("Avatar");
    let mut selection = Selection::new();
    for i in 0..count {
        let node = hierarchy.add_child(root, format!("Item{i}")).unwrap();
        selection
            .validate_and_add(Item::from_node(&hierarchy, node).unwrap(), &hierarchy, root)
            .unwrap();
    }
    (hierarchy, root, selection)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N items give N+1 states, 2N transitions, N clips and N menu entries.
    #[test]
    fn property_build_is_sized_by_item_count(count in 0usize..24) {
        let (hierarchy, root, selection) = rig(count);
        let build = ExclusiveSelectorBuilder::default()
            .build(&selection, &hierarchy, root)
            .unwrap();

        prop_assert_eq!(build.state_machine.states.len(), count + 1);
        prop_assert_eq!(build.state_machine.transitions.len(), 2 * count);
        prop_assert_eq!(build.clips.len(), count);
        prop_assert_eq!(build.menu.entries.len(), count);
        prop_assert_eq!(build.parameter.max as usize, count);
        prop_assert_eq!(build.parameter.default, 0);
    }

    /// PROPERTY: each clip turns on exactly its own item.
    #[test]
    fn property_each_clip_shows_one_item(count in 1usize..16) {
        let (hierarchy, root, selection) = rig(count);
        let build = ExclusiveSelectorBuilder::default()
            .build(&selection, &hierarchy, root)
            .unwrap();

        for (k, clip) in build.clips.iter().enumerate() {
            let on: Vec<usize> = clip
                .curves
                .iter()
                .enumerate()
                .filter(|(_, curve)| curve.keyframes.iter().all(|key| key.value == 1.0))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(on, vec![k]);
        }
    }

    /// PROPERTY: from any state, setting the parameter to v settles in the state for v.
    #[test]
    fn property_guards_reach_selected_state(
        count in 1usize..16,
        start in 0usize..16,
        value in 0i32..16,
    ) {
        let (hierarchy, root, selection) = rig(count);
        let machine = ExclusiveSelectorBuilder::default()
            .build(&selection, &hierarchy, root)
            .unwrap()
            .state_machine;
        let start = start % machine.states.len();
        let value = value % (count as i32 + 1);

        let settled = machine.settle(start, value);

        let expected = if value == 0 { None } else { Some(value) };
        prop_assert_eq!(machine.states[settled].value, expected);
    }

    /// PROPERTY: building twice from the same input gives the same fingerprint.
    #[test]
    fn property_build_is_deterministic(count in 0usize..12) {
        let (hierarchy, root, selection) = rig(count);
        let builder = ExclusiveSelectorBuilder::default();

        let first = builder.build(&selection, &hierarchy, root).unwrap();
        let second = builder.build(&selection, &hierarchy, root).unwrap();

        prop_assert_eq!(first.fingerprint(), second.fingerprint());
    }
}
