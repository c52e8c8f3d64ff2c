//! Property tests for the selection and filtering invariants.

#![forbid(unsafe_code)]

use proptest::prelude::*;

use dropdown::option::{OptionGroup, OptionTree, SelectOption};
use dropdown::selection::Selection;

fn option_set(size: usize) -> Vec<SelectOption<usize>> {
    (0..size)
        .map(|i| SelectOption::new(format!("Item {i}"), i))
        .collect()
}

proptest! {
    #[test]
    fn test_toggle_sequences_never_duplicate(
        size in 1usize..12,
        clicks in prop::collection::vec(0usize..12, 0..40)
    ) {
        let options = option_set(size);
        let mut selection: Selection<usize> = Selection::Many(Vec::new());

        for click in clicks {
            let Some(option) = options.get(click % size) else { continue };
            selection = Selection::Many(selection.toggled(option));

            // Invariant: no key appears twice, ever.
            let current = selection.to_vec();
            for (i, a) in current.iter().enumerate() {
                for b in current.iter().skip(i + 1) {
                    prop_assert_ne!(a.value, b.value);
                }
            }
        }
    }

    #[test]
    fn test_toggle_parity_decides_membership(
        size in 1usize..8,
        clicks in prop::collection::vec(0usize..8, 0..30)
    ) {
        let options = option_set(size);
        let mut selection: Selection<usize> = Selection::Many(Vec::new());
        let mut counts = vec![0usize; size];

        for click in clicks {
            let idx = click % size;
            counts[idx] += 1;
            selection = Selection::Many(selection.toggled(&options[idx]));
        }

        // Invariant: an option is selected iff it was toggled an odd number
        // of times.
        for (idx, count) in counts.iter().enumerate() {
            prop_assert_eq!(selection.contains(&idx), count % 2 == 1);
        }
    }

    #[test]
    fn test_filter_keeps_exactly_matching_labels(
        labels in prop::collection::vec("[A-Za-z ]{0,12}", 0..20),
        term in "[A-Za-z]{0,6}"
    ) {
        let options: Vec<SelectOption<usize>> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| SelectOption::new(label.clone(), i))
            .collect();
        let tree = OptionTree::Flat(options);

        let filtered = tree.filtered(&term);
        let term_lower = term.to_lowercase();

        // Soundness: every surviving label contains the term.
        for opt in filtered.iter() {
            prop_assert!(opt.label.to_lowercase().contains(&term_lower));
        }

        // Completeness: every matching label survives.
        let expected = labels
            .iter()
            .filter(|l| l.to_lowercase().contains(&term_lower))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn test_filtered_groups_are_never_empty(
        groups in prop::collection::vec(
            prop::collection::vec("[A-Za-z]{0,10}", 0..6),
            0..6
        ),
        term in "[A-Za-z]{0,5}"
    ) {
        let mut key = 0usize;
        let tree = OptionTree::Grouped(
            groups
                .iter()
                .enumerate()
                .map(|(i, labels)| {
                    OptionGroup::new(
                        format!("Group {i}"),
                        labels
                            .iter()
                            .map(|label| {
                                key += 1;
                                SelectOption::new(label.clone(), key)
                            })
                            .collect(),
                    )
                })
                .collect(),
        );

        match tree.filtered(&term) {
            OptionTree::Grouped(filtered) => {
                for group in &filtered {
                    prop_assert!(!group.options.is_empty());
                }
            }
            OptionTree::Flat(_) => prop_assert!(false, "tree shape changed under filtering"),
        }
    }

    #[test]
    fn test_filtering_is_pure(
        labels in prop::collection::vec("[a-z]{1,8}", 1..10),
        term in "[a-z]{0,4}"
    ) {
        let options: Vec<SelectOption<usize>> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| SelectOption::new(label.clone(), i))
            .collect();
        let tree = OptionTree::Flat(options);
        let before = tree.clone();

        let _ = tree.filtered(&term);
        let _ = tree.filtered(&term.to_uppercase());

        // The source tree is never mutated by filtering.
        prop_assert_eq!(tree, before);
    }
}
