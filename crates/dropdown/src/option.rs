//! Option data model for select widgets.
//!
//! Options come in two shapes: a flat list of [`SelectOption`]s, or a list
//! of [`OptionGroup`]s where each group is a non-selectable heading over its
//! own options. The shape is fixed when the [`OptionTree`] is built and
//! never changes for a mounted widget.
//!
//! # Example
//!
//! ```rust
//! use dropdown::option::{OptionTree, OptionGroup, SelectOption};
//!
//! let tree = OptionTree::Grouped(vec![
//!     OptionGroup::new("Fast Food", vec![
//!         SelectOption::new("Pizza", "option1"),
//!         SelectOption::new("Burger", "option2"),
//!     ]),
//! ]);
//!
//! assert_eq!(tree.filtered("pizza").len(), 1);
//! ```

/// A single selectable entry.
///
/// Selection identity is the `value` field: two options with equal values
/// are the same selection, regardless of label or allocation. This is the
/// contract membership checks and toggling rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption<T: Clone + PartialEq> {
    /// The text shown to the user.
    pub label: String,
    /// The underlying value; canonical selection key.
    pub value: T,
}

impl<T: Clone + PartialEq> SelectOption<T> {
    /// Creates a new option.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T: Clone + PartialEq + std::fmt::Display> SelectOption<T> {
    /// Creates options from a list of values using `Display` for labels.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Vec<Self> {
        values
            .into_iter()
            .map(|v| Self::new(v.to_string(), v))
            .collect()
    }
}

/// A labeled, non-selectable heading over a run of options.
///
/// Group labels never participate in search filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionGroup<T: Clone + PartialEq> {
    /// The heading text.
    pub label: String,
    /// The options under this heading.
    pub options: Vec<SelectOption<T>>,
}

impl<T: Clone + PartialEq> OptionGroup<T> {
    /// Creates a new group.
    pub fn new(label: impl Into<String>, options: Vec<SelectOption<T>>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// The source data for a select widget, flat or grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionTree<T: Clone + PartialEq> {
    /// A flat list of options.
    Flat(Vec<SelectOption<T>>),
    /// Labeled sections of options.
    Grouped(Vec<OptionGroup<T>>),
}

impl<T: Clone + PartialEq> OptionTree<T> {
    /// Returns true if the tree is in grouped mode.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Returns the total number of options across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(options) => options.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.options.len()).sum(),
        }
    }

    /// Returns true if the tree holds no options at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every option, flattening groups.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &SelectOption<T>> + '_> {
        match self {
            Self::Flat(options) => Box::new(options.iter()),
            Self::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.options.iter())),
        }
    }

    /// Finds the first option whose value equals `key`.
    #[must_use]
    pub fn find(&self, key: &T) -> Option<&SelectOption<T>> {
        self.iter().find(|opt| opt.value == *key)
    }

    /// Returns a filtered copy of the tree.
    ///
    /// Matching is a case-insensitive substring test of `term` against each
    /// option's label; an empty term keeps every option. In grouped mode
    /// each group is filtered independently and groups left with no options
    /// are dropped, including groups that were already empty in the source.
    /// Group labels are never matched. The source tree is not touched.
    #[must_use]
    pub fn filtered(&self, term: &str) -> Self {
        let term_lower = term.to_lowercase();
        let matches = |opt: &SelectOption<T>| opt.label.to_lowercase().contains(&term_lower);

        match self {
            Self::Flat(options) => {
                Self::Flat(options.iter().filter(|o| matches(o)).cloned().collect())
            }
            Self::Grouped(groups) => Self::Grouped(
                groups
                    .iter()
                    .map(|group| OptionGroup {
                        label: group.label.clone(),
                        options: group.options.iter().filter(|o| matches(o)).cloned().collect(),
                    })
                    .filter(|group| !group.options.is_empty())
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> OptionTree<&'static str> {
        OptionTree::Grouped(vec![
            OptionGroup::new(
                "Fast Food",
                vec![
                    SelectOption::new("Pizza", "option1"),
                    SelectOption::new("Burger", "option2"),
                ],
            ),
            OptionGroup::new("Drinks", vec![SelectOption::new("Juice", "option11")]),
        ])
    }

    #[test]
    fn test_len_and_find() {
        let tree = grouped();
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
        assert_eq!(tree.find(&"option11").map(|o| o.label.as_str()), Some("Juice"));
        assert!(tree.find(&"missing").is_none());
    }

    #[test]
    fn test_filter_flat() {
        let tree = OptionTree::Flat(SelectOption::from_values(["Rice", "Bread", "Fruit"]));
        let filtered = tree.filtered("r");
        match filtered {
            OptionTree::Flat(options) => {
                let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
                assert_eq!(labels, ["Rice", "Bread", "Fruit"]);
            }
            OptionTree::Grouped(_) => panic!("filtering must preserve the tree shape"),
        }

        let filtered = tree.filtered("ric");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_drops_empty_groups() {
        let filtered = grouped().filtered("pizza");
        match filtered {
            OptionTree::Grouped(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].label, "Fast Food");
                assert_eq!(groups[0].options.len(), 1);
                assert_eq!(groups[0].options[0].label, "Pizza");
            }
            OptionTree::Flat(_) => panic!("filtering must preserve the tree shape"),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = grouped().filtered("JUICE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.find(&"option11").map(|o| o.label.as_str()), Some("Juice"));
    }

    #[test]
    fn test_group_labels_are_not_matched() {
        // "drinks" matches only the group heading, which never counts.
        let filtered = grouped().filtered("drinks");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_term_keeps_all() {
        let tree = grouped();
        assert_eq!(tree.filtered(""), tree);
    }

    #[test]
    fn test_empty_source_group_is_dropped() {
        let tree = OptionTree::Grouped(vec![
            OptionGroup::new("Empty", Vec::new()),
            OptionGroup::new("Drinks", vec![SelectOption::new("Juice", "option11")]),
        ]);
        match tree.filtered("") {
            OptionTree::Grouped(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].label, "Drinks");
            }
            OptionTree::Flat(_) => panic!("filtering must preserve the tree shape"),
        }
    }
}
