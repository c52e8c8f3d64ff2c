//! The controlled selection value.
//!
//! The widget never owns the committed value: the host passes the current
//! [`Selection`] in and receives a replacement through the change handler
//! on every selection or clear. Membership is always decided by the
//! option's `value` key, never by allocation identity.

use crate::option::SelectOption;

/// The value a select widget is controlled by.
///
/// Single-selection widgets emit [`Selection::None`] or [`Selection::One`];
/// multi-selection widgets emit [`Selection::Many`] with insertion order
/// preserved and no key present twice. Host-supplied values that break that
/// shape (a `One` handed to a multi widget, duplicate keys inside a `Many`)
/// are tolerated: membership checks stay key-based and toggling
/// re-establishes the no-duplicate invariant for the toggled key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Clone + PartialEq> {
    /// Nothing selected.
    None,
    /// A single selected option.
    One(SelectOption<T>),
    /// An ordered multi-selection.
    Many(Vec<SelectOption<T>>),
}

impl<T: Clone + PartialEq> Default for Selection<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Returns true if no option is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::One(_) => false,
            Self::Many(options) => options.is_empty(),
        }
    }

    /// Returns the number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(options) => options.len(),
        }
    }

    /// Returns true if an option with the given key is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns the selected option with the given key, if any.
    #[must_use]
    pub fn get(&self, key: &T) -> Option<&SelectOption<T>> {
        match self {
            Self::None => None,
            Self::One(opt) => (opt.value == *key).then_some(opt),
            Self::Many(options) => options.iter().find(|opt| opt.value == *key),
        }
    }

    /// The selection as an ordered list, whatever its variant.
    ///
    /// This is the seed multi-mode toggling starts from: `None` is empty,
    /// `One` is a single entry, `Many` is itself.
    #[must_use]
    pub fn to_vec(&self) -> Vec<SelectOption<T>> {
        match self {
            Self::None => Vec::new(),
            Self::One(opt) => vec![opt.clone()],
            Self::Many(options) => options.clone(),
        }
    }

    /// Computes the multi-selection after toggling `option`.
    ///
    /// If the option's key is already a member every occurrence is removed
    /// (toggle-off); otherwise the option is appended at the end
    /// (toggle-on). The receiver is not modified.
    #[must_use]
    pub fn toggled(&self, option: &SelectOption<T>) -> Vec<SelectOption<T>> {
        let mut next = self.to_vec();
        let before = next.len();
        next.retain(|opt| opt.value != option.value);
        if next.len() == before {
            next.push(option.clone());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(label: &str, key: &'static str) -> SelectOption<&'static str> {
        SelectOption::new(label, key)
    }

    #[test]
    fn test_toggle_on_then_off_round_trips() {
        let base = Selection::Many(vec![opt("Pizza", "option1")]);
        let burger = opt("Burger", "option2");

        let with_burger = Selection::Many(base.toggled(&burger));
        assert!(with_burger.contains(&"option2"));

        let without = with_burger.toggled(&burger);
        assert_eq!(Selection::Many(without), base);
    }

    #[test]
    fn test_toggle_appends_at_end() {
        let sel = Selection::Many(vec![opt("Pizza", "option1")]);
        let next = sel.toggled(&opt("Juice", "option11"));
        assert_eq!(next.last().map(|o| o.value), Some("option11"));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_membership_is_key_based() {
        // Same key under a different label still counts as selected.
        let sel = Selection::Many(vec![opt("Pizza", "option1")]);
        assert!(sel.contains(&"option1"));
        let relabeled = opt("Margherita", "option1");
        assert!(sel.toggled(&relabeled).is_empty());
    }

    #[test]
    fn test_toggle_off_removes_duplicate_keys() {
        // A malformed host value with a repeated key collapses on toggle.
        let sel = Selection::Many(vec![opt("Pizza", "option1"), opt("Pizza", "option1")]);
        assert!(sel.toggled(&opt("Pizza", "option1")).is_empty());
    }

    #[test]
    fn test_one_seeds_multi_toggling() {
        let sel = Selection::One(opt("Pizza", "option1"));
        let next = sel.toggled(&opt("Burger", "option2"));
        let values: Vec<&str> = next.iter().map(|o| o.value).collect();
        assert_eq!(values, ["option1", "option2"]);
    }

    #[test]
    fn test_emptiness() {
        assert!(Selection::<&str>::None.is_empty());
        assert!(Selection::<&str>::Many(Vec::new()).is_empty());
        assert!(!Selection::One(opt("Pizza", "option1")).is_empty());
        assert_eq!(Selection::One(opt("Pizza", "option1")).len(), 1);
    }
}
