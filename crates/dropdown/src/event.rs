//! Input events a select widget reacts to.

/// A user interaction delivered to [`Select::update`](crate::select::Select::update).
///
/// Events carry option *keys* (the `value` field), matching the selection
/// identity contract. `ChipRemoveClicked` is deliberately distinct from
/// `ControlClicked`: removing a chip sits inside the control area but must
/// never also toggle the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent<T: Clone + PartialEq> {
    /// The control (the always-visible input area) was clicked.
    ControlClicked,
    /// An option row in the open menu was clicked.
    OptionClicked(T),
    /// The remove affix on a selected chip was clicked.
    ChipRemoveClicked(T),
    /// The clear-all affix was clicked.
    ClearAllClicked,
    /// The search input text changed; carries the full new text.
    SearchEdited(String),
    /// A document-level click landed outside this widget's subtree.
    OutsideClicked,
}
