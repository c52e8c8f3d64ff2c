#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Dropdown
//!
//! A controlled dropdown-selection widget for terminal UIs.
//!
//! The widget supports:
//! - **single and multi selection** — multi mode toggles options on and off
//!   and keeps the menu open for further picks
//! - **grouped options** — labeled headings over runs of options
//! - **search filtering** — case-insensitive substring matching over labels,
//!   with empty groups dropped from the filtered view
//! - **clear affordances** — per-chip remove affixes and a clear-all affix
//!
//! It is a *controlled component*: the committed value is owned by the host,
//! passed in with [`Select::set_value`](select::Select::set_value), and
//! emitted back through a change handler on every interaction. The widget
//! itself owns only transient UI state (open flag, search text).
//!
//! ## Example
//!
//! ```rust
//! use dropdown::prelude::*;
//!
//! let tree = OptionTree::Grouped(vec![
//!     OptionGroup::new("Fast Food", vec![
//!         SelectOption::new("Pizza", "option1"),
//!         SelectOption::new("Burger", "option2"),
//!     ]),
//!     OptionGroup::new("Drinks", vec![
//!         SelectOption::new("Juice", "option11"),
//!     ]),
//! ]);
//!
//! let mut select = Select::new(tree, Box::new(|sel| println!("picked: {sel:?}")))
//!     .multi(true)
//!     .searchable(true)
//!     .clearable(true)
//!     .placeholder("Add Preferred Food Items");
//!
//! let router = ClickRouter::new();
//! select.mount(&router);
//!
//! select.update(SelectEvent::ControlClicked);
//! select.update(SelectEvent::SearchEdited("pizza".into()));
//! select.update(SelectEvent::OptionClicked("option1"));
//! println!("{}", select.view());
//! ```

pub mod event;
pub mod observer;
pub mod option;
pub mod selection;
pub mod select;
pub mod style;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::event::SelectEvent;
    pub use crate::observer::{ClickRouter, ClickSubscription, WidgetId};
    pub use crate::option::{OptionGroup, OptionTree, SelectOption};
    pub use crate::select::{
        ChangeHandler, MenuOpenHandler, SearchHandler, Select, DEFAULT_PLACEHOLDER,
    };
    pub use crate::selection::Selection;
    pub use crate::style::Styles;
}
