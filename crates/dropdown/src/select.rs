//! The select widget: state machine, selection logic, and rendering.
//!
//! [`Select`] is a controlled component. It owns only transient UI state
//! (whether the menu is open and the current search text); the committed
//! value lives with the host, flows in through [`Select::set_value`], and
//! flows back out through the change handler on every selection or clear.
//!
//! # Example
//!
//! ```rust
//! use dropdown::prelude::*;
//!
//! let tree = OptionTree::Flat(vec![
//!     SelectOption::new("Pizza", "option1"),
//!     SelectOption::new("Juice", "option11"),
//! ]);
//!
//! let mut select = Select::new(tree, Box::new(|sel| println!("{sel:?}")))
//!     .clearable(true)
//!     .searchable(true);
//!
//! select.update(SelectEvent::ControlClicked);
//! assert!(select.is_open());
//! println!("{}", select.view());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::event::SelectEvent;
use crate::observer::{ClickRouter, ClickSubscription, WidgetId};
use crate::option::{OptionTree, SelectOption};
use crate::selection::Selection;
use crate::style::Styles;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> WidgetId {
    LAST_ID.fetch_add(1, Ordering::SeqCst)
}

/// Handler invoked with the replacement value on every selection change.
pub type ChangeHandler<T> = Box<dyn FnMut(Selection<T>) + Send>;

/// Handler invoked once per closed-to-open transition.
pub type MenuOpenHandler = Box<dyn FnMut() + Send>;

/// Handler invoked with the raw new text on every search edit.
pub type SearchHandler = Box<dyn FnMut(&str) + Send>;

/// Default placeholder shown when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// A dropdown select widget with single/multi selection, grouped options,
/// optional search filtering, and optional clear affordances.
pub struct Select<T: Clone + PartialEq + Send + 'static> {
    id: WidgetId,
    options: OptionTree<T>,
    value: Selection<T>,
    multi: bool,
    clearable: bool,
    searchable: bool,
    disabled: bool,
    placeholder: String,
    width: usize,
    styles: Styles,

    // Transient UI state; everything else is host-owned.
    open: bool,
    search: String,

    on_change: ChangeHandler<T>,
    on_menu_open: Option<MenuOpenHandler>,
    on_search: Option<SearchHandler>,
    subscription: Option<ClickSubscription>,
}

impl<T: Clone + PartialEq + Send + 'static> Select<T> {
    /// Creates a widget over `options`, reporting changes to `on_change`.
    ///
    /// The menu starts closed with an empty search term.
    #[must_use]
    pub fn new(options: OptionTree<T>, on_change: ChangeHandler<T>) -> Self {
        Self {
            id: next_id(),
            options,
            value: Selection::None,
            multi: false,
            clearable: false,
            searchable: false,
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            width: 40,
            styles: Styles::default(),
            open: false,
            search: String::new(),
            on_change,
            on_menu_open: None,
            on_search: None,
            subscription: None,
        }
    }

    /// Enables multi-selection semantics (toggle on/off, menu stays open).
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Shows clear affixes (per-chip remove and clear-all).
    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Shows a search input inside the open menu.
    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Suppresses all interaction.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets the placeholder shown when nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the controlled value.
    #[must_use]
    pub fn value(mut self, value: Selection<T>) -> Self {
        self.value = value;
        self
    }

    /// Sets the render width labels are truncated to.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the style set.
    #[must_use]
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the menu-open handler.
    #[must_use]
    pub fn on_menu_open(mut self, handler: MenuOpenHandler) -> Self {
        self.on_menu_open = Some(handler);
        self
    }

    /// Sets the search handler.
    #[must_use]
    pub fn on_search(mut self, handler: SearchHandler) -> Self {
        self.on_search = Some(handler);
        self
    }

    /// Updates the controlled value (the host calls this after handling a
    /// change notification).
    pub fn set_value(&mut self, value: Selection<T>) {
        self.value = value;
    }

    /// Replaces the option data.
    pub fn set_options(&mut self, options: OptionTree<T>) {
        self.options = options;
    }

    /// Enables or disables the widget. Disabling an open widget closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.open {
            debug!(id = self.id, "menu closed: widget disabled");
            self.open = false;
        }
    }

    /// This instance's id, used for click routing.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the widget is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The current search text.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// The current controlled value.
    #[must_use]
    pub fn current_value(&self) -> &Selection<T> {
        &self.value
    }

    /// Registers this widget with a document-level click router.
    ///
    /// The subscription is held until [`Select::unmount`] or drop, either of
    /// which deregisters it.
    pub fn mount(&mut self, router: &ClickRouter) {
        self.subscription = Some(router.subscribe(self.id));
    }

    /// Releases the click subscription, if any.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    /// Whether the widget currently holds a click subscription.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// The option tree as currently filtered by the search term.
    ///
    /// Pure and recomputed on demand; the source tree is never mutated.
    #[must_use]
    pub fn filtered_options(&self) -> OptionTree<T> {
        self.options.filtered(&self.search)
    }

    /// Applies one interaction to the widget.
    ///
    /// All state transitions and callback invocations happen synchronously
    /// in here, in event order.
    pub fn update(&mut self, event: SelectEvent<T>) {
        match event {
            SelectEvent::ControlClicked => self.toggle_menu(),
            SelectEvent::OptionClicked(key) => self.option_clicked(&key),
            SelectEvent::ChipRemoveClicked(key) => self.chip_removed(&key),
            SelectEvent::ClearAllClicked => self.clear_all(),
            SelectEvent::SearchEdited(text) => self.search_edited(text),
            SelectEvent::OutsideClicked => self.outside_clicked(),
        }
    }

    fn toggle_menu(&mut self) {
        if self.disabled {
            return;
        }
        if self.open {
            debug!(id = self.id, "menu closed: control clicked");
            self.open = false;
        } else {
            debug!(id = self.id, "menu opened");
            self.open = true;
            if let Some(handler) = self.on_menu_open.as_mut() {
                handler();
            }
        }
    }

    fn option_clicked(&mut self, key: &T) {
        // Option rows only exist while the menu is open.
        if !self.open {
            return;
        }
        let Some(option) = self.options.find(key).cloned() else {
            return;
        };
        if self.multi {
            let next = self.value.toggled(&option);
            trace!(id = self.id, selected = next.len(), "multi selection toggled");
            (self.on_change)(Selection::Many(next));
        } else {
            trace!(id = self.id, label = %option.label, "option selected");
            (self.on_change)(Selection::One(option));
            debug!(id = self.id, "menu closed: option selected");
            self.open = false;
        }
    }

    fn chip_removed(&mut self, key: &T) {
        // Same toggle-off as selecting the chip's option, but never touches
        // the open flag (the click must not reach the control toggle).
        if self.disabled || !self.clearable {
            return;
        }
        let Some(option) = self.value.get(key).cloned() else {
            return;
        };
        let next = self.value.toggled(&option);
        trace!(id = self.id, label = %option.label, "chip removed");
        (self.on_change)(Selection::Many(next));
    }

    fn clear_all(&mut self) {
        if self.disabled || !self.clearable || self.value.is_empty() {
            return;
        }
        debug!(id = self.id, "selection cleared");
        let cleared = if self.multi {
            Selection::Many(Vec::new())
        } else {
            Selection::None
        };
        (self.on_change)(cleared);
        self.search.clear();
    }

    fn search_edited(&mut self, text: String) {
        // The search input only exists while the menu is open.
        if self.disabled || !self.searchable || !self.open {
            return;
        }
        trace!(id = self.id, term = %text, "search edited");
        self.search = text;
        if let Some(handler) = self.on_search.as_mut() {
            handler(&self.search);
        }
    }

    fn outside_clicked(&mut self) {
        if self.open {
            debug!(id = self.id, "menu closed: outside click");
            self.open = false;
        }
    }

    /// Renders the widget: the control line, plus the menu when open.
    #[must_use]
    pub fn view(&self) -> String {
        let mut out = self.control_view();
        if self.open {
            out.push('\n');
            out.push_str(&self.menu_view());
        }
        out
    }

    fn control_view(&self) -> String {
        let styles = &self.styles;
        if self.disabled {
            // One dim style over the whole line instead of per-part color.
            return styles.disabled.apply(self.plain_control_text()).to_string();
        }
        let mut parts: Vec<String> = Vec::new();

        match &self.value {
            Selection::Many(selected) if !selected.is_empty() => {
                for opt in selected {
                    let label = truncate(&opt.label, self.width);
                    let chip = if self.clearable {
                        format!(
                            "{}{}",
                            styles.chip.apply(format!("[{label} ")),
                            styles.chip_remove.apply("×]"),
                        )
                    } else {
                        styles.chip.apply(format!("[{label}]")).to_string()
                    };
                    parts.push(chip);
                }
            }
            Selection::One(opt) => {
                parts.push(styles.value.apply(truncate(&opt.label, self.width)).to_string());
            }
            _ => parts.push(styles.placeholder.apply(&self.placeholder).to_string()),
        }

        if self.clearable && !self.value.is_empty() {
            parts.push(styles.clear_all.apply("×").to_string());
        }

        parts.join(" ")
    }

    fn plain_control_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match &self.value {
            Selection::Many(selected) if !selected.is_empty() => {
                for opt in selected {
                    let label = truncate(&opt.label, self.width);
                    if self.clearable {
                        parts.push(format!("[{label} ×]"));
                    } else {
                        parts.push(format!("[{label}]"));
                    }
                }
            }
            Selection::One(opt) => parts.push(truncate(&opt.label, self.width)),
            _ => parts.push(self.placeholder.clone()),
        }
        if self.clearable && !self.value.is_empty() {
            parts.push("×".to_string());
        }
        parts.join(" ")
    }

    fn menu_view(&self) -> String {
        let styles = &self.styles;
        let mut lines: Vec<String> = Vec::new();

        if self.searchable {
            lines.push(format!(
                "{}{}",
                styles.search_prompt.apply("Search: "),
                self.search,
            ));
        }

        let filtered = self.filtered_options();
        if filtered.is_empty() {
            lines.push(styles.no_options.apply("No options.").to_string());
        } else {
            match &filtered {
                OptionTree::Flat(options) => {
                    for opt in options {
                        lines.push(self.option_line(opt));
                    }
                }
                OptionTree::Grouped(groups) => {
                    for group in groups {
                        lines.push(styles.group_label.apply(&group.label).to_string());
                        for opt in &group.options {
                            lines.push(self.option_line(opt));
                        }
                    }
                }
            }
        }

        lines.join("\n")
    }

    fn option_line(&self, option: &SelectOption<T>) -> String {
        let styles = &self.styles;
        let label = truncate(&option.label, self.width);
        if self.value.contains(&option.value) {
            format!(
                "{}{}",
                styles.selected_prefix.apply("✓ "),
                styles.selected_option.apply(label),
            )
        } else {
            format!("  {}", styles.option.apply(label))
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> std::fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("multi", &self.multi)
            .field("open", &self.open)
            .field("disabled", &self.disabled)
            .field("search", &self.search)
            .field("options", &self.options.len())
            .field("selected", &self.value.len())
            .field("mounted", &self.subscription.is_some())
            .finish()
    }
}

/// Truncates `text` to at most `max` display columns, ellipsized.
fn truncate(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let limit = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
