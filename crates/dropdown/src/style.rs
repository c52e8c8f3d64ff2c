//! Styles for the widget's rendered output.
//!
//! Rendering is plain text decorated with [`crossterm::style::ContentStyle`];
//! every visual element the widget emits has a slot here so hosts can
//! restyle without touching the widget.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(mut style: ContentStyle) -> ContentStyle {
    style.attributes.set(Attribute::Bold);
    style
}

fn dim() -> ContentStyle {
    ContentStyle {
        attributes: Attributes::from(Attribute::Dim),
        ..ContentStyle::default()
    }
}

/// Style slots for every element a select widget renders.
#[derive(Debug, Clone)]
pub struct Styles {
    /// A single selected value's label on the control.
    pub value: ContentStyle,
    /// The placeholder text when nothing is selected.
    pub placeholder: ContentStyle,
    /// A multi-selection chip.
    pub chip: ContentStyle,
    /// The per-chip remove affix.
    pub chip_remove: ContentStyle,
    /// The clear-all affix.
    pub clear_all: ContentStyle,
    /// A group heading inside the menu.
    pub group_label: ContentStyle,
    /// An unselected option row.
    pub option: ContentStyle,
    /// A selected option row.
    pub selected_option: ContentStyle,
    /// The prefix marking a selected option row.
    pub selected_prefix: ContentStyle,
    /// The search prompt inside the menu.
    pub search_prompt: ContentStyle,
    /// The line shown when no options survive filtering.
    pub no_options: ContentStyle,
    /// Applied to the whole control when the widget is disabled.
    pub disabled: ContentStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            value: ContentStyle::default(),
            placeholder: fg(Color::AnsiValue(240)),
            chip: fg(Color::AnsiValue(212)),
            chip_remove: fg(Color::AnsiValue(240)),
            clear_all: fg(Color::AnsiValue(240)),
            group_label: bold(ContentStyle::default()),
            option: ContentStyle::default(),
            selected_option: bold(fg(Color::AnsiValue(212))),
            selected_prefix: fg(Color::AnsiValue(212)),
            search_prompt: fg(Color::AnsiValue(240)),
            no_options: fg(Color::AnsiValue(240)),
            disabled: dim(),
        }
    }
}

impl Styles {
    /// Creates the default style set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mark_selection() {
        let styles = Styles::new();
        assert!(styles.selected_option.attributes.has(Attribute::Bold));
        assert_eq!(
            styles.selected_option.foreground_color,
            Some(Color::AnsiValue(212))
        );
    }

    #[test]
    fn test_disabled_is_dim() {
        assert!(Styles::new().disabled.attributes.has(Attribute::Dim));
    }
}
