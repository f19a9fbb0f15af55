//! Row highlighting.

use tabledom::{Document, Element};

use crate::config::PageConfig;

/// Keeps a row's highlight class equal to its checkbox state.
///
/// A row may name its own class through the override data attribute;
/// otherwise the default class is used. No state beyond the names.
#[derive(Debug, Clone)]
pub struct RowHighlighter {
    default_class: String,
    override_attr: String,
}

impl RowHighlighter {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            default_class: config.highlight_class.clone(),
            override_attr: config.highlight_attr.clone(),
        }
    }

    /// The highlight class for `row`.
    pub fn class_for<'a>(&'a self, row: &'a Element) -> &'a str {
        row.get_data(&self.override_attr)
            .map_or(self.default_class.as_str(), String::as_str)
    }

    pub fn apply(&self, row: &mut Element, checked: bool) {
        let class = self.class_for(row).to_string();
        if checked {
            row.add_class(&class);
        } else {
            row.remove_class(&class);
        }
    }

    pub fn is_highlighted(&self, row: &Element) -> bool {
        row.has_class(self.class_for(row))
    }

    /// Highlight the row containing `checkbox` according to its state.
    /// Returns false if the checkbox or its row is gone.
    pub fn sync_checkbox(&self, doc: &mut Document, checkbox: &str) -> bool {
        let checked = doc.is_checked(checkbox);
        let Some(row_id) = doc.closest_tag(checkbox, "tr").map(|row| row.id.clone()) else {
            return false;
        };
        match doc.get_mut(&row_id) {
            Some(row) => {
                self.apply(row, checked);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_class_added_and_removed() {
        let highlighter = RowHighlighter::new(&PageConfig::default());
        let mut row = Element::tr().class("odd");

        highlighter.apply(&mut row, true);
        assert!(row.has_class("table-active"));
        assert!(highlighter.is_highlighted(&row));

        highlighter.apply(&mut row, false);
        assert!(!row.has_class("table-active"));
        assert!(row.has_class("odd"));
    }

    #[test]
    fn row_override_wins() {
        let highlighter = RowHighlighter::new(&PageConfig::default());
        let mut row = Element::tr().data("selected", "bg-warning");

        highlighter.apply(&mut row, true);
        assert!(row.has_class("bg-warning"));
        assert!(!row.has_class("table-active"));
    }

    #[test]
    fn apply_is_idempotent() {
        let highlighter = RowHighlighter::new(&PageConfig::default());
        let mut row = Element::tr();
        highlighter.apply(&mut row, true);
        highlighter.apply(&mut row, true);
        assert_eq!(row.classes, vec!["table-active".to_string()]);
    }
}
