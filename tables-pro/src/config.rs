//! DOM contract names.

use serde::Deserialize;

/// Names of the ids, classes, attributes and parameters the page reads.
///
/// The defaults match the markup the table server renders. Hosts with
/// different templates can override any field, either with the setters or
/// by deserializing a partial JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the "select all matching filter" checkbox.
    pub select_all_id: String,
    /// Id of the "select all on this page" checkbox.
    pub select_all_page_id: String,
    /// Id of the element showing the selected count.
    pub count_id: String,
    /// Id of the bulk-action control enabled while something is selected.
    pub action_menu_id: String,
    /// Id of the filter form submitted by auto-submit controls.
    pub filter_form_id: String,
    /// Id of the results region refreshed by filters and triggers.
    pub results_id: String,
    /// Id of the anchor the breakpoint fetch is scoped to.
    pub media_query_id: String,
    /// Id of the element holding the breakpoint JSON.
    pub breakpoints_id: String,

    /// Control name of row checkboxes.
    pub checkbox_name: String,
    /// Class carried by row checkboxes.
    pub checkbox_class: String,
    /// Class of controls that submit the filter form on change.
    pub auto_submit_class: String,
    /// Classes a filter group must carry to be refetched in place.
    pub filter_group_classes: Vec<String>,

    /// Prefix of row element ids, followed by the row identifier.
    pub row_prefix: String,
    /// Prefix of the id assigned to a cell entering edit mode.
    pub cell_prefix: String,
    /// Marker class of cells that can be edited inline.
    pub editable_class: String,
    /// Marker class present while a cell is mid-edit.
    pub editing_class: String,

    /// Highlight class applied to selected rows without an override.
    pub highlight_class: String,
    /// Row data attribute overriding the highlight class.
    pub highlight_attr: String,
    /// Count text shown while every matching row is selected.
    pub all_sentinel: String,

    /// Query parameter carrying the viewport width.
    pub width_param: String,

    /// Table data attribute with the row navigation URL.
    pub url_attr: String,
    /// Table data attribute requiring the row id to be appended.
    pub pk_attr: String,
    /// Table data attribute selecting the navigation mode.
    pub method_attr: String,
    /// Table data attribute naming the fetch target region.
    pub target_attr: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            select_all_id: "select_all".to_string(),
            select_all_page_id: "select_all_page".to_string(),
            count_id: "count".to_string(),
            action_menu_id: "selectActionMenu".to_string(),
            filter_form_id: "id_filter_form".to_string(),
            results_id: "table_data".to_string(),
            media_query_id: "media_query".to_string(),
            breakpoints_id: "breakpoints".to_string(),
            checkbox_name: "select-checkbox".to_string(),
            checkbox_class: "select-checkbox".to_string(),
            auto_submit_class: "auto-submit".to_string(),
            filter_group_classes: vec!["form-group".to_string(), "hx-get".to_string()],
            row_prefix: "tr_".to_string(),
            cell_prefix: "td_".to_string(),
            editable_class: "td_edit".to_string(),
            editing_class: "td_editing".to_string(),
            highlight_class: "table-active".to_string(),
            highlight_attr: "selected".to_string(),
            all_sentinel: "All".to_string(),
            width_param: "_width".to_string(),
            url_attr: "url".to_string(),
            pk_attr: "pk".to_string(),
            method_attr: "method".to_string(),
            target_attr: "target".to_string(),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn select_all_id(mut self, id: impl Into<String>) -> Self {
        self.select_all_id = id.into();
        self
    }

    pub fn select_all_page_id(mut self, id: impl Into<String>) -> Self {
        self.select_all_page_id = id.into();
        self
    }

    pub fn results_id(mut self, id: impl Into<String>) -> Self {
        self.results_id = id.into();
        self
    }

    pub fn row_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    pub fn width_param(mut self, param: impl Into<String>) -> Self {
        self.width_param = param.into();
        self
    }

    /// Row identifier encoded in a row element id, if it has the row prefix.
    pub fn row_key<'a>(&self, row_element_id: &'a str) -> Option<&'a str> {
        row_element_id.strip_prefix(self.row_prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"results_id": "results", "row_prefix": "row-"}"#)
            .unwrap();
        assert_eq!(config.results_id, "results");
        assert_eq!(config.row_key("row-7"), Some("7"));
        assert_eq!(config.select_all_id, "select_all");
    }

    #[test]
    fn row_key_requires_prefix() {
        let config = PageConfig::default();
        assert_eq!(config.row_key("tr_42"), Some("42"));
        assert_eq!(config.row_key("42"), None);
    }
}
