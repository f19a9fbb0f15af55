//! Table cell clicks: row navigation, inline edit, and edit commit.

use std::fmt;
use std::str::FromStr;

use tabledom::Document;

use crate::config::PageConfig;
use crate::context::PageContext;
use crate::remote::Method;

/// Composite identity of a cell put into edit mode.
///
/// Displays as `<row>_<column>_<width>`. The element id given to the cell
/// is the configured cell prefix followed by this string, which is how the
/// server decodes which record and column is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellId {
    pub row: String,
    pub column: usize,
    pub width: u32,
}

impl CellId {
    pub fn new(row: impl Into<String>, column: usize, width: u32) -> Self {
        Self {
            row: row.into(),
            column,
            width,
        }
    }

    /// Element id for this cell under `prefix`.
    pub fn element_id(&self, prefix: &str) -> String {
        format!("{prefix}{self}")
    }

    /// Parse either the bare composite id or an element id with `prefix`.
    ///
    /// Column and width are taken from the right, so row ids may contain `_`.
    pub fn parse(s: &str, prefix: &str) -> Option<Self> {
        let s = s.strip_prefix(prefix).unwrap_or(s);
        let mut parts = s.rsplitn(3, '_');
        let width = parts.next()?.parse().ok()?;
        let column = parts.next()?.parse().ok()?;
        let row = parts.next().filter(|r| !r.is_empty())?;
        Some(Self::new(row, column, width))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.row, self.column, self.width)
    }
}

/// How a table with a row URL reacts to a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Navigate the browser to the row URL.
    Direct,
    /// Fetch the row URL into the table's target region.
    Fetch,
}

impl FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" | "direct" => Ok(Self::Direct),
            "hxget" | "fetch" | "ajax" => Ok(Self::Fetch),
            other => Err(format!("unknown navigation mode: {other}")),
        }
    }
}

/// Whether a cell is currently open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEditState {
    Viewing,
    /// A cell is mid-edit inside the row with this element id.
    Editing { row: String },
}

impl CellEditState {
    /// Detect the edit state from the editing marker in the document.
    pub fn detect(doc: &Document, config: &PageConfig) -> Self {
        let Some(marker) = doc.first_by_class(&config.editing_class) else {
            return Self::Viewing;
        };
        match doc.closest_tag(&marker, "tr") {
            Some(row) => Self::Editing {
                row: row.id.clone(),
            },
            None => {
                log::debug!("[edit] editing marker #{marker} outside any row");
                Self::Viewing
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Routes clicks on table cells.
///
/// At most one cell is open at a time: while any cell carries the editing
/// marker, the next cell click anywhere in the table saves that row instead
/// of doing anything else.
#[derive(Debug, Default)]
pub struct InlineEditController {
    requested: Option<CellId>,
}

impl InlineEditController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell most recently asked to enter edit mode, until it is saved.
    pub fn requested(&self) -> Option<&CellId> {
        self.requested.as_ref()
    }

    /// A cell (`td`) was clicked.
    pub fn on_cell_click(&mut self, cx: &mut PageContext, cell: &str) {
        if let CellEditState::Editing { row } = CellEditState::detect(&cx.doc, &cx.config) {
            self.commit(cx, &row);
            return;
        }

        let Some(row) = cx.doc.closest_tag(cell, "tr") else {
            log::debug!("[edit] cell #{cell} is not inside a row");
            return;
        };
        let row_element_id = row.id.clone();
        let Some(row_key) = cx.config.row_key(&row_element_id).map(str::to_string) else {
            log::debug!("[edit] row #{row_element_id} has no row id");
            return;
        };
        let Some(table) = cx.doc.closest_tag(cell, "table") else {
            return;
        };

        let row_url = table
            .get_data(&cx.config.url_attr)
            .filter(|url| !url.is_empty())
            .cloned();
        let needs_pk = table
            .get_data(&cx.config.pk_attr)
            .is_some_and(|pk| !pk.is_empty());
        let mode = table.get_data(&cx.config.method_attr).cloned();
        let target = table.get_data(&cx.config.target_attr).cloned();

        if let Some(mut url) = row_url {
            if needs_pk {
                url.push_str(&row_key);
            }
            match mode.as_deref().map(str::parse::<NavigationMode>) {
                Some(Ok(NavigationMode::Direct)) => cx.navigate(&url),
                Some(Ok(NavigationMode::Fetch)) => {
                    let Some(target) = target else {
                        log::warn!("[edit] table declares fetch navigation without a target");
                        return;
                    };
                    let target = target.trim_start_matches('#').to_string();
                    cx.fetch(Method::Get, &url, &row_element_id, &target, Vec::new());
                }
                Some(Err(e)) => log::debug!("[edit] {e}"),
                None => log::debug!("[edit] table has a row URL but no navigation mode"),
            }
            return;
        }

        let editable = cx
            .doc
            .get(cell)
            .is_some_and(|el| el.has_class(&cx.config.editable_class));
        if editable {
            self.open(cx, cell, row_key);
        }
    }

    fn open(&mut self, cx: &mut PageContext, cell: &str, row_key: String) {
        let column = cx.doc.sibling_index(cell).unwrap_or(0);
        let cell_id = CellId::new(row_key, column, cx.doc.outer_width());
        let element_id = cell_id.element_id(&cx.config.cell_prefix);

        if let Some(el) = cx.doc.get_mut(cell) {
            el.id = element_id.clone();
        }
        log::debug!("[edit] open cell {cell_id}");
        cx.fetch(Method::Get, "", &element_id, &element_id, Vec::new());
        self.requested = Some(cell_id);
    }

    /// Save the row holding the open cell. The server re-renders the row
    /// in viewing mode.
    fn commit(&mut self, cx: &mut PageContext, row: &str) {
        let values = cx.doc.form_values(row);
        log::debug!("[edit] commit #{row} ({} values)", values.len());
        cx.fetch(Method::Put, "", row, row, values);
        self.requested = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_id_display() {
        let id = CellId::new("42", 3, 1024);
        assert_eq!(id.to_string(), "42_3_1024");
        assert_eq!(id.element_id("td_"), "td_42_3_1024");
    }

    #[test]
    fn cell_id_parse_either_form() {
        let expected = CellId::new("42", 3, 1024);
        assert_eq!(CellId::parse("td_42_3_1024", "td_"), Some(expected.clone()));
        assert_eq!(CellId::parse("42_3_1024", "td_"), Some(expected));
        assert_eq!(
            CellId::parse("td_a_b_0_900", "td_"),
            Some(CellId::new("a_b", 0, 900))
        );
    }

    #[test]
    fn cell_id_parse_rejects_garbage() {
        assert_eq!(CellId::parse("td_42_x_1024", "td_"), None);
        assert_eq!(CellId::parse("td_3_1024", "td_"), None);
        assert_eq!(CellId::parse("", "td_"), None);
    }

    #[test]
    fn navigation_mode_names() {
        assert_eq!("get".parse::<NavigationMode>(), Ok(NavigationMode::Direct));
        assert_eq!("hxget".parse::<NavigationMode>(), Ok(NavigationMode::Fetch));
        assert!("post".parse::<NavigationMode>().is_err());
    }
}
