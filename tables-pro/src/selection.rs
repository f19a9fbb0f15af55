//! Row selection: per-row checkboxes, select-all-on-page,
//! select-all-matching, shift-click ranges and the live count.

use tabledom::Document;

use crate::config::PageConfig;
use crate::context::PageContext;
use crate::error::Error;
use crate::features::Feature;
use crate::highlight::RowHighlighter;

/// Selection mode derived from the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected.
    None,
    /// Some rows on this page, by row id in document order.
    Partial(Vec<String>),
    /// Every row on this page.
    AllPage(usize),
    /// Every row matching the filter, across pages. Not enumerable here.
    AllMatching,
}

impl SelectionState {
    /// Number of selected rows, `None` while all matching rows are selected.
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::Partial(ids) => Some(ids.len()),
            Self::AllPage(n) => Some(*n),
            Self::AllMatching => None,
        }
    }

    /// The count as displayed, using `sentinel` for all-matching.
    pub fn display(&self, sentinel: &str) -> String {
        self.count()
            .map_or_else(|| sentinel.to_string(), |n| n.to_string())
    }
}

/// Owns the selection behaviour for one page load.
///
/// The only state kept here is the last clicked checkbox, held by element
/// id. Everything else is read back from the document on every call, so
/// rows replaced by a fragment swap are picked up without rebinding.
#[derive(Debug)]
pub struct SelectionController {
    highlighter: RowHighlighter,
    last_clicked: Option<String>,
}

impl SelectionController {
    /// Set up selection and normalize whatever state the server rendered.
    ///
    /// Fails if the select-all control is absent: the whole selection
    /// feature depends on it, even when only select-all-on-page is used.
    pub fn init(cx: &mut PageContext) -> Result<Self, Error> {
        if !cx.features.has(Feature::SelectAll) {
            return Err(Error::MissingControl(cx.config.select_all_id.clone()));
        }

        let mut controller = Self {
            highlighter: RowHighlighter::new(&cx.config),
            last_clicked: None,
        };

        if cx.features.has(Feature::SelectAllPage) && cx.doc.is_checked(&cx.config.select_all_page_id) {
            controller.select_all_page(cx);
        }
        if cx.doc.is_checked(&cx.config.select_all_id) {
            controller.select_all(cx);
        }
        controller.refresh_count(cx);

        Ok(controller)
    }

    pub fn highlighter(&self) -> &RowHighlighter {
        &self.highlighter
    }

    /// Id of the checkbox a shift-click range starts from.
    pub fn last_clicked(&self) -> Option<&str> {
        self.last_clicked.as_deref()
    }

    /// A row checkbox was clicked; its checked state is already toggled.
    pub fn on_row_checkbox_click(&mut self, cx: &mut PageContext, checkbox: &str, shift: bool) {
        if cx.features.has(Feature::SelectAllPage) {
            let page_id = cx.config.select_all_page_id.clone();
            cx.set_checked(&page_id, false);
        }

        let checked = cx.doc.is_checked(checkbox);
        self.highlighter.sync_checkbox(&mut cx.doc, checkbox);

        if let (true, Some(previous)) = (shift, self.last_clicked.as_deref()) {
            let boxes = cx.doc.ids_by_class(&cx.config.checkbox_class);
            let start = boxes.iter().position(|id| id == checkbox);
            let end = boxes.iter().position(|id| id == previous);
            match (start, end) {
                (Some(start), Some(end)) => {
                    let range = start.min(end)..=start.max(end);
                    log::debug!("[selection] range {range:?} -> {checked}");
                    for id in &boxes[range] {
                        cx.set_checked(id, checked);
                        self.highlighter.sync_checkbox(&mut cx.doc, id);
                    }
                }
                _ => log::debug!("[selection] range anchor #{previous} no longer present"),
            }
        }

        self.last_clicked = Some(checkbox.to_string());
        self.refresh_count(cx);
    }

    /// Apply the select-all-on-page control to every row.
    pub fn select_all_page(&mut self, cx: &mut PageContext) {
        let checked = cx.doc.is_checked(&cx.config.select_all_page_id);
        log::debug!("[selection] select all on page -> {checked}");

        let container = cx.doc.parent(&cx.config.select_all_id).map(|p| p.id.clone());
        if let Some(el) = container.and_then(|id| cx.doc.get_mut(&id)) {
            el.hidden = !checked;
        }

        for id in cx.doc.ids_by_class(&cx.config.checkbox_class) {
            cx.set_checked(&id, checked);
            self.highlighter.sync_checkbox(&mut cx.doc, &id);
        }

        self.last_clicked = None;
        self.refresh_count(cx);
    }

    /// Enter or leave the all-matching mode from the select-all control.
    ///
    /// Entering checks and locks every row checkbox and the page control.
    /// Leaving unlocks them and clears the page selection.
    pub fn select_all(&mut self, cx: &mut PageContext) {
        let checked = cx.doc.is_checked(&cx.config.select_all_id);
        log::debug!("[selection] select all matching -> {checked}");

        let page_id = cx.config.select_all_page_id.clone();
        let boxes = cx.doc.ids_by_class(&cx.config.checkbox_class);

        if checked {
            if cx.features.has(Feature::Count) {
                let (count_id, sentinel) = (cx.config.count_id.clone(), cx.config.all_sentinel.clone());
                cx.set_text(&count_id, &sentinel);
            }
            if cx.features.has(Feature::SelectAllPage) {
                cx.set_disabled(&page_id, true);
            }
            if cx.features.has(Feature::ActionMenu) {
                let menu_id = cx.config.action_menu_id.clone();
                cx.set_disabled(&menu_id, false);
            }
            for id in &boxes {
                if let Some(el) = cx.doc.get_mut(id) {
                    el.checked = true;
                    el.disabled = true;
                }
                self.highlighter.sync_checkbox(&mut cx.doc, id);
            }
            self.last_clicked = None;
            self.refresh_count(cx);
        } else {
            for id in &boxes {
                cx.set_disabled(id, false);
            }
            if cx.features.has(Feature::SelectAllPage) {
                cx.set_disabled(&page_id, false);
                cx.set_checked(&page_id, false);
            }
            self.select_all_page(cx);
        }
    }

    /// Re-sync row highlighting and the displayed count with the checkboxes.
    /// Does nothing while all matching rows are selected.
    pub fn refresh_count(&self, cx: &mut PageContext) {
        if cx.doc.is_checked(&cx.config.select_all_id) {
            return;
        }

        let mut count = 0;
        for id in cx.doc.ids_by_class(&cx.config.checkbox_class) {
            if cx.doc.is_checked(&id) {
                count += 1;
            }
            self.highlighter.sync_checkbox(&mut cx.doc, &id);
        }

        if cx.features.has(Feature::Count) {
            let count_id = cx.config.count_id.clone();
            cx.set_text(&count_id, &count.to_string());
        }
        if cx.features.has(Feature::ActionMenu) {
            let menu_id = cx.config.action_menu_id.clone();
            cx.set_disabled(&menu_id, count == 0);
        }
    }

    /// Current selection mode.
    pub fn state(doc: &Document, config: &PageConfig) -> SelectionState {
        if doc.is_checked(&config.select_all_id) {
            return SelectionState::AllMatching;
        }
        let boxes = doc.ids_by_class(&config.checkbox_class);
        let selected = Self::selected_ids(doc, config);
        if selected.is_empty() {
            SelectionState::None
        } else if selected.len() == boxes.len() {
            SelectionState::AllPage(selected.len())
        } else {
            SelectionState::Partial(selected)
        }
    }

    /// Row ids of checked rows, in document order.
    pub fn selected_ids(doc: &Document, config: &PageConfig) -> Vec<String> {
        doc.ids_by_class(&config.checkbox_class)
            .into_iter()
            .filter(|id| doc.is_checked(id))
            .filter_map(|id| {
                let row = doc.closest_tag(&id, "tr")?;
                config.row_key(&row.id).map(str::to_string)
            })
            .collect()
    }
}
