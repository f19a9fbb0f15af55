mod common;

use common::*;
use tables_pro::remote::{FetchRequest, Fragment, Method, Response};
use tables_pro::SelectionState;
use tabledom::{Document, Element, Modifiers};

const N: usize = 6;

fn click(h: &mut Harness, id: &str) {
    h.page.click(id, Modifiers::new());
}

fn shift_click(h: &mut Harness, id: &str) {
    h.page.click(id, Modifiers::shift());
}

// ============================================================================
// Individual toggles
// ============================================================================

#[test]
fn test_count_tracks_individual_toggles() {
    let mut h = interactive(page_doc(N));
    assert_eq!(count_text(&h.page).as_deref(), Some("0"));

    for (id, expected) in [("cb_0", "1"), ("cb_3", "2"), ("cb_5", "3"), ("cb_3", "2"), ("cb_0", "1")] {
        click(&mut h, id);
        assert_eq!(count_text(&h.page).as_deref(), Some(expected), "after {id}");
        assert_eq!(checked(&h.page, N).len().to_string(), expected);
    }
    assert_eq!(checked(&h.page, N), vec![5]);
}

#[test]
fn test_highlight_follows_checkbox() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_2");
    assert_eq!(highlighted(&h.page, N), vec![2]);
    click(&mut h, "cb_2");
    assert!(highlighted(&h.page, N).is_empty());
}

#[test]
fn test_row_highlight_override() {
    let doc = Document::new([
        toolbar(),
        Element::table().id("tbl").child(
            Element::tr().id("tr_9").data("selected", "bg-warning").child(
                Element::td().child(Element::checkbox("select-checkbox").id("cb_9").class("select-checkbox")),
            ),
        ),
    ]);
    let mut h = interactive(doc);
    click(&mut h, "cb_9");
    let row = h.page.doc().get("tr_9").unwrap();
    assert!(row.has_class("bg-warning"));
    assert!(!row.has_class("table-active"));
}

#[test]
fn test_row_click_clears_select_all_page() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "select_all_page");
    assert!(h.page.doc().is_checked("select_all_page"));

    click(&mut h, "cb_1");
    assert!(!h.page.doc().is_checked("select_all_page"));
    assert_eq!(count_text(&h.page).as_deref(), Some("5"));
}

// ============================================================================
// Shift-click ranges
// ============================================================================

#[test]
fn test_shift_click_selects_forward_range() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_1");
    shift_click(&mut h, "cb_4");

    assert_eq!(checked(&h.page, N), vec![1, 2, 3, 4]);
    assert_eq!(highlighted(&h.page, N), vec![1, 2, 3, 4]);
    assert_eq!(count_text(&h.page).as_deref(), Some("4"));
}

#[test]
fn test_shift_click_selects_backward_range() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_4");
    shift_click(&mut h, "cb_1");

    assert_eq!(checked(&h.page, N), vec![1, 2, 3, 4]);
}

#[test]
fn test_shift_click_applies_new_state_to_range() {
    let mut h = interactive(page_doc(N));
    for i in 0..N {
        click(&mut h, &format!("cb_{i}"));
    }
    click(&mut h, "cb_2");
    shift_click(&mut h, "cb_4");

    assert_eq!(checked(&h.page, N), vec![0, 1, 5]);
    assert_eq!(highlighted(&h.page, N), vec![0, 1, 5]);
    assert_eq!(count_text(&h.page).as_deref(), Some("3"));
}

#[test]
fn test_shift_without_previous_click_is_single() {
    let mut h = interactive(page_doc(N));
    shift_click(&mut h, "cb_3");
    assert_eq!(checked(&h.page, N), vec![3]);
}

#[test]
fn test_shift_range_resets_after_select_all_page() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_0");
    click(&mut h, "select_all_page");
    click(&mut h, "select_all_page");
    assert!(h.page.selection().unwrap().last_clicked().is_none());

    shift_click(&mut h, "cb_4");
    assert_eq!(checked(&h.page, N), vec![4]);
}

#[test]
fn test_shift_range_with_replaced_anchor_is_single() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_0");

    let request = FetchRequest {
        method: Method::Get,
        url: String::new(),
        source: "table_data".into(),
        source_name: None,
        target: "table_data".into(),
        values: Vec::new(),
        current_url: LOCATION.into(),
        generation: 0,
    };
    h.page.apply_response(Response::swap(
        request,
        Fragment::Elements(vec![table(10..14)]),
    ));
    assert!(h.page.doc().get("cb_0").is_none());

    shift_click(&mut h, "cb_12");
    assert!(h.page.doc().is_checked("cb_12"));
    assert!(!h.page.doc().is_checked("cb_11"));
    assert_eq!(count_text(&h.page).as_deref(), Some("1"));
}

// ============================================================================
// Select all on page
// ============================================================================

#[test]
fn test_select_all_page_checks_every_row_and_reveals_select_all() {
    let mut h = interactive(page_doc(N));
    assert!(is_hidden(&h.page, "select_all_container"));

    click(&mut h, "select_all_page");
    assert_eq!(checked(&h.page, N), (0..N).collect::<Vec<_>>());
    assert_eq!(highlighted(&h.page, N), (0..N).collect::<Vec<_>>());
    assert!(!is_hidden(&h.page, "select_all_container"));
    assert_eq!(count_text(&h.page).as_deref(), Some("6"));
    assert_eq!(h.page.selection_state(), SelectionState::AllPage(N));

    click(&mut h, "select_all_page");
    assert!(checked(&h.page, N).is_empty());
    assert!(highlighted(&h.page, N).is_empty());
    assert!(is_hidden(&h.page, "select_all_container"));
    assert_eq!(count_text(&h.page).as_deref(), Some("0"));
    assert_eq!(h.page.selection_state(), SelectionState::None);
}

// ============================================================================
// Select all matching
// ============================================================================

#[test]
fn test_select_all_locks_rows_and_shows_sentinel() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "select_all_page");
    click(&mut h, "select_all");

    assert_eq!(count_text(&h.page).as_deref(), Some("All"));
    assert!(is_disabled(&h.page, "select_all_page"));
    for i in 0..N {
        assert!(is_disabled(&h.page, &format!("cb_{i}")));
    }
    assert_eq!(checked(&h.page, N).len(), N);
    assert_eq!(h.page.selection_state(), SelectionState::AllMatching);
    assert_eq!(h.page.selection_state().display("All"), "All");

    // Locked rows ignore clicks.
    click(&mut h, "cb_2");
    assert!(h.page.doc().is_checked("cb_2"));
    assert_eq!(count_text(&h.page).as_deref(), Some("All"));
}

#[test]
fn test_leaving_select_all_unlocks_and_recounts() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "select_all_page");
    click(&mut h, "select_all");
    click(&mut h, "select_all");

    assert!(!is_disabled(&h.page, "select_all_page"));
    assert!(!h.page.doc().is_checked("select_all_page"));
    for i in 0..N {
        assert!(!is_disabled(&h.page, &format!("cb_{i}")));
    }
    assert!(checked(&h.page, N).is_empty());
    assert_eq!(count_text(&h.page).as_deref(), Some("0"));
    assert_eq!(h.page.selection_state(), SelectionState::None);

    click(&mut h, "cb_1");
    assert_eq!(count_text(&h.page).as_deref(), Some("1"));
}

#[test]
fn test_refresh_count_is_noop_while_all_matching() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "select_all_page");
    click(&mut h, "select_all");
    h.page.refresh_count();
    assert_eq!(count_text(&h.page).as_deref(), Some("All"));
}

// ============================================================================
// Action menu
// ============================================================================

#[test]
fn test_action_menu_enabled_only_with_selection() {
    let mut h = interactive(page_doc(N));
    assert!(is_disabled(&h.page, "selectActionMenu"));

    click(&mut h, "cb_0");
    assert!(!is_disabled(&h.page, "selectActionMenu"));

    click(&mut h, "cb_0");
    assert!(is_disabled(&h.page, "selectActionMenu"));

    click(&mut h, "select_all_page");
    click(&mut h, "select_all");
    assert!(!is_disabled(&h.page, "selectActionMenu"));
}

// ============================================================================
// Refresh and initial state
// ============================================================================

#[test]
fn test_refresh_count_is_idempotent() {
    let mut h = interactive(page_doc(N));
    click(&mut h, "cb_1");
    click(&mut h, "cb_3");

    h.page.refresh_count();
    let first = (count_text(&h.page), highlighted(&h.page, N));
    h.page.refresh_count();
    let second = (count_text(&h.page), highlighted(&h.page, N));

    assert_eq!(first, second);
    assert_eq!(first, (Some("2".to_string()), vec![1, 3]));
}

#[test]
fn test_init_normalizes_server_rendered_selection() {
    let mut doc = page_doc(N);
    doc.get_mut("cb_1").unwrap().checked = true;
    doc.get_mut("cb_4").unwrap().checked = true;

    let h = interactive(doc);
    assert_eq!(count_text(&h.page).as_deref(), Some("2"));
    assert_eq!(highlighted(&h.page, N), vec![1, 4]);
    assert_eq!(
        h.page.selection_state(),
        SelectionState::Partial(vec!["1".to_string(), "4".to_string()])
    );
}

#[test]
fn test_init_restores_select_all_matching() {
    let mut doc = page_doc(N);
    doc.get_mut("select_all_page").unwrap().checked = true;
    doc.get_mut("select_all").unwrap().checked = true;

    let h = interactive(doc);
    assert_eq!(count_text(&h.page).as_deref(), Some("All"));
    assert!(is_disabled(&h.page, "cb_0"));
    assert!(!is_hidden(&h.page, "select_all_container"));
}

#[test]
fn test_selection_requires_select_all_control() {
    let doc = Document::new([
        Element::checkbox("select_all_page").id("select_all_page"),
        Element::span().id("count"),
        table(0..N),
    ]);
    let mut h = interactive(doc);
    assert!(h.page.selection().is_none());

    click(&mut h, "cb_0");
    assert!(h.page.doc().is_checked("cb_0"));
    assert!(highlighted(&h.page, N).is_empty());
    assert_eq!(count_text(&h.page), None);

    click(&mut h, "select_all_page");
    assert_eq!(checked(&h.page, N), vec![0]);
}

#[test]
fn test_optional_controls_may_be_missing() {
    let doc = Document::new([
        Element::div().child(Element::checkbox("select_all").id("select_all")),
        table(0..N),
    ]);
    let mut h = interactive(doc);
    click(&mut h, "cb_0");
    shift_click(&mut h, "cb_2");
    assert_eq!(checked(&h.page, N), vec![0, 1, 2]);
    assert_eq!(h.page.selection_state().count(), Some(3));
}
