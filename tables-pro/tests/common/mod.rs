#![allow(dead_code)]

use tables_pro::testing::{RecordingNavigator, RecordingRemote};
use tables_pro::{Page, PageConfig};
use tabledom::{Document, Element};

pub const LOCATION: &str = "http://localhost/movies/";
pub const WIDTH: u32 = 1024;

/// A row `tr_<i>` with a selection checkbox `cb_<i>`, an editable title
/// cell and a read-only year cell.
pub fn row(i: usize) -> Element {
    Element::tr().id(format!("tr_{i}")).children([
        Element::td().id(format!("sel_{i}")).child(
            Element::checkbox("select-checkbox")
                .id(format!("cb_{i}"))
                .class("select-checkbox")
                .value(i.to_string()),
        ),
        Element::td()
            .id(format!("title_{i}"))
            .class("td_edit")
            .child(Element::text(format!("Movie {i}"))),
        Element::td()
            .id(format!("year_{i}"))
            .child(Element::text("1979")),
    ])
}

pub fn rows(ids: impl IntoIterator<Item = usize>) -> Vec<Element> {
    ids.into_iter().map(row).collect()
}

pub fn table(ids: impl IntoIterator<Item = usize>) -> Element {
    Element::table()
        .id("tbl")
        .child(Element::tbody().id("tbody").children(rows(ids)))
}

pub fn toolbar() -> Element {
    Element::div().id("toolbar").children([
        Element::checkbox("select_all_page").id("select_all_page"),
        Element::div()
            .id("select_all_container")
            .hidden(true)
            .child(Element::checkbox("select_all").id("select_all")),
        Element::span().id("count"),
        Element::new("button").id("selectActionMenu"),
    ])
}

/// Toolbar plus a results region holding a table of `n` rows.
pub fn page_doc(n: usize) -> Document {
    Document::new([
        toolbar(),
        Element::div().id("table_data").child(table(0..n)),
    ])
    .with_location(LOCATION)
    .with_outer_width(WIDTH)
}

pub struct Harness {
    pub page: Page,
    pub remote: RecordingRemote,
    pub navigator: RecordingNavigator,
}

pub fn harness(doc: Document) -> Harness {
    let remote = RecordingRemote::new();
    let navigator = RecordingNavigator::new();
    let page = Page::new(doc, PageConfig::default(), remote.clone(), navigator.clone());
    Harness {
        page,
        remote,
        navigator,
    }
}

/// A harness whose page has been loaded without breakpoints.
pub fn interactive(doc: Document) -> Harness {
    let mut h = harness(doc);
    h.page.load().expect("load");
    h
}

pub fn count_text(page: &Page) -> Option<String> {
    page.doc()
        .get("count")
        .and_then(|el| el.text_content())
        .map(str::to_string)
}

/// Indices of checked row checkboxes.
pub fn checked(page: &Page, n: usize) -> Vec<usize> {
    (0..n)
        .filter(|i| page.doc().is_checked(&format!("cb_{i}")))
        .collect()
}

/// Indices of rows carrying the default highlight class.
pub fn highlighted(page: &Page, n: usize) -> Vec<usize> {
    (0..n)
        .filter(|i| {
            page.doc()
                .get(&format!("tr_{i}"))
                .is_some_and(|row| row.has_class("table-active"))
        })
        .collect()
}

pub fn is_disabled(page: &Page, id: &str) -> bool {
    page.doc().get(id).is_some_and(|el| el.disabled)
}

pub fn is_hidden(page: &Page, id: &str) -> bool {
    page.doc().get(id).is_some_and(|el| el.hidden)
}
