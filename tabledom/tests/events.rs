use tabledom::{Document, Element, Event, EventKind, Listeners, Modifiers, BODY_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Table,
    Body,
    Control,
}

fn doc() -> Document {
    Document::new([
        Element::table().id("tbl").child(
            Element::tr().id("tr_1").child(Element::td().id("cell")),
        ),
        Element::checkbox("select_all").id("select_all"),
    ])
}

// ============================================================================
// Event helpers
// ============================================================================

#[test]
fn test_event_kind_and_target() {
    assert_eq!(Event::click("a").kind(), EventKind::Click);
    assert_eq!(Event::change("a").target(), Some("a"));
    let trigger = Event::Trigger { url: "/x".into() };
    assert_eq!(trigger.kind(), EventKind::Trigger);
    assert_eq!(trigger.target(), None);
}

#[test]
fn test_modifiers() {
    assert!(Modifiers::new().none());
    assert!(Modifiers::shift().shift);
    assert!(!Modifiers::ctrl().none());
    match Event::shift_click("a") {
        Event::Click { modifiers, .. } => assert!(modifiers.shift),
        other => panic!("unexpected {other:?}"),
    }
}

// ============================================================================
// Delegation
// ============================================================================

#[test]
fn test_click_bubbles_to_container() {
    let doc = doc();
    let mut listeners = Listeners::new();
    listeners.listen("tbl", EventKind::Click, Handler::Table);

    let hits = listeners.resolve(&doc, &Event::click("cell"));
    assert_eq!(hits, vec![(Handler::Table, "tbl".to_string())]);

    assert!(listeners.resolve(&doc, &Event::click("select_all")).is_empty());
}

#[test]
fn test_bubbling_order_nearest_first() {
    let doc = doc();
    let mut listeners = Listeners::new();
    listeners.listen(BODY_ID, EventKind::Click, Handler::Body);
    listeners.listen("tbl", EventKind::Click, Handler::Table);

    let hits: Vec<Handler> = listeners
        .resolve(&doc, &Event::click("cell"))
        .into_iter()
        .map(|(h, _)| h)
        .collect();
    assert_eq!(hits, vec![Handler::Table, Handler::Body]);
}

#[test]
fn test_kind_must_match() {
    let doc = doc();
    let mut listeners = Listeners::new();
    listeners.listen("select_all", EventKind::Click, Handler::Control);

    assert!(listeners.resolve(&doc, &Event::change("select_all")).is_empty());
    assert_eq!(listeners.resolve(&doc, &Event::click("select_all")).len(), 1);
}

#[test]
fn test_trigger_resolves_on_body() {
    let doc = doc();
    let mut listeners = Listeners::new();
    listeners.listen(BODY_ID, EventKind::Trigger, Handler::Body);

    let hits = listeners.resolve(&doc, &Event::Trigger { url: "/r".into() });
    assert_eq!(hits, vec![(Handler::Body, BODY_ID.to_string())]);
}

#[test]
fn test_duplicate_registration_ignored() {
    let mut listeners = Listeners::new();
    listeners.listen("tbl", EventKind::Click, Handler::Table);
    listeners.listen("tbl", EventKind::Click, Handler::Table);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_unknown_target_reaches_nothing() {
    let doc = doc();
    let mut listeners = Listeners::new();
    listeners.listen(BODY_ID, EventKind::Click, Handler::Body);
    assert!(listeners.resolve(&doc, &Event::click("gone")).is_empty());
}
