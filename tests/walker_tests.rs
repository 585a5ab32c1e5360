use form_state::{
    persist::error::FormStateError,
    screen::element_model::{Element, UiElement},
    state::{
        state_model::{ControlRecord, PageState},
        walker::{
            CaptureOptions, DuplicatePolicy, MAX_CAPTURE_DEPTH, capture_tree, capture_tree_with,
            restore_tree,
        },
    },
};

use crate::common::utils::{button, home_page, panel, radio, text_block, text_box, text_chain};

mod common;

// =========================================================================
// capture_tree
// =========================================================================

#[test]
fn capture_collects_recognized_children() {
    let page = capture_tree(Some(&home_page())).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page["nameBox"], ControlRecord::text(Some("nameBox"), Some("Alice")));
    assert_eq!(page["optA"], ControlRecord::checked(Some("optA"), Some(true)));
}

#[test]
fn capture_skips_root_itself() {
    let root = text_box("root", "ignored").with_child(text_box("inner", "x"));
    let page = capture_tree(Some(&root)).unwrap();

    assert!(!page.contains_key("root"));
    assert!(page.contains_key("inner"));
}

#[test]
fn capture_descends_through_unrecognized_containers() {
    let root = panel(vec![
        button("submit"),
        panel(vec![panel(vec![text_block("deep", "label")])]),
        Element::new("Border").with_child(radio("optB", false)),
    ]);
    let page = capture_tree(Some(&root)).unwrap();

    let names: Vec<_> = page.keys().cloned().collect();
    assert_eq!(names, vec!["deep", "optB"]);
}

#[test]
fn capture_descends_into_recognized_controls() {
    let root = panel(vec![text_box("outer", "o").with_child(text_block("hint", "h"))]);
    let page = capture_tree(Some(&root)).unwrap();

    assert!(page.contains_key("outer"));
    assert!(page.contains_key("hint"));
}

#[test]
fn capture_skips_unnamed_and_empty_names() {
    let root = panel(vec![
        Element::new("TextBox").with_text("anonymous"),
        text_box("", "empty"),
        text_box("named", "kept"),
    ]);
    let page = capture_tree(Some(&root)).unwrap();

    assert_eq!(page.len(), 1);
    assert!(page.contains_key("named"));
}

#[test]
fn capture_never_stores_unknown_kinds() {
    let root = panel(vec![button("ok"), Element::new("CheckBox").named("agree")]);
    let page = capture_tree(Some(&root)).unwrap();
    assert!(page.is_empty());
}

#[test]
fn capture_skips_empty_child_slots() {
    let mut root = panel(vec![text_box("a", "1")]);
    root.children.insert(0, None);
    root.children.push(None);

    let page = capture_tree(Some(&root)).unwrap();
    assert_eq!(page.len(), 1);
}

#[test]
fn capture_missing_root_is_error() {
    let err = capture_tree::<Element>(None).unwrap_err();
    assert!(matches!(err, FormStateError::MissingElement { depth: 0 }));
}

#[test]
fn capture_depth_cap_on_deep_chain() {
    let root = text_chain(25);
    let page = capture_tree(Some(&root)).unwrap();

    // Levels 1..=21 below the root are visited by calls at depth 0..=20.
    assert_eq!(page.len(), MAX_CAPTURE_DEPTH + 1);
    assert!(page.contains_key("c1"));
    assert!(page.contains_key("c21"));
    assert!(!page.contains_key("c22"));
    assert!(!page.contains_key("c25"));
}

#[test]
fn capture_shallow_chain_is_complete() {
    let page = capture_tree(Some(&text_chain(5))).unwrap();
    assert_eq!(page.len(), 5);
}

#[test]
fn capture_custom_depth() {
    let options = CaptureOptions {
        max_depth: 2,
        ..CaptureOptions::default()
    };
    let page = capture_tree_with(Some(&text_chain(10)), &options).unwrap();

    let names: Vec<_> = page.keys().cloned().collect();
    assert_eq!(names, vec!["c1", "c2", "c3"]);
}

#[test]
fn capture_duplicate_names_last_visit_wins() {
    let root = panel(vec![
        text_box("dup", "first"),
        panel(vec![text_box("dup", "nested")]),
        text_block("dup", "last"),
    ]);
    let page = capture_tree(Some(&root)).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page["dup"].text.as_deref(), Some("last"));
}

#[test]
fn capture_duplicate_names_rejected_when_configured() {
    let root = panel(vec![text_box("dup", "first"), radio("dup", true)]);
    let options = CaptureOptions {
        duplicates: DuplicatePolicy::Reject,
        ..CaptureOptions::default()
    };

    match capture_tree_with(Some(&root), &options) {
        Err(FormStateError::DuplicateControlName { name }) => assert_eq!(name, "dup"),
        other => panic!("expected duplicate error, got {:?}", other),
    }
}

// =========================================================================
// restore_tree
// =========================================================================

#[test]
fn restore_writes_matching_controls() {
    let page = capture_tree(Some(&home_page())).unwrap();

    let mut tree = panel(vec![text_box("nameBox", ""), radio("optA", false)]);
    let applied = restore_tree(Some(&mut tree), &page).unwrap();

    assert_eq!(applied, 2);
    assert_eq!(tree.find("nameBox").unwrap().text(), Some("Alice"));
    assert_eq!(tree.find("optA").unwrap().is_checked(), Some(true));
}

#[test]
fn restore_is_not_depth_limited() {
    let mut page = PageState::new();
    page.insert("c25".into(), ControlRecord::text(Some("c25"), Some("restored")));

    let mut tree = text_chain(25);
    let applied = restore_tree(Some(&mut tree), &page).unwrap();

    assert_eq!(applied, 1);
    assert_eq!(tree.find("c25").unwrap().text(), Some("restored"));
}

#[test]
fn restore_leaves_unmatched_and_unknown_alone() {
    let mut page = PageState::new();
    page.insert("ok".into(), ControlRecord::text(Some("ok"), Some("changed")));

    let mut tree = panel(vec![button("ok"), text_box("other", "untouched")]);
    let before = tree.clone();

    let applied = restore_tree(Some(&mut tree), &page).unwrap();
    assert_eq!(applied, 0);
    assert_eq!(tree, before);
}

#[test]
fn restore_applies_to_every_same_named_control() {
    let mut page = PageState::new();
    page.insert("dup".into(), ControlRecord::text(Some("dup"), Some("v")));

    let mut tree = panel(vec![text_box("dup", "a"), panel(vec![text_block("dup", "b")])]);
    assert_eq!(restore_tree(Some(&mut tree), &page).unwrap(), 2);
}

#[test]
fn restore_missing_root_is_error() {
    let err = restore_tree::<Element>(None, &PageState::new()).unwrap_err();
    assert!(matches!(err, FormStateError::MissingElement { .. }));
}

#[test]
fn round_trip_onto_fresh_tree() {
    let original = panel(vec![
        text_box("first", "Ada"),
        text_block("status", "Ready"),
        panel(vec![radio("left", true), radio("right", false)]),
        button("go"),
    ]);
    let page = capture_tree(Some(&original)).unwrap();

    let mut fresh = panel(vec![
        text_box("first", ""),
        text_block("status", ""),
        panel(vec![radio("left", false), radio("right", true)]),
        button("go"),
    ]);
    restore_tree(Some(&mut fresh), &page).unwrap();

    assert_eq!(fresh, original);
}
