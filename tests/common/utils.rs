use std::path::PathBuf;

use form_state::screen::element_model::Element;

pub fn text_box(name: &str, text: &str) -> Element {
    Element::new("TextBox").named(name).with_text(text)
}

pub fn text_block(name: &str, text: &str) -> Element {
    Element::new("TextBlock").named(name).with_text(text)
}

pub fn radio(name: &str, checked: bool) -> Element {
    Element::new("RadioButton").named(name).with_checked(checked)
}

pub fn button(name: &str) -> Element {
    Element::new("Button").named(name).with_text("OK")
}

pub fn panel(children: Vec<Element>) -> Element {
    children
        .into_iter()
        .fold(Element::new("StackPanel"), |p, c| p.with_child(c))
}

/// Root with a `nameBox` text box and a checked `optA` radio button.
pub fn home_page() -> Element {
    panel(vec![text_box("nameBox", "Alice"), radio("optA", true)])
}

/// `len` text boxes, each the single child of the previous, under a panel.
pub fn text_chain(len: usize) -> Element {
    let mut node = text_box(&format!("c{}", len), "v");
    for i in (1..len).rev() {
        node = text_box(&format!("c{}", i), "v").with_child(node);
    }
    panel(vec![node])
}

/// Fresh path under the temp dir; any leftover file from an earlier run is removed.
pub fn temp_path(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "form_state_test_{}_{}.json",
        tag,
        std::process::id()
    ));
    std::fs::remove_file(&path).ok();
    path
}
