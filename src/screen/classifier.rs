use crate::screen::element_model::ControlKind;

/// Map a toolkit type name onto the control kinds we persist.
pub fn classify(type_name: &str) -> ControlKind {
    let name = type_name.trim();

    if name.eq_ignore_ascii_case("TextBox") {
        ControlKind::TextInput
    } else if name.eq_ignore_ascii_case("TextBlock") {
        ControlKind::TextLabel
    } else if name.eq_ignore_ascii_case("RadioButton") {
        ControlKind::Toggle
    } else {
        ControlKind::Unrecognized
    }
}

pub fn is_recognized(type_name: &str) -> bool {
    classify(type_name) != ControlKind::Unrecognized
}
