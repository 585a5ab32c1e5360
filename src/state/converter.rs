use crate::{
    screen::element_model::{ControlKind, UiElement},
    state::state_model::ControlRecord,
};

/// Read one element's value. `None` for kinds we don't persist.
pub fn extract<E: UiElement>(element: &E) -> Option<ControlRecord> {
    match element.kind() {
        ControlKind::TextInput | ControlKind::TextLabel => {
            Some(ControlRecord::text(element.name(), element.text()))
        }
        ControlKind::Toggle => Some(ControlRecord::checked(element.name(), element.is_checked())),
        ControlKind::Unrecognized => None,
    }
}

/// Write a stored value back onto one element.
///
/// Returns `true` when the element was changed. No record, or a kind we
/// don't persist, leaves the element alone.
pub fn apply<E: UiElement>(element: &mut E, record: Option<&ControlRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };

    match element.kind() {
        ControlKind::TextInput | ControlKind::TextLabel => {
            element.set_text(record.text.as_deref());
            true
        }
        ControlKind::Toggle => {
            element.set_checked(record.is_checked);
            true
        }
        ControlKind::Unrecognized => false,
    }
}
