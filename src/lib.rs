pub mod cli;
pub mod persist;
pub mod screen;
pub mod state;
pub mod trace;

pub use crate::{
    persist::{
        error::FormStateError,
        store::{StateFile, capture_and_save, restore_from_file},
    },
    screen::element_model::{ControlKind, Element, UiElement},
    state::state_model::{ApplicationState, ControlRecord, PageState},
};
