use serde::{Deserialize, Serialize};

use crate::{
    persist::error::FormStateError,
    screen::element_model::UiElement,
    state::{
        converter::{apply, extract},
        state_model::PageState,
    },
};

/// Deepest recursion level the capture walk enters. The root call is level 0.
pub const MAX_CAPTURE_DEPTH: usize = 20;

/// What to do when two controls in one tree share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The control visited later replaces the earlier one
    #[default]
    LastWriteWins,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_CAPTURE_DEPTH,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

fn default_max_depth() -> usize {
    MAX_CAPTURE_DEPTH
}

// ============================================================================
// Capture
// ============================================================================

pub fn capture_tree<E: UiElement>(root: Option<&E>) -> Result<PageState, FormStateError> {
    capture_tree_with(root, &CaptureOptions::default())
}

/// Collect every recognized, named control below `root`.
///
/// Children are visited in order and each child is descended into whether or
/// not it was itself recognized. Once the walk is deeper than
/// `options.max_depth` it stops and keeps what it has.
pub fn capture_tree_with<E: UiElement>(
    root: Option<&E>,
    options: &CaptureOptions,
) -> Result<PageState, FormStateError> {
    let mut controls = PageState::new();
    collect(root, 0, options, &mut controls)?;
    Ok(controls)
}

fn collect<E: UiElement>(
    element: Option<&E>,
    depth: usize,
    options: &CaptureOptions,
    controls: &mut PageState,
) -> Result<(), FormStateError> {
    if depth > options.max_depth {
        return Ok(());
    }

    let element = element.ok_or(FormStateError::MissingElement { depth })?;

    for index in 0..element.child_count() {
        let Some(child) = element.child(index) else {
            continue;
        };

        if let Some(record) = extract(child) {
            if let Some(name) = record.key().map(str::to_string) {
                if options.duplicates == DuplicatePolicy::Reject && controls.contains_key(&name) {
                    return Err(FormStateError::DuplicateControlName { name });
                }
                controls.insert(name, record);
            }
        }

        collect(Some(child), depth + 1, options, controls)?;
    }

    Ok(())
}

// ============================================================================
// Restore
// ============================================================================

/// Apply stored values to every descendant of `root` whose name matches.
///
/// Not depth limited. Returns the number of controls written.
pub fn restore_tree<E: UiElement>(
    root: Option<&mut E>,
    page: &PageState,
) -> Result<usize, FormStateError> {
    let root = root.ok_or(FormStateError::MissingElement { depth: 0 })?;

    let mut applied = 0;
    restore_children(root, page, &mut applied);
    Ok(applied)
}

fn restore_children<E: UiElement>(element: &mut E, page: &PageState, applied: &mut usize) {
    for index in 0..element.child_count() {
        let Some(child) = element.child_mut(index) else {
            continue;
        };

        let record = child.name().and_then(|name| page.get(name));
        if apply(child, record) {
            *applied += 1;
        }

        restore_children(child, page, applied);
    }
}
