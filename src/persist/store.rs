use std::path::{Path, PathBuf};

use crate::{
    persist::error::FormStateError,
    screen::element_model::UiElement,
    state::{
        diff::{PageDiff, diff},
        fingerprint::page_fingerprint,
        state_model::{ApplicationState, PageState},
        walker::{CaptureOptions, capture_tree_with, restore_tree},
    },
    trace::{
        logger::TraceLogger,
        trace::{Operation, TraceEvent},
    },
};

// ============================================================================
// Free-function entry points
// ============================================================================

/// Capture `root` as `page_name` and write the merged document to `path`.
pub fn capture_and_save<E: UiElement>(
    root: Option<&E>,
    page_name: &str,
    path: impl AsRef<Path>,
) -> Result<(), FormStateError> {
    StateFile::new(path.as_ref()).capture(root, page_name)?;
    Ok(())
}

/// Reapply the values stored for `page_name` onto `root`.
///
/// A missing file or an unknown page leaves the tree untouched.
pub fn restore_from_file<E: UiElement>(
    root: Option<&mut E>,
    page_name: &str,
    path: impl AsRef<Path>,
) -> Result<(), FormStateError> {
    StateFile::new(path.as_ref()).restore(root, page_name)?;
    Ok(())
}

// ============================================================================
// StateFile
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub capture: CaptureOptions,
    /// Indent the written JSON
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    pub page: String,
    pub controls: usize,
    pub fingerprint: String,
    /// Against the entry this capture replaced (empty page if none)
    pub changes: PageDiff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    NoStateFile,
    PageNotFound,
    Restored { applied: usize },
}

impl std::fmt::Display for RestoreOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestoreOutcome::NoStateFile => write!(f, "no state file"),
            RestoreOutcome::PageNotFound => write!(f, "page not found"),
            RestoreOutcome::Restored { applied } => write!(f, "restored {} controls", applied),
        }
    }
}

/// A state file on disk.
///
/// Holds no document in memory: every call reads the file, and mutating
/// calls write it straight back.
pub struct StateFile {
    path: PathBuf,
    options: StoreOptions,
    tracer: TraceLogger,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: StoreOptions::default(),
            tracer: TraceLogger::disabled(),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the document; a missing file reads as an empty document.
    pub fn load(&self) -> Result<ApplicationState, FormStateError> {
        if !self.exists() {
            return Ok(ApplicationState::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| FormStateError::Read {
            path: self.path.clone(),
            source,
        })?;

        // A bare `null` document reads as empty.
        let state: Option<ApplicationState> =
            serde_json::from_str(&content).map_err(|source| FormStateError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(state.unwrap_or_default())
    }

    pub fn save(&self, state: &ApplicationState) -> Result<(), FormStateError> {
        let json = if self.options.pretty {
            serde_json::to_string_pretty(state)
        } else {
            serde_json::to_string(state)
        }
        .map_err(FormStateError::Serialize)?;

        std::fs::write(&self.path, json).map_err(|source| FormStateError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Capture `root` and store it as `page_name`, replacing any earlier entry.
    ///
    /// Other pages are carried over untouched. Nothing is written if the walk
    /// fails.
    pub fn capture<E: UiElement>(
        &self,
        root: Option<&E>,
        page_name: &str,
    ) -> Result<CaptureOutcome, FormStateError> {
        let mut state = self.load()?;
        let page = capture_tree_with(root, &self.options.capture)?;

        let controls = page.len();
        let fingerprint = page_fingerprint(&page);
        let previous = state.put_page(page_name, page).unwrap_or_default();
        let changes = diff(&previous, &state.pages[page_name]);

        self.save(&state)?;

        self.tracer.log(
            &TraceEvent::now(Operation::Capture, page_name, &self.path.to_string_lossy())
                .with_controls(controls)
                .with_fingerprint(&fingerprint)
                .with_changes(&changes)
                .with_outcome("saved"),
        );

        Ok(CaptureOutcome {
            page: page_name.to_string(),
            controls,
            fingerprint,
            changes,
        })
    }

    pub fn restore<E: UiElement>(
        &self,
        root: Option<&mut E>,
        page_name: &str,
    ) -> Result<RestoreOutcome, FormStateError> {
        let outcome = self.restore_inner(root, page_name)?;

        let mut event = TraceEvent::now(Operation::Restore, page_name, &self.path.to_string_lossy())
            .with_outcome(outcome);
        if let RestoreOutcome::Restored { applied } = outcome {
            event = event.with_controls(applied);
        }
        self.tracer.log(&event);

        Ok(outcome)
    }

    fn restore_inner<E: UiElement>(
        &self,
        root: Option<&mut E>,
        page_name: &str,
    ) -> Result<RestoreOutcome, FormStateError> {
        if !self.exists() {
            return Ok(RestoreOutcome::NoStateFile);
        }

        let state = self.load()?;
        let Some(page) = state.page(page_name) else {
            return Ok(RestoreOutcome::PageNotFound);
        };

        let applied = restore_tree(root, page)?;
        Ok(RestoreOutcome::Restored { applied })
    }

    /// The page most recently captured, if any.
    pub fn selected_page(&self) -> Result<Option<String>, FormStateError> {
        let state = self.load()?;
        Ok(Some(state.selected_page).filter(|p| !p.is_empty()))
    }

    pub fn page(&self, page_name: &str) -> Result<Option<PageState>, FormStateError> {
        Ok(self.load()?.pages.remove(page_name))
    }

    /// Drop a page's entry. Returns whether there was one.
    ///
    /// The file is only rewritten when something was removed.
    pub fn remove_page(&self, page_name: &str) -> Result<bool, FormStateError> {
        let mut state = self.load()?;
        let removed = state.remove_page(page_name).is_some();

        if removed {
            self.save(&state)?;
        }

        self.tracer.log(
            &TraceEvent::now(Operation::Remove, page_name, &self.path.to_string_lossy())
                .with_outcome(if removed { "removed" } else { "not found" }),
        );

        Ok(removed)
    }
}
