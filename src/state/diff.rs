use serde::Serialize;

use crate::state::state_model::PageState;

/// Control-name level comparison of two captures of the same page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
    pub unchanged: Vec<String>,
}

impl PageDiff {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "+{} -{} ~{} ={}",
            self.added.len(),
            self.removed.len(),
            self.changed.len(),
            self.unchanged.len()
        )
    }
}

pub fn diff(before: &PageState, after: &PageState) -> PageDiff {
    let mut result = PageDiff::default();

    for (name, record) in after {
        match before.get(name) {
            None => result.added.push(name.clone()),
            Some(old) if old != record => result.changed.push(name.clone()),
            Some(_) => result.unchanged.push(name.clone()),
        }
    }

    result.removed = before
        .keys()
        .filter(|name| !after.contains_key(*name))
        .cloned()
        .collect();

    result
}
