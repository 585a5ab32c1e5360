use sha1::{Digest, Sha1};

use crate::state::state_model::PageState;

/// sha1 over the page's serialized form.
///
/// `PageState` is ordered by control name, so identical captures hash the
/// same regardless of tree traversal order.
pub fn page_fingerprint(page: &PageState) -> String {
    let json = serde_json::to_string(page).unwrap_or_default();
    text_fingerprint(&json)
}

pub fn text_fingerprint(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
