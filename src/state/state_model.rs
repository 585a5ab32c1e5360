use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Captured value of one named control.
///
/// Field aliases accept the PascalCase documents written by older tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRecord {
    #[serde(default, alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Descriptive only, restore ignores it
    #[serde(default, alias = "ControlType", skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,

    #[serde(default, alias = "Content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, alias = "Text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, alias = "IsChecked", skip_serializing_if = "Option::is_none")]
    pub is_checked: Option<bool>,

    #[serde(default, alias = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    #[serde(default, alias = "Tag", skip_serializing_if = "Option::is_none")]
    pub tag: Option<serde_json::Value>,
}

impl ControlRecord {
    pub fn text(name: Option<&str>, text: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            text: text.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn checked(name: Option<&str>, is_checked: Option<bool>) -> Self {
        Self {
            name: name.map(str::to_string),
            is_checked,
            ..Self::default()
        }
    }

    /// The lookup key, if it is usable as one.
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Control name -> record for one page.
pub type PageState = BTreeMap<String, ControlRecord>;

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    #[serde(default, alias = "SelectedPage", deserialize_with = "null_as_default")]
    pub selected_page: String,

    #[serde(default, alias = "Pages", deserialize_with = "null_as_default")]
    pub pages: BTreeMap<String, PageState>,
}

impl ApplicationState {
    pub fn page(&self, name: &str) -> Option<&PageState> {
        self.pages.get(name)
    }

    /// Replace a page's entry wholesale and mark it selected.
    ///
    /// Returns the entry it replaced.
    pub fn put_page(&mut self, name: &str, page: PageState) -> Option<PageState> {
        self.selected_page = name.to_string();
        self.pages.insert(name.to_string(), page)
    }

    pub fn remove_page(&mut self, name: &str) -> Option<PageState> {
        self.pages.remove(name)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
