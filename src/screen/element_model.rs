use serde::{Deserialize, Serialize};

use crate::screen::classifier::classify;

/// The control kinds whose values are captured and restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Editable text (`TextBox`)
    TextInput,
    /// Static text (`TextBlock`)
    TextLabel,
    /// Radio/toggle selection (`RadioButton`)
    Toggle,
    Unrecognized,
}

/// A node of a live UI hierarchy.
///
/// Walkers only ever talk to this interface. Child slots are index based and
/// may be empty; an empty slot (`None`) is skipped, never an error.
pub trait UiElement {
    fn name(&self) -> Option<&str>;
    fn kind(&self) -> ControlKind;

    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<&Self>;
    fn child_mut(&mut self, index: usize) -> Option<&mut Self>;

    fn text(&self) -> Option<&str>;
    fn set_text(&mut self, text: Option<&str>);

    fn is_checked(&self) -> Option<bool>;
    fn set_checked(&mut self, checked: Option<bool>);
}

/// Serde-described element tree, loaded from JSON or YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Toolkit type name, e.g. `TextBox`, `StackPanel`
    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "isChecked", default, skip_serializing_if = "Option::is_none")]
    pub is_checked: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Option<Element>>,
}

impl Element {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.is_checked = Some(checked);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Some(child));
        self
    }

    /// Depth-first search by name, including `self`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().flatten().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .flatten()
            .find_map(|c| c.find_mut(name))
    }
}

impl UiElement for Element {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> ControlKind {
        classify(&self.element_type)
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index).and_then(Option::as_ref)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index).and_then(Option::as_mut)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_string);
    }

    fn is_checked(&self) -> Option<bool> {
        self.is_checked
    }

    fn set_checked(&mut self, checked: Option<bool>) {
        self.is_checked = checked;
    }
}
