use super::SerializedElement;
use serde::{Deserialize, Serialize};

/// An owned element of an action-sequence document.
///
/// This is the in-memory form actions are bound to. It only models what the
/// action layer reads and writes: a tag name, its own text and ordered child
/// elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the descendant at `path`, creating any missing elements on the way.
    pub fn ensure_path(&mut self, path: &str) -> &mut Element {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            let index = match node.children.iter().position(|c| c.name == segment) {
                Some(index) => index,
                None => {
                    node.children.push(Element::new(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        node
    }

    /// Sets the text of the descendant at `path`, creating it if needed.
    pub fn set_text_at(&mut self, path: &str, text: impl Into<String>) {
        self.ensure_path(path).text = text.into();
    }
}

impl SerializedElement for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }
}
