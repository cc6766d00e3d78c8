use serde::Deserialize;

/// The top-level guide document: an ordered list of trips. The generator
/// emits it as a plain JSON array, so the newtype is transparent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Guide(pub Vec<Trip>);

impl Guide {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Trip {
    pub title: String,
    pub goal: String,
    pub inventory_setup: Vec<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Step {
    pub text: String,
}

/// The render target. Stands in for the DOM element the browser build
/// mutated: a fixed element id plus the markup currently mounted under it.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    content: String,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Replaces the whole content, like assigning `innerHTML`.
    pub fn set_content(&mut self, markup: impl Into<String>) {
        self.content = markup.into();
    }

    /// Appends one block, like `appendChild`.
    pub fn append(&mut self, markup: &str) {
        self.content.push_str(markup);
    }
}
