use serde::{Deserialize, Serialize};

use crate::ConfigNode;

/// A translation of the mission title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LocalizedText {
    /// Language code, e.g. `de`.
    pub language:    String,
    /// Translated title.
    pub title:       String,
    /// Translated description.
    pub description: String,
}

impl LocalizedText {
    /// Creates a translation.
    pub fn new(
        language: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { language: language.into(), title: title.into(), description: description.into() }
    }

    /// Builds the `element` node for the translation at `index`.
    pub fn to_node(&self, index: usize) -> ConfigNode {
        ConfigNode::new("tmmission_definition_localized", "element")
            .with_value(index)
            .append_child("string8u", "language", &self.language)
            .append_child("string8", "title", &self.title)
            .append_child("string8", "description", &self.description)
    }
}
