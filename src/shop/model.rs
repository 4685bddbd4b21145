use serde::{Deserialize, Serialize};

/// One furniture entry. Every field is free text, including `price`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
}

impl FurnitureItem {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            price: price.into(),
        }
    }

    /// Case-insensitive substring match on name or type. `needle` must
    /// already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.kind.to_lowercase().contains(needle)
    }
}

/// Insertion-ordered item list. Position is identity.
pub type FurnitureCollection = Vec<FurnitureItem>;
