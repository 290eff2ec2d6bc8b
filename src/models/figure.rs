use serde::{Deserialize, Serialize};

/// The record being edited: a named shape with a width and a height
///
/// Missing JSON keys fall back to an empty name and zero dimensions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Figure {
    /// Create a figure from its three fields
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Figure {
            name: name.into(),
            width,
            height,
        }
    }
}
