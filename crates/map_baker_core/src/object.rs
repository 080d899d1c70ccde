//! Placed objects on object layers

use crate::{PropertySource, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// An object placed freely on an object layer
///
/// A placed object stamps one tile of the shared tileset at a real-valued
/// position and may shadow the tile's (and its class's) default properties
/// with its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Unique identifier for this placement
    pub id: Uuid,
    /// Display name in the editor, also used in error reports
    #[serde(default)]
    pub name: String,
    /// World position
    pub x: f64,
    pub y: f64,
    /// Source tile in the shared tileset
    pub tile_id: u32,
    /// Local property overrides
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl PlacedObject {
    /// Create a new placed object
    pub fn new(name: impl Into<String>, x: f64, y: f64, tile_id: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x,
            y,
            tile_id,
            properties: HashMap::new(),
        }
    }

    /// Set a local property override
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// A label for error reports: the name if present, else the short id
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("object {}", &self.id.to_string()[..8])
        } else {
            self.name.clone()
        }
    }
}

impl PropertySource for PlacedObject {
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_object() {
        let obj = PlacedObject::new("spider", 40.0, 96.0, 17)
            .with_property("frames", 2i64)
            .with_property("gravity", 1.0f64);

        assert_eq!(obj.tile_id, 17);
        assert_eq!(obj.property("frames").unwrap().as_int(), Some(2));
        assert_eq!(obj.property("gravity").unwrap().as_float(), Some(1.0));
        assert!(obj.property("velocity").is_none());
        assert_eq!(obj.label(), "spider");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let obj = PlacedObject::new("", 0.0, 0.0, 0);
        assert!(obj.label().starts_with("object "));
    }
}
