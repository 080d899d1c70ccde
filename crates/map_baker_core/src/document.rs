//! The authored map document

use crate::{Layer, TileClass, TileDef, Tileset, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete authored map
///
/// The baking pipeline reads this structure and nothing else: global
/// properties, the shared tileset with its classes, and the ordered layer
/// list. Loading and saving the document is the host editor's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub version: u32,
    pub name: String,
    /// Map-level properties (colors, particle settings, start position, ...)
    #[serde(default)]
    pub properties: HashMap<String, Value>,
    /// Class templates referenced by tile metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub classes: HashMap<String, TileClass>,
    /// The shared tile palette
    pub tileset: Tileset,
    /// Layers in draw order
    pub layers: Vec<Layer>,
}

impl MapDocument {
    /// Create a new empty document
    pub fn new(name: String, tileset: Tileset) -> Self {
        Self {
            version: 1,
            name,
            properties: HashMap::new(),
            classes: HashMap::new(),
            tileset,
            layers: Vec::new(),
        }
    }

    /// Look up a map-level property (no fallback chain at this level)
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Look up a class template by name
    pub fn class(&self, name: &str) -> Option<&TileClass> {
        self.classes.get(name)
    }

    /// Metadata for a tile of the shared tileset, if authored
    pub fn tile_def(&self, tile_id: u32) -> Option<&TileDef> {
        self.tileset.tile_def(tile_id)
    }

    /// The class template a tile inherits from, if any
    pub fn class_of_tile(&self, tile_id: u32) -> Option<&TileClass> {
        self.tile_def(tile_id)
            .and_then(|def| def.class.as_deref())
            .and_then(|name| self.class(name))
    }
}
