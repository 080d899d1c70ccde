//! Tileset configuration with per-tile metadata

use crate::{PropertySource, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A type/class template that tiles can reference for default properties
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TileClass {
    /// Default properties for every tile of this class
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl TileClass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl PropertySource for TileClass {
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Authoring metadata attached to a single tile of the tileset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TileDef {
    /// Optional class template this tile inherits defaults from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Tile-level properties, shadowing the class defaults
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Value>,
}

impl TileDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class template for this tile
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set a tile-level property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Check if any metadata is set
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.properties.is_empty()
    }
}

impl PropertySource for TileDef {
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// The shared tile palette every layer and placed object draws from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    /// Path to the sprite sheet image (relative to the assets directory)
    pub image: String,
    /// Tile size in pixels (assumes square tiles)
    pub tile_size: u32,
    pub columns: u32,
    pub rows: u32,
    /// Per-tile metadata (class and properties)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tile_defs: HashMap<u32, TileDef>,
}

impl Tileset {
    /// Create a new tileset
    pub fn new(name: String, image: String, tile_size: u32, columns: u32, rows: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image,
            tile_size,
            columns,
            rows,
            tile_defs: HashMap::new(),
        }
    }

    /// Total number of tiles in the palette
    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Check that a tile id is inside the palette
    pub fn contains(&self, tile_id: u32) -> bool {
        tile_id < self.tile_count()
    }

    /// Get metadata for a tile, if any was authored
    pub fn tile_def(&self, tile_id: u32) -> Option<&TileDef> {
        self.tile_defs.get(&tile_id)
    }

    /// Set metadata for a tile, removing empty entries
    pub fn set_tile_def(&mut self, tile_id: u32, def: TileDef) {
        if def.is_empty() {
            self.tile_defs.remove(&tile_id);
        } else {
            self.tile_defs.insert(tile_id, def);
        }
    }
}
