//! Layer types for tile and object layers

use crate::{PlacedObject, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A layer (tiles or objects)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    /// Layer-level properties (e.g. `width`/`height` of a composite entity)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Value>,
    pub data: LayerData,
}

impl Layer {
    /// Create a new empty tile layer
    pub fn new_tile_layer(name: String, width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            name,
            visible: true,
            properties: HashMap::new(),
            data: LayerData::Tiles {
                width,
                height,
                tiles: vec![None; size],
            },
        }
    }

    /// Create a new object layer
    pub fn new_object_layer(name: String) -> Self {
        Self {
            name,
            visible: true,
            properties: HashMap::new(),
            data: LayerData::Objects {
                objects: Vec::new(),
                group: None,
            },
        }
    }

    /// Get the type of this layer
    pub fn layer_type(&self) -> LayerType {
        match &self.data {
            LayerData::Tiles { .. } => LayerType::Tiles,
            LayerData::Objects { .. } => LayerType::Objects,
        }
    }

    /// Whether this object layer is tagged as one composite entity
    pub fn is_composite(&self) -> bool {
        matches!(&self.data, LayerData::Objects { group: Some(_), .. })
    }

    /// Get the tile at (x, y), if this is a tile layer and the cell is set
    pub fn tile_at(&self, x: u32, y: u32) -> Option<u32> {
        match &self.data {
            LayerData::Tiles { width, height, tiles } => {
                if x >= *width || y >= *height {
                    return None;
                }
                tiles[(y * width + x) as usize]
            }
            LayerData::Objects { .. } => None,
        }
    }

    /// Set the tile at (x, y); ignored outside the grid or on object layers
    pub fn set_tile(&mut self, x: u32, y: u32, tile: Option<u32>) {
        if let LayerData::Tiles { width, height, tiles } = &mut self.data {
            if x < *width && y < *height {
                tiles[(y * *width + x) as usize] = tile;
            }
        }
    }
}

/// The type of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Tiles,
    Objects,
}

/// The data contained in a layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerData {
    /// Tile grid in row-major order
    Tiles {
        width: u32,
        height: u32,
        /// Tile data - None means empty, Some(id) is a tile in the shared tileset
        tiles: Vec<Option<u32>>,
    },
    /// Freely placed objects
    Objects {
        objects: Vec<PlacedObject>,
        /// When set, the whole layer compiles to one composite entity
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group: Option<String>,
    },
}
