//! Runtime level descriptor types
//!
//! These are the output of baking: flat, engine-facing structures with no
//! trace of the authoring document. Field order matters - it is the order
//! the serialized file carries.

use crate::CompileError;
use serde::{Deserialize, Serialize};

/// A 2D vector in the output format
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One baked entity (a "monster" in the runtime format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub position: Vec2,
    /// Collision class name from the collision palette
    pub collision: String,
    /// Movement behavior name from the movement palette
    pub movement: String,
    pub velocity: Vec2,
    pub gravity: f64,
    /// Forward sprite indices, one per frame strip
    pub sprites: Vec<i64>,
    /// Horizontally mirrored counterparts, parallel to `sprites`
    pub reverse_sprites: Vec<i64>,
    pub width: i64,
    pub height: i64,
}

/// The baked level document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub background_color: String,
    pub font_color: String,
    pub particle_chance: f64,
    pub particle_sprite: i64,
    pub stars: i64,
    pub start_position: Vec2,
    pub monsters: Vec<EntityDescriptor>,
    /// Concatenated tile layers, row-major, 0 = empty, tile id + 1 otherwise
    pub tiles: Vec<u32>,
}

impl LevelDescriptor {
    /// Serialize with 4-space indentation, the format the runtime and level
    /// diffs expect.
    pub fn to_pretty_json(&self) -> Result<String, CompileError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8(buf).expect("serializer produced invalid UTF-8"))
    }
}
