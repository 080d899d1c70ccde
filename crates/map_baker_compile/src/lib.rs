//! map_baker_compile - Level baking for map_baker
//!
//! This crate turns an authored [`MapDocument`](map_baker_core::MapDocument)
//! into the flat level descriptor the game runtime loads:
//!
//! - **Palette tables** - fixed ordered lookup tables for color, collision
//!   and movement codes
//! - **Property resolution** - object → tile → class shadowing, with
//!   per-axis resolution for vector properties
//! - **Entity baking** - placed objects and composite object layers become
//!   entity descriptors with forward and mirrored sprite lists
//! - **Level assembly** - tile layers flatten into one index sequence and
//!   everything serializes to pretty-printed JSON
//!
//! Baking is a pure, deterministic transform: the same document always
//! produces the same descriptor, and any error aborts the run before any
//! output is written.
//!
//! # Example
//!
//! ```rust,ignore
//! use map_baker_compile::{compile, write_level};
//!
//! let level = compile(&doc)?;
//! assert_eq!(level.tiles.len(), 600);
//!
//! // Or go straight to disk (all-or-nothing):
//! write_level(&doc, Path::new("level1.json"))?;
//! ```

mod descriptor;
mod entity;
mod level;
mod palette;
mod resolve;

pub use descriptor::{EntityDescriptor, LevelDescriptor, Vec2};
pub use entity::{compile_layer, compile_object, DEFAULT_ENTITY_SIZE};
pub use level::{compile, flatten_tile_layer, write_level};
pub use palette::{Palette, COLLISION, COLORS, MOVEMENT};
pub use resolve::PropertyChain;

use thiserror::Error;

/// Errors that can occur while baking a level
///
/// Every variant is fatal: a corrupt or incomplete document must never
/// produce a truncated level file.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A required property is missing (map-level configuration, or an object
    /// that resolves no collision/movement code at any level)
    #[error("missing required property '{name}' on {owner}")]
    MissingProperty { name: String, owner: String },

    /// A required property is present but has the wrong shape
    #[error("property '{name}' on {owner} must be {expected}")]
    InvalidProperty {
        name: String,
        owner: String,
        expected: &'static str,
    },

    /// A color/collision/movement code falls outside its lookup table
    #[error(
        "{table} code {code} for property '{property}' is out of range \
         (table has {len} entries)"
    )]
    PaletteRange {
        table: &'static str,
        property: String,
        code: i64,
        len: usize,
    },

    /// An object layer tagged as a composite entity contains no objects
    #[error("object layer '{layer}' is tagged as a composite entity but contains no objects")]
    EmptyGroup { layer: String },

    /// A placed object references a tile id outside the shared tileset
    #[error("object '{object}' references tile {tile_id} outside the tileset")]
    UnknownTile { object: String, tile_id: u32 },

    #[error("failed to serialize level: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
