//! Core data structures for map_baker
//!
//! This crate provides the fundamental types for representing an authored
//! tile-based map before it is baked into a runtime level:
//! - `MapDocument` - A complete authored map with layers, tileset and classes
//! - `Layer` - A single layer (tiles or objects)
//! - `Tileset` - The shared tile palette with per-tile metadata
//! - `PlacedObject` - Freely placed objects with properties
//! - `TileDef` / `TileClass` - Per-tile metadata and type templates
//! - `Value` - Generic property value type
//! - `PropertySource` - Property lookup capability used by the resolver
//!
//! The types here are plain data: the baking pipeline in `map_baker_compile`
//! only ever reads them.

mod document;
mod layer;
mod object;
mod property;
mod tileset;
mod value;

pub use document::MapDocument;
pub use layer::{Layer, LayerData, LayerType};
pub use object::PlacedObject;
pub use property::PropertySource;
pub use tileset::{TileClass, TileDef, Tileset};
pub use value::Value;
