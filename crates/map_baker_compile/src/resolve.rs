//! Property resolution over the object → tile → class chain

use crate::descriptor::Vec2;
use map_baker_core::{MapDocument, PlacedObject, PropertySource, Value};

/// The ordered shadowing chain for one placed object.
///
/// Lookup tries the object's own properties first, then the source tile's,
/// then the tile class's defaults. The first level that defines a property
/// wins outright - except for vector properties, where each axis runs its
/// own three-level lookup (an object that overrides only `velocity.x` still
/// inherits `velocity.y` from the tile or class).
pub struct PropertyChain<'a> {
    sources: Vec<&'a dyn PropertySource>,
}

impl<'a> PropertyChain<'a> {
    /// Build the chain for a placed object
    pub fn for_object(doc: &'a MapDocument, object: &'a PlacedObject) -> Self {
        let mut sources: Vec<&dyn PropertySource> = vec![object];
        if let Some(def) = doc.tile_def(object.tile_id) {
            sources.push(def);
            if let Some(class) = doc.class_of_tile(object.tile_id) {
                sources.push(class);
            }
        }
        Self { sources }
    }

    /// The effective value of a property, or `None` if no level defines it
    pub fn resolve(&self, name: &str) -> Option<&'a Value> {
        self.sources.iter().find_map(|source| source.property(name))
    }

    /// Resolve a property as an integer
    pub fn int(&self, name: &str) -> Option<i64> {
        self.resolve(name).and_then(Value::as_int)
    }

    /// Resolve a property as a float
    pub fn float(&self, name: &str) -> Option<f64> {
        self.resolve(name).and_then(Value::as_float)
    }

    /// Resolve a vector property axis by axis.
    ///
    /// For each axis the chain is walked independently: the first level
    /// whose value is an object carrying that axis as a number wins. An axis
    /// absent at every level is 0.0.
    pub fn vec2(&self, name: &str) -> Vec2 {
        Vec2 {
            x: self.axis(name, "x"),
            y: self.axis(name, "y"),
        }
    }

    fn axis(&self, name: &str, axis: &str) -> f64 {
        self.sources
            .iter()
            .find_map(|source| {
                source
                    .property(name)
                    .and_then(Value::as_object)
                    .and_then(|fields| fields.get(axis))
                    .and_then(Value::as_float)
            })
            .unwrap_or(0.0)
    }
}
