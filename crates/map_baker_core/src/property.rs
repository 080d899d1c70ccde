//! Property lookup capability

use crate::Value;

/// One level in the property shadowing chain.
///
/// A placed object, its source tile and the tile's class each expose their
/// own property set through this trait; the resolver in `map_baker_compile`
/// walks them in a fixed order and the first level that defines a property
/// wins.
pub trait PropertySource {
    /// Look up a property defined directly at this level.
    fn property(&self, name: &str) -> Option<&Value>;
}
