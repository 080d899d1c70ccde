//! Fixed ordered lookup tables for authored enum codes
//!
//! Authored maps store colors, collision classes and movement behaviors as
//! zero-based indices into these tables. The order is part of the authoring
//! format and must not change.

use crate::CompileError;

/// Color names in authored palette order
pub const COLORS: [&str; 16] = [
    "Black",
    "Purple",
    "Red",
    "Orange",
    "Yellow",
    "LightGreen",
    "Green",
    "DarkGreen",
    "DarkBlue",
    "Blue",
    "LightBlue",
    "Cyan",
    "White",
    "LightGray",
    "Gray",
    "DarkGray",
];

/// Collision class names in authored order
pub const COLLISION: [&str; 4] = ["Blocking", "Deadly", "None", "BlockingMonster"];

/// Movement behavior names in authored order
pub const MOVEMENT: [&str; 4] = ["TurnsAtEdge", "FollowsPlayer", "Moving", "Flying"];

/// The three palette tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Color,
    Collision,
    Movement,
}

impl Palette {
    /// Table name used in error reports
    pub fn name(self) -> &'static str {
        match self {
            Palette::Color => "color",
            Palette::Collision => "collision",
            Palette::Movement => "movement",
        }
    }

    /// The ordered entries of this table
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Palette::Color => &COLORS,
            Palette::Collision => &COLLISION,
            Palette::Movement => &MOVEMENT,
        }
    }

    /// Resolve an authored code to its semantic name.
    ///
    /// A code outside the table is corrupt authoring data and fails the
    /// whole run; it is never substituted or wrapped.
    pub fn resolve(self, code: i64, property: &str) -> Result<&'static str, CompileError> {
        let entries = self.entries();
        usize::try_from(code)
            .ok()
            .and_then(|idx| entries.get(idx).copied())
            .ok_or_else(|| CompileError::PaletteRange {
                table: self.name(),
                property: property.to_string(),
                code,
                len: entries.len(),
            })
    }
}
