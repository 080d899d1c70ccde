//! Level assembly: flatten tile layers, bake entities, serialize

use crate::descriptor::{LevelDescriptor, Vec2};
use crate::entity::compile_layer;
use crate::palette::Palette;
use crate::CompileError;
use map_baker_core::{LayerData, MapDocument, Value};
use std::fs;
use std::path::Path;

/// Flatten one tile grid into the runtime index sequence.
///
/// Cells are emitted in storage order (rows top-to-bottom, columns
/// left-to-right): 0 for an empty cell, `tile_id + 1` otherwise, keeping 0
/// reserved for "no tile" in the runtime format.
pub fn flatten_tile_layer(tiles: &[Option<u32>]) -> Vec<u32> {
    tiles.iter().map(|cell| cell.map_or(0, |id| id + 1)).collect()
}

fn missing(name: &str) -> CompileError {
    CompileError::MissingProperty {
        name: name.to_string(),
        owner: "map".to_string(),
    }
}

fn invalid(name: &str, expected: &'static str) -> CompileError {
    CompileError::InvalidProperty {
        name: name.to_string(),
        owner: "map".to_string(),
        expected,
    }
}

fn required<'a>(doc: &'a MapDocument, name: &str) -> Result<&'a Value, CompileError> {
    doc.property(name).ok_or_else(|| missing(name))
}

fn required_int(doc: &MapDocument, name: &str) -> Result<i64, CompileError> {
    required(doc, name)?
        .as_int()
        .ok_or_else(|| invalid(name, "an integer"))
}

fn required_float(doc: &MapDocument, name: &str) -> Result<f64, CompileError> {
    required(doc, name)?
        .as_float()
        .ok_or_else(|| invalid(name, "a number"))
}

fn required_color(doc: &MapDocument, name: &str) -> Result<String, CompileError> {
    let code = required_int(doc, name)?;
    Ok(Palette::Color.resolve(code, name)?.to_string())
}

/// `start_position` is a required map property with both axes present; it
/// does not get the per-axis vector defaulting placed objects enjoy.
fn required_position(doc: &MapDocument, name: &str) -> Result<Vec2, CompileError> {
    let fields = required(doc, name)?
        .as_object()
        .ok_or_else(|| invalid(name, "an object with x/y"))?;
    let axis = |axis: &str| {
        fields
            .get(axis)
            .and_then(Value::as_float)
            .ok_or_else(|| invalid(name, "an object with x/y"))
    };
    Ok(Vec2::new(axis("x")?, axis("y")?))
}

/// Bake a document into a level descriptor.
///
/// Walks the layers in document order: tile layers concatenate into one
/// index sequence, object layers append their entities in first-encountered
/// order. Any error aborts the whole run.
pub fn compile(doc: &MapDocument) -> Result<LevelDescriptor, CompileError> {
    log::debug!("baking '{}' ({} layers)", doc.name, doc.layers.len());

    let mut level = LevelDescriptor {
        background_color: required_color(doc, "background_color")?,
        font_color: required_color(doc, "font_color")?,
        particle_chance: required_float(doc, "particle_chance")?,
        particle_sprite: required_int(doc, "particle_sprite")?,
        stars: required_int(doc, "stars")?,
        start_position: required_position(doc, "start_position")?,
        monsters: Vec::new(),
        tiles: Vec::new(),
    };

    for layer in &doc.layers {
        match &layer.data {
            LayerData::Tiles { tiles, .. } => {
                level.tiles.extend(flatten_tile_layer(tiles));
            }
            LayerData::Objects { .. } => {
                level.monsters.extend(compile_layer(doc, layer)?);
            }
        }
    }

    log::debug!(
        "baked {} tiles and {} monsters",
        level.tiles.len(),
        level.monsters.len()
    );
    Ok(level)
}

/// Bake a document and write the level file.
///
/// The descriptor and its serialized form are composed fully in memory
/// before the single write, so a failing run never leaves a partial file.
pub fn write_level(doc: &MapDocument, path: &Path) -> Result<(), CompileError> {
    let level = compile(doc)?;
    let json = level.to_pretty_json()?;
    fs::write(path, json)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_baker_core::{Layer, LayerData, PlacedObject, TileClass, TileDef, Tileset};

    fn tileset() -> Tileset {
        Tileset::new("sprites".to_string(), "sprites.png".to_string(), 8, 16, 16)
    }

    fn document_with_globals() -> MapDocument {
        let mut doc = MapDocument::new("level1".to_string(), tileset());
        doc.properties.extend([
            ("background_color".to_string(), Value::Int(0)),
            ("font_color".to_string(), Value::Int(12)),
            ("particle_chance".to_string(), Value::Float(0.1)),
            ("particle_sprite".to_string(), Value::Int(5)),
            ("stars".to_string(), Value::Int(3)),
            ("start_position".to_string(), Value::vec2(10.0, 20.0)),
        ]);
        doc
    }

    fn two_by_two_layer() -> Layer {
        let mut layer = Layer::new_tile_layer("Ground".to_string(), 2, 2);
        layer.data = LayerData::Tiles {
            width: 2,
            height: 2,
            tiles: vec![Some(1), Some(0), Some(2), Some(3)],
        };
        layer
    }

    #[test]
    fn test_flatten_shifts_ids_and_keeps_zero_for_empty() {
        let flat = flatten_tile_layer(&[Some(1), None, Some(2), Some(3)]);
        assert_eq!(flat, vec![2, 0, 3, 4]);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let grid = vec![Some(4), None, None, Some(9), Some(0), None];
        assert_eq!(flatten_tile_layer(&grid), flatten_tile_layer(&grid));
        assert_eq!(flatten_tile_layer(&grid).len(), grid.len());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut doc = document_with_globals();
        doc.layers.push(two_by_two_layer());

        let level = compile(&doc).unwrap();
        assert_eq!(level.background_color, "Black");
        assert_eq!(level.font_color, "White");
        assert_eq!(level.particle_chance, 0.1);
        assert_eq!(level.particle_sprite, 5);
        assert_eq!(level.stars, 3);
        assert_eq!(level.start_position, Vec2::new(10.0, 20.0));
        assert_eq!(level.tiles, vec![2, 1, 3, 4]);
        assert!(level.monsters.is_empty());
    }

    #[test]
    fn test_tile_layers_concatenate_in_order() {
        let mut doc = document_with_globals();
        doc.layers.push(two_by_two_layer());
        let mut second = Layer::new_tile_layer("Deco".to_string(), 2, 1);
        second.data = LayerData::Tiles {
            width: 2,
            height: 1,
            tiles: vec![None, Some(7)],
        };
        doc.layers.push(second);

        let level = compile(&doc).unwrap();
        assert_eq!(level.tiles, vec![2, 1, 3, 4, 0, 8]);
    }

    #[test]
    fn test_missing_global_property_is_fatal() {
        let mut doc = document_with_globals();
        doc.properties.remove("stars");

        let err = compile(&doc).unwrap_err();
        assert!(matches!(
            err,
            CompileError::MissingProperty { ref name, ref owner }
                if name == "stars" && owner == "map"
        ));
    }

    #[test]
    fn test_start_position_needs_both_axes() {
        let mut doc = document_with_globals();
        doc.properties.insert(
            "start_position".to_string(),
            Value::Object(std::collections::HashMap::from([(
                "x".to_string(),
                Value::Float(10.0),
            )])),
        );
        assert!(matches!(
            compile(&doc),
            Err(CompileError::InvalidProperty { ref name, .. }) if name == "start_position"
        ));
    }

    #[test]
    fn test_out_of_range_color_is_fatal() {
        let mut doc = document_with_globals();
        doc.properties
            .insert("font_color".to_string(), Value::Int(16));
        assert!(matches!(
            compile(&doc),
            Err(CompileError::PaletteRange { table: "color", code: 16, .. })
        ));
    }

    fn monster_document() -> MapDocument {
        let mut doc = document_with_globals();
        doc.tileset.set_tile_def(
            40,
            TileDef::new()
                .with_class("Walker")
                .with_property("frames", 2i64),
        );
        doc.classes.insert(
            "Walker".to_string(),
            TileClass::new()
                .with_property("collision", 1i64)
                .with_property("movement", 0i64),
        );
        doc
    }

    #[test]
    fn test_object_layers_append_monsters_in_order() {
        let mut doc = monster_document();
        let mut layer = Layer::new_object_layer("Monsters".to_string());
        layer.data = LayerData::Objects {
            objects: vec![
                PlacedObject::new("a", 8.0, 8.0, 40),
                PlacedObject::new("b", 16.0, 8.0, 40),
            ],
            group: None,
        };
        doc.layers.push(two_by_two_layer());
        doc.layers.push(layer);

        let level = compile(&doc).unwrap();
        assert_eq!(level.monsters.len(), 2);
        assert_eq!(level.monsters[0].position.x, 8.0);
        assert_eq!(level.monsters[1].position.x, 16.0);
        for monster in &level.monsters {
            assert_eq!(monster.sprites.len(), monster.reverse_sprites.len());
        }
    }

    #[test]
    fn test_failed_bake_writes_no_file() {
        let mut doc = monster_document();
        // out-of-range collision code on the object
        let mut layer = Layer::new_object_layer("Monsters".to_string());
        layer.data = LayerData::Objects {
            objects: vec![PlacedObject::new("bad", 0.0, 0.0, 40).with_property("collision", 99i64)],
            group: None,
        };
        doc.layers.push(layer);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level1.json");
        let err = write_level(&doc, &path).unwrap_err();

        assert!(matches!(err, CompileError::PaletteRange { code: 99, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_level_emits_pretty_json() {
        let mut doc = document_with_globals();
        doc.layers.push(two_by_two_layer());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level1.json");
        write_level(&doc, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: LevelDescriptor = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.tiles, vec![2, 1, 3, 4]);
        assert!(written.contains("\n    \"tiles\""));
    }
}
