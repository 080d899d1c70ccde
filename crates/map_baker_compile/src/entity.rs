//! Baking placed objects into entity descriptors

use crate::descriptor::{EntityDescriptor, Vec2};
use crate::palette::Palette;
use crate::resolve::PropertyChain;
use crate::CompileError;
use map_baker_core::{Layer, LayerData, MapDocument, PlacedObject, Value};

/// Bounding size entities get unless a composite layer overrides it
pub const DEFAULT_ENTITY_SIZE: i64 = 8;

/// Authored marker for "no explicit mirrored sprite"
const UNSET_SPRITE: i64 = -1;

/// The mirrored sprite index for one object.
///
/// An explicit override wins; an absent property and the authored `-1`
/// marker both mean "derive it". Mirrored frames sit directly after the
/// forward frames in the sprite sheet, so the derived index is
/// `tile_id + frames`.
fn mirrored_index(chain: &PropertyChain, tile_id: u32, frames: i64) -> i64 {
    match chain.int("reverse_sprite") {
        Some(index) if index != UNSET_SPRITE => index,
        _ => i64::from(tile_id) + frames,
    }
}

fn require_tile(doc: &MapDocument, object: &PlacedObject) -> Result<(), CompileError> {
    if doc.tileset.contains(object.tile_id) {
        Ok(())
    } else {
        Err(CompileError::UnknownTile {
            object: object.label(),
            tile_id: object.tile_id,
        })
    }
}

fn palette_code(
    chain: &PropertyChain,
    object: &PlacedObject,
    name: &str,
) -> Result<i64, CompileError> {
    chain.int(name).ok_or_else(|| CompileError::MissingProperty {
        name: name.to_string(),
        owner: object.label(),
    })
}

/// Bake a single placed object into an entity descriptor.
///
/// Pure function of the object and its resolution chain: base fields come
/// from the chain, the sprite list is the object's own tile plus its
/// mirrored counterpart.
pub fn compile_object(
    doc: &MapDocument,
    object: &PlacedObject,
) -> Result<EntityDescriptor, CompileError> {
    require_tile(doc, object)?;
    let chain = PropertyChain::for_object(doc, object);

    let frames = chain.int("frames").unwrap_or(1);
    let collision = Palette::Collision.resolve(palette_code(&chain, object, "collision")?, "collision")?;
    let movement = Palette::Movement.resolve(palette_code(&chain, object, "movement")?, "movement")?;

    Ok(EntityDescriptor {
        position: Vec2::new(object.x, object.y),
        collision: collision.to_string(),
        movement: movement.to_string(),
        velocity: chain.vec2("velocity"),
        gravity: chain.float("gravity").unwrap_or(0.0),
        sprites: vec![i64::from(object.tile_id)],
        reverse_sprites: vec![mirrored_index(&chain, object.tile_id, frames)],
        width: DEFAULT_ENTITY_SIZE,
        height: DEFAULT_ENTITY_SIZE,
    })
}

/// Bake a composite object layer into one entity descriptor.
///
/// Base fields come from the first object's own chain - sibling objects are
/// never consulted for them. Every object contributes its tile and mirrored
/// index to the parallel sprite lists, in layer order. Bounding size comes
/// from the layer's own properties, falling back to 8x8.
fn compile_group(
    doc: &MapDocument,
    layer: &Layer,
    objects: &[PlacedObject],
) -> Result<EntityDescriptor, CompileError> {
    let first = objects.first().ok_or_else(|| CompileError::EmptyGroup {
        layer: layer.name.clone(),
    })?;

    let mut entity = compile_object(doc, first)?;
    entity.sprites.clear();
    entity.reverse_sprites.clear();

    for object in objects {
        require_tile(doc, object)?;
        let chain = PropertyChain::for_object(doc, object);
        let frames = chain.int("frames").unwrap_or(1);
        entity.sprites.push(i64::from(object.tile_id));
        entity
            .reverse_sprites
            .push(mirrored_index(&chain, object.tile_id, frames));
    }

    let size = |name: &str| {
        layer
            .properties
            .get(name)
            .and_then(Value::as_int)
            .unwrap_or(DEFAULT_ENTITY_SIZE)
    };
    entity.width = size("width");
    entity.height = size("height");

    log::debug!(
        "layer '{}' baked as composite entity with {} sprites",
        layer.name,
        entity.sprites.len()
    );
    Ok(entity)
}

/// Bake an object layer: one descriptor for a composite layer, one per
/// object otherwise. Tile layers yield nothing here.
pub fn compile_layer(
    doc: &MapDocument,
    layer: &Layer,
) -> Result<Vec<EntityDescriptor>, CompileError> {
    match &layer.data {
        LayerData::Tiles { .. } => Ok(Vec::new()),
        LayerData::Objects { objects, group } => {
            if group.is_some() {
                Ok(vec![compile_group(doc, layer, objects)?])
            } else {
                objects
                    .iter()
                    .map(|object| compile_object(doc, object))
                    .collect()
            }
        }
    }
}
