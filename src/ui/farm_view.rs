//! Sprite synchronisation — keep tile, plant, and player squares in step
//! with the model.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::farming::Plant;
use crate::game::Farm;
use crate::shared::*;

#[derive(Component, Debug, Clone)]
pub struct GroundSprite {
    pub position: Position,
}

#[derive(Component, Debug, Clone)]
pub struct PlantSprite {
    pub position: Position,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerSprite;

/// Marks the small square showing which way the player faces.
#[derive(Component, Debug, Clone)]
pub struct FacingMarker;

/// Plant entities keyed by grid position. View-local.
#[derive(Resource, Default, Debug)]
pub struct FarmSprites {
    pub plants: HashMap<Position, Entity>,
}

/// Centre of a tile in world space. Row 0 is drawn at the top and the map
/// is centred on the origin.
pub fn grid_to_world((row, col): Position, (rows, cols): (usize, usize), z: f32) -> Vec3 {
    let x = (col as f32 - (cols as f32 - 1.0) / 2.0) * TILE_SIZE;
    let y = ((rows as f32 - 1.0) / 2.0 - row as f32) * TILE_SIZE;
    Vec3::new(x, y, z)
}

pub fn ground_color(ground: GroundKind) -> Color {
    match ground {
        GroundKind::Grass => Color::srgb(0.36, 0.62, 0.28),
        GroundKind::Soil => Color::srgb(0.45, 0.32, 0.20),
        GroundKind::Untilled => Color::srgb(0.62, 0.50, 0.34),
        GroundKind::Water => Color::srgb(0.22, 0.45, 0.78),
    }
}

/// Pale yellow-green for seedlings through to vivid green when ripe; red
/// once there is produce to pick.
pub fn crop_stage_color(plant: &Plant) -> Color {
    if plant.is_harvestable() {
        return Color::srgb(0.85, 0.25, 0.25);
    }
    let max = plant.def().max_stage().max(1) as f32;
    let progress = plant.stage() as f32 / max;
    let r = 0.5 * (1.0 - progress) + 0.2 * progress;
    let g = 0.65 + 0.15 * progress;
    let b = 0.2 * (1.0 - progress);
    Color::srgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

pub fn spawn_ground(mut commands: Commands, farm: Res<Farm>) {
    let dims = farm.dimensions();
    for (position, ground) in farm.map().iter() {
        commands.spawn((
            Sprite {
                color: ground_color(ground),
                custom_size: Some(Vec2::splat(TILE_SIZE - 1.0)),
                ..default()
            },
            Transform::from_translation(grid_to_world(position, dims, 0.0)),
            GroundSprite { position },
        ));
    }

    commands
        .spawn((
            Sprite {
                color: Color::srgb(0.95, 0.85, 0.55),
                custom_size: Some(Vec2::splat(TILE_SIZE * 0.6)),
                ..default()
            },
            Transform::from_translation(grid_to_world(farm.player().position(), dims, 3.0)),
            PlayerSprite,
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite {
                    color: Color::srgb(0.15, 0.1, 0.05),
                    custom_size: Some(Vec2::splat(TILE_SIZE * 0.15)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 0.1),
                FacingMarker,
            ));
        });
}

pub fn sync_ground_sprites(farm: Res<Farm>, mut query: Query<(&GroundSprite, &mut Sprite)>) {
    for (tile, mut sprite) in query.iter_mut() {
        if let Ok(ground) = farm.map().get(tile.position) {
            sprite.color = ground_color(ground);
        }
    }
}

/// Update existing plant squares, spawn missing ones, despawn stale ones.
pub fn sync_plant_sprites(
    mut commands: Commands,
    mut sprites: ResMut<FarmSprites>,
    farm: Res<Farm>,
    mut query: Query<(&PlantSprite, &mut Sprite)>,
) {
    for (tile, mut sprite) in query.iter_mut() {
        if let Some(plant) = farm.plant_at(tile.position) {
            sprite.color = crop_stage_color(plant);
        }
    }

    let dims = farm.dimensions();
    for (&position, plant) in farm.plants() {
        if sprites.plants.contains_key(&position) {
            continue;
        }
        let entity = commands
            .spawn((
                Sprite {
                    color: crop_stage_color(plant),
                    custom_size: Some(Vec2::splat(TILE_SIZE * 0.5)),
                    ..default()
                },
                Transform::from_translation(grid_to_world(position, dims, 2.0)),
                PlantSprite { position },
            ))
            .id();
        sprites.plants.insert(position, entity);
    }

    let stale: Vec<Position> = sprites
        .plants
        .keys()
        .filter(|pos| farm.plant_at(**pos).is_none())
        .copied()
        .collect();
    for position in stale {
        if let Some(entity) = sprites.plants.remove(&position) {
            commands.entity(entity).despawn();
        }
    }
}

pub fn sync_player_sprite(
    farm: Res<Farm>,
    mut player_query: Query<&mut Transform, (With<PlayerSprite>, Without<FacingMarker>)>,
    mut marker_query: Query<&mut Transform, (With<FacingMarker>, Without<PlayerSprite>)>,
) {
    let player = farm.player();
    if let Ok(mut transform) = player_query.get_single_mut() {
        transform.translation = grid_to_world(player.position(), farm.dimensions(), 3.0);
    }
    if let Ok(mut transform) = marker_query.get_single_mut() {
        let (dr, dc) = player.facing().delta();
        let offset = TILE_SIZE * 0.2;
        transform.translation.x = dc as f32 * offset;
        transform.translation.y = -(dr as f32) * offset;
    }
}
