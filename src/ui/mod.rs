//! Placeholder view — coloured squares for the farm and a text info bar.
//!
//! Everything here reads `Farm` and never writes it.

mod farm_view;
mod hud;

use bevy::prelude::*;

use crate::game::Farm;

pub use farm_view::{crop_stage_color, ground_color, grid_to_world};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<farm_view::FarmSprites>()
            .add_systems(
                Startup,
                (setup_camera, farm_view::spawn_ground, hud::spawn_hud),
            )
            .add_systems(
                PostUpdate,
                (
                    farm_view::sync_ground_sprites,
                    farm_view::sync_plant_sprites,
                    farm_view::sync_player_sprite,
                    hud::update_hud,
                )
                    .run_if(resource_exists_and_changed::<Farm>),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
