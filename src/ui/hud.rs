use bevy::prelude::*;

use crate::economy::format_money;
use crate::game::Farm;
use crate::model::FarmModel;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudInfoText;

#[derive(Component)]
pub struct HudItemText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudInfoText,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(8.0),
            ..default()
        },
        HudItemText,
    ));
}

pub fn update_hud(
    farm: Res<Farm>,
    mut info_query: Query<&mut Text, (With<HudInfoText>, Without<HudItemText>)>,
    mut item_query: Query<&mut Text, (With<HudItemText>, Without<HudInfoText>)>,
) {
    if let Ok(mut text) = info_query.get_single_mut() {
        text.0 = info_line(&farm);
    }
    if let Ok(mut text) = item_query.get_single_mut() {
        text.0 = item_panel(&farm);
    }
}

/// "Day: 3   Money: $12   Energy: 97"
pub fn info_line(model: &FarmModel) -> String {
    let player = model.player();
    format!(
        "Day: {}   Money: {}   Energy: {}",
        model.day(),
        format_money(player.money()),
        player.energy()
    )
}

/// One line per catalogue item: count, prices, and a marker on the
/// selected item. Prices missing from the tables show as N/A.
pub fn item_panel(model: &FarmModel) -> String {
    let player = model.player();
    let price = |p: Option<u32>| p.map(format_money).unwrap_or_else(|| "N/A".to_string());

    model
        .config()
        .prices
        .listings()
        .into_iter()
        .enumerate()
        .map(|(slot, listing)| {
            let marker = if player.selected_item() == Some(listing.item.as_str()) {
                '>'
            } else {
                ' '
            };
            format!(
                "{}{} {}: {}  sell {}  buy {}",
                marker,
                slot + 1,
                listing.item,
                player.count(&listing.item),
                price(listing.sell_price),
                price(listing.buy_price),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
