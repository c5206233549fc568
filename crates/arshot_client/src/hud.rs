//! HUD labels: Hud resource → UI nodes

use bevy::prelude::*;
use arshot_simulation::Hud;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            sync_hud_labels.after(arshot_simulation::game::apply_ui_commands_main_thread),
        );
    }
}

#[derive(Component)]
struct TimeLabel;

#[derive(Component)]
struct ScoreLabel;

#[derive(Component)]
struct PrizeIcon;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        TimeLabel,
        Text::new(""),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
    ));

    commands.spawn((
        ScoreLabel,
        Text::new("0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            ..default()
        },
    ));

    commands.spawn((
        PrizeIcon,
        Text::new("PRIZE"),
        TextColor(Color::srgb(1.0, 0.84, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            right: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
    ));

    // Crosshair
    commands.spawn((
        Text::new("+"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(50.0),
            left: Val::Percent(50.0),
            ..default()
        },
    ));
}

fn visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

fn sync_hud_labels(
    hud: Res<Hud>,
    mut time_label: Query<(&mut Text, &mut Visibility), (With<TimeLabel>, Without<ScoreLabel>, Without<PrizeIcon>)>,
    mut score_label: Query<&mut Text, (With<ScoreLabel>, Without<TimeLabel>)>,
    mut prize_icon: Query<&mut Visibility, (With<PrizeIcon>, Without<TimeLabel>)>,
) {
    if !hud.is_changed() {
        return;
    }

    if let Ok((mut text, mut vis)) = time_label.single_mut() {
        *vis = visibility(hud.time_label.is_some());
        if let Some(label) = &hud.time_label {
            **text = label.clone();
        }
    }

    if let Ok(mut text) = score_label.single_mut() {
        **text = hud.score_label.clone();
    }

    if let Ok(mut vis) = prize_icon.single_mut() {
        *vis = visibility(hud.prize_visible);
    }
}
