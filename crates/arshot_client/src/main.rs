use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use arshot_simulation::{logger, SimulationPlugin};

mod camera;
mod hud;
mod input;
mod rendering;

use camera::TrackingCameraPlugin;
use hud::HudPlugin;
use input::InputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    logger::init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "arshot".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Frame statistics
        .add_plugins((FrameTimeDiagnosticsPlugin::default(), LogDiagnosticsPlugin::default()))
        // Physics world (contacts → CollisionEvent)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Game logic (headless ECS)
        .add_plugins(SimulationPlugin)
        // Host collaborators
        .add_plugins((TrackingCameraPlugin, InputPlugin, RenderingSyncPlugin, HudPlugin))
        .add_systems(Startup, setup_scene)
        .run();
}

/// Floor grid, lights, camera
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Пол — только для ориентира, без collider (targets висят в воздухе)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(10.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.28, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.5, 0.0),
        camera::TrackedCamera::default(),
    ));
}
