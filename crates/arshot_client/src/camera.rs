use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use arshot_simulation::{CameraPose, TrackingSession};

/// Free-look камера вместо AR tracking: её transform = поза устройства.
pub struct TrackingCameraPlugin;

impl Plugin for TrackingCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackingLost>().add_systems(
            Update,
            (
                free_look_controls,
                update_camera_transform,
                submit_camera_pose,
            )
                .chain()
                .before(arshot_simulation::game::systems::handle_taps),
        );
    }
}

#[derive(Component)]
pub struct TrackedCamera {
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
    pub move_speed: f32,
}

impl Default for TrackedCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.005,
            move_speed: 1.5,
        }
    }
}

/// [T] toggles simulated tracking loss (no pose delivered)
#[derive(Resource, Default)]
pub struct TrackingLost(pub bool);

/// Right mouse: look around. WASD: walk (world tracking).
fn free_look_controls(
    mut query: Query<(&mut TrackedCamera, &mut Transform)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
) {
    let Ok((mut camera, mut transform)) = query.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) {
        for motion in mouse_motion.read() {
            camera.yaw -= motion.delta.x * camera.sensitivity;
            camera.pitch -= motion.delta.y * camera.sensitivity;

            // Clamp pitch to avoid gimbal lock
            camera.pitch = camera.pitch.clamp(
                -std::f32::consts::FRAC_PI_2 + 0.1,
                std::f32::consts::FRAC_PI_2 - 0.1,
            );
        }
    } else {
        // Consume motion events even when not looking around
        mouse_motion.clear();
    }

    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction += *transform.forward();
    }
    if keys.pressed(KeyCode::KeyS) {
        direction -= *transform.forward();
    }
    if keys.pressed(KeyCode::KeyD) {
        direction += *transform.right();
    }
    if keys.pressed(KeyCode::KeyA) {
        direction -= *transform.right();
    }

    direction.y = 0.0;
    if direction.length_squared() > 0.01 {
        transform.translation += direction.normalize() * camera.move_speed * time.delta_secs();
    }
}

/// Update camera rotation from yaw/pitch
fn update_camera_transform(mut query: Query<(&TrackedCamera, &mut Transform), Changed<TrackedCamera>>) {
    for (camera, mut transform) in query.iter_mut() {
        transform.rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    }
}

/// Camera transform → TrackingSession (one frame per render frame)
fn submit_camera_pose(
    query: Query<&Transform, With<TrackedCamera>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut lost: ResMut<TrackingLost>,
    mut session: ResMut<TrackingSession>,
) {
    if keys.just_pressed(KeyCode::KeyT) {
        lost.0 = !lost.0;
        arshot_simulation::logger::log_info(&format!("Simulated tracking loss: {}", lost.0));
    }

    let Ok(transform) = query.single() else {
        return;
    };

    if lost.0 {
        session.drop_frame();
    } else {
        session.submit_frame(CameraPose::from_transform(transform));
    }
}
