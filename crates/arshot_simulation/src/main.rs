//! Headless прогон arshot
//!
//! Скриптовый раунд без рендера: tracking session → 3 targets веером →
//! 3 выстрела по ним → Rapier сообщает контакты → раунд закончен.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use arshot_simulation::{
    create_stepped_app, CameraPose, GameController, Hud, Phase, SimulationPlugin, TapEvent, TrackingCommand,
    TrackingConfiguration, TrackingSession,
};

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 1200;
/// Углы веера (yaw, рад) — по одной target на угол
const YAWS: [f32; 3] = [-0.3, 0.0, 0.3];

fn main() {
    println!("Starting arshot headless round");

    let mut app = create_stepped_app(FRAME);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
    ));
    app.finish();
    app.cleanup();

    app.world_mut()
        .send_event(TrackingCommand::Run(TrackingConfiguration::WorldTracking));
    app.update();

    // Placing: по одному tap на угол
    for yaw in YAWS {
        aim(&mut app, yaw);
        app.world_mut().send_event(TapEvent);
        app.update();
    }
    report(&app, 0);

    // Shooting: выстрел по каждой target, ждём пока долетит
    let mut frame = 0;
    for yaw in YAWS {
        aim(&mut app, yaw);
        app.world_mut().send_event(TapEvent);

        let before = targets_remaining(&app);
        while targets_remaining(&app) == before && frame < MAX_FRAMES {
            app.update();
            frame += 1;
        }
        report(&app, frame);
    }

    let phase = app.world().resource::<GameController>().state().phase();
    if phase == Phase::Placing {
        println!("Round complete after {} frames", frame);
    } else {
        println!("Round did not finish within {} frames", MAX_FRAMES);
    }
}

fn aim(app: &mut App, yaw: f32) {
    let pose = CameraPose::new(Vec3::new(0.0, 1.5, 0.0), Quat::from_rotation_y(yaw));
    app.world_mut().resource_mut::<TrackingSession>().submit_frame(pose);
}

fn targets_remaining(app: &App) -> u32 {
    app.world().resource::<GameController>().state().targets_remaining()
}

fn report(app: &App, frame: usize) {
    let hud = app.world().resource::<Hud>();
    println!(
        "Frame {}: score={} clock={} prize={}",
        frame,
        hud.score_label,
        hud.time_label.as_deref().unwrap_or("--:--"),
        hud.prize_visible
    );
}
