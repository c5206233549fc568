//! arshot Simulation Core
//!
//! AR-тир на Bevy 0.16: поставить 3 targets перед камерой, сбить их projectiles.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state (phase, счёт, раундовый таймер, правила контактов)
//! - Хост = tracking камеры, рендер, input, HUD labels
//! - Rapier = rigid bodies + contact detection

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

// Публичные модули
pub mod collision;
pub mod config;
pub mod game;
pub mod logger;
pub mod objects;
pub mod tracking;

// Re-export для удобства
pub use collision::{classify_contact, CollisionCategory, PhysicsTag, TargetSide};
pub use config::GameConfig;
pub use game::{
    clock_label, CommandsScene, ContactBody, ContactObserver, ContactOutcome, GameController, GamePlugin, Hud,
    Phase, SceneGraph, SessionState, TapEvent, TapOutcome, TapResolved, UiCommand, UiPost,
};
pub use objects::{Appearance, DespawnAfter, Projectile, Shape, Target};
pub use tracking::{
    CameraPose, TrackingCommand, TrackingConfiguration, TrackingPlugin, TrackingSession, TrackingSessionEnded,
};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Rapier НЕ добавляется здесь: хост решает, с каким backend крутить физику.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((TrackingPlugin, GamePlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins);

    app
}

/// Headless App с фиксированным шагом времени (каждый `update()` = `step`)
///
/// Для тестов и скриптовых прогонов: раундовый таймер считает детерминированно.
pub fn create_stepped_app(step: Duration) -> App {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));

    app
}
