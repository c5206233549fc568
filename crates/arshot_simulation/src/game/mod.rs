//! Game domain: session state machine, scoring, round clock, HUD
//!
//! Содержит:
//! - Phase / SessionState / RoundTimer
//! - GameController (ContactObserver) — вся логика раунда
//! - SceneGraph / CommandsScene — spawn/remove тел
//! - UiCommand / UiPost / Hud — display через очередь
//! - GamePlugin — системы, порядок, события

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

pub mod controller;
pub mod hud;
pub mod scene;
pub mod state;
pub mod systems;


pub use controller::{ContactBody, ContactObserver, ContactOutcome, GameController, TapOutcome};
pub use hud::{apply_ui_commands_main_thread, clock_label, Hud, UiCommand, UiPost};
pub use scene::{CommandsScene, SceneGraph};
pub use state::{Phase, RoundTimer, SessionState};
pub use systems::{TapEvent, TapResolved};

use crate::config::GameConfig;
use crate::objects::despawn_after_timeout;
use crate::tracking::{apply_tracking_commands, TrackingPlugin};

/// Game Plugin
///
/// `GameConfig` берётся из World если хост вставил его до плагина,
/// иначе default.
///
/// Порядок выполнения (Update):
/// 1. apply_tracking_commands — run/pause сессии
/// 2. sync_game_config — изменённый GameConfig → GameController
/// 3. handle_taps — TapEvent → placement / fire
/// 4. handle_contacts — Rapier CollisionEvent::Started → on_contact
/// 5. tick_round_timer — round clock
/// 6. handle_session_end — TrackingSessionEnded → teardown
/// 7. despawn_after_timeout — уборка projectiles (cleanup delay / lifetime)
/// 8. apply_ui_commands_main_thread — UiCommand → Hud
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TrackingPlugin>() {
            app.add_plugins(TrackingPlugin);
        }

        let config = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();

        app.register_type::<GameConfig>()
            .insert_resource(GameController::new(config.clone()))
            .insert_resource(config)
            .init_resource::<Hud>();

        // Rapier регистрирует его сам, но headless тесты работают без RapierPhysicsPlugin
        app.add_event::<CollisionEvent>()
            .add_event::<TapEvent>()
            .add_event::<TapResolved>()
            .add_event::<UiCommand>();

        app.add_systems(Startup, systems::announce_hud);

        app.add_systems(
            Update,
            (
                systems::sync_game_config.run_if(resource_changed::<GameConfig>),
                systems::handle_taps,
                systems::handle_contacts,
                systems::tick_round_timer,
                systems::handle_session_end,
                despawn_after_timeout,
                apply_ui_commands_main_thread,
            )
                .chain()
                .after(apply_tracking_commands),
        );
    }
}
