//! ECS systems: collaborator events → GameController
//!
//! Все системы берут `ResMut<GameController>`, поэтому scheduler их
//! сериализует; в `GamePlugin` они ещё и `.chain()`-ены в фиксированном порядке.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use super::controller::{ContactBody, ContactObserver, GameController, TapOutcome};
use super::hud::UiCommand;
use super::scene::CommandsScene;
use crate::collision::PhysicsTag;
use crate::config::GameConfig;
use crate::objects::{Projectile, Target};
use crate::tracking::{TrackingSession, TrackingSessionEnded};

/// Event: user tapped the screen
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapEvent;

/// Event: result of a processed tap (для хоста и тестов)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapResolved(pub TapOutcome);

/// System (Startup): initial HUD labels
pub fn announce_hud(controller: Res<GameController>, mut ui: EventWriter<UiCommand>) {
    controller.announce(&mut ui);
}

/// System (run_if resource_changed): GameConfig → GameController
pub fn sync_game_config(config: Res<GameConfig>, mut controller: ResMut<GameController>) {
    if controller.config() == &*config {
        return;
    }

    crate::logger::log_info(&format!("GameConfig updated: {:?}", *config));
    controller.set_config(config.clone());
}

/// System: TapEvent → place target / fire projectile
pub fn handle_taps(
    mut taps: EventReader<TapEvent>,
    mut controller: ResMut<GameController>,
    session: Res<TrackingSession>,
    mut commands: Commands,
    time: Res<Time>,
    mut ui: EventWriter<UiCommand>,
    mut resolved: EventWriter<TapResolved>,
) {
    for _tap in taps.read() {
        let mut scene = CommandsScene::new(&mut commands, time.elapsed_secs());
        let outcome = controller.on_tap(session.current_pose(), &mut scene, &mut ui);
        resolved.write(TapResolved(outcome));
    }
}

/// System: Rapier contact began → ContactObserver
///
/// Тела без `PhysicsTag` (или уже удалённые) игнорируются.
pub fn handle_contacts(
    mut collisions: EventReader<CollisionEvent>,
    tags: Query<&PhysicsTag>,
    mut controller: ResMut<GameController>,
    mut commands: Commands,
    time: Res<Time>,
    mut ui: EventWriter<UiCommand>,
) {
    let mut scene = CommandsScene::new(&mut commands, time.elapsed_secs());

    for event in collisions.read() {
        let CollisionEvent::Started(entity_a, entity_b, _flags) = *event else {
            continue;
        };

        let (Ok(tag_a), Ok(tag_b)) = (tags.get(entity_a), tags.get(entity_b)) else {
            continue;
        };

        controller.on_contact(
            ContactBody {
                entity: entity_a,
                category: tag_a.category,
            },
            ContactBody {
                entity: entity_b,
                category: tag_b.category,
            },
            &mut scene,
            &mut ui,
        );
    }
}

/// System: advance the round timer
pub fn tick_round_timer(
    time: Res<Time>,
    mut controller: ResMut<GameController>,
    mut ui: EventWriter<UiCommand>,
) {
    controller.tick(time.delta(), &mut ui);
}

/// System: TrackingSessionEnded → teardown
pub fn handle_session_end(
    mut ended: EventReader<TrackingSessionEnded>,
    bodies: Query<Entity, Or<(With<Target>, With<Projectile>)>>,
    mut controller: ResMut<GameController>,
    mut commands: Commands,
    time: Res<Time>,
    mut ui: EventWriter<UiCommand>,
) {
    if ended.read().count() == 0 {
        return;
    }

    let mut scene = CommandsScene::new(&mut commands, time.elapsed_secs()).with_live_bodies(bodies.iter());
    controller.teardown(&mut scene, &mut ui);
}
