//! Session integration test
//!
//! Полный headless App (без Rapier): TapEvent и CollisionEvent шлём руками,
//! время идёт шагами по 250ms.
//!
//! Проверяем:
//! - placement → shooting → reset через ECS системы
//! - HUD через очередь UiCommand
//! - teardown при паузе tracking session

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use arshot_simulation::*;

const STEP: Duration = Duration::from_millis(250);

/// Helper: App с SimulationPlugin и запущенной tracking session
fn create_session_app() -> App {
    let mut app = create_stepped_app(STEP);
    app.add_plugins(SimulationPlugin);

    app.world_mut()
        .send_event(TrackingCommand::Run(TrackingConfiguration::WorldTracking));
    app.update();

    app
}

fn submit_pose(app: &mut App, yaw: f32) {
    let pose = CameraPose::new(Vec3::new(0.0, 1.5, 0.0), Quat::from_rotation_y(yaw));
    app.world_mut().resource_mut::<TrackingSession>().submit_frame(pose);
}

fn tap(app: &mut App) {
    app.world_mut().send_event(TapEvent);
    app.update();
}

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
    app.update();
}

/// Outcome последнего tap (TapResolved текущего кадра)
fn last_tap_outcome(app: &App) -> Option<TapOutcome> {
    app.world()
        .resource::<Events<TapResolved>>()
        .iter_current_update_events()
        .last()
        .map(|resolved| resolved.0)
}

fn entities_with<C: Component>(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<C>>();
    let mut entities: Vec<Entity> = query.iter(world).collect();
    entities.sort();
    entities
}

fn state(app: &App) -> SessionState {
    app.world().resource::<GameController>().state().clone()
}

fn hud(app: &App) -> Hud {
    app.world().resource::<Hud>().clone()
}

/// Helper: 3 targets веером, раунд начат
fn place_three(app: &mut App) {
    for yaw in [-0.3, 0.0, 0.3] {
        submit_pose(app, yaw);
        tap(app);
    }
}

/// Helper: выстрел, возвращает новый projectile
fn fire(app: &mut App) -> Entity {
    let before = entities_with::<Projectile>(app);
    tap(app);
    let after = entities_with::<Projectile>(app);

    let new: Vec<Entity> = after.into_iter().filter(|e| !before.contains(e)).collect();
    assert_eq!(new.len(), 1, "exactly one projectile per tap");
    new[0]
}

#[test]
fn test_initial_hud() {
    let app = create_session_app();

    let hud = hud(&app);
    assert_eq!(hud.score_label, "0");
    assert_eq!(hud.time_label, None);
    assert!(!hud.prize_visible);
    assert_eq!(state(&app).phase(), Phase::Placing);
}

#[test]
fn test_full_round_scenario() {
    let mut app = create_session_app();

    place_three(&mut app);
    assert!(matches!(
        last_tap_outcome(&app),
        Some(TapOutcome::TargetPlaced {
            targets_remaining: 3,
            round_started: true,
            ..
        })
    ));

    let targets = entities_with::<Target>(&mut app);
    assert_eq!(targets.len(), 3);
    assert_eq!(state(&app).phase(), Phase::Shooting);
    assert_eq!(state(&app).targets_remaining(), 3);
    assert!(state(&app).timer_running());
    assert!(hud(&app).prize_visible);
    assert_eq!(hud(&app).score_label, "3");

    let mut remaining = Vec::new();
    let mut projectiles = Vec::new();
    for target in &targets {
        let bullet = fire(&mut app);
        projectiles.push(bullet);
        contact(&mut app, bullet, *target);

        assert!(app.world().get_entity(*target).is_err(), "target removed immediately");
        assert!(app.world().get_entity(bullet).is_ok(), "projectile kept for the cleanup delay");
        remaining.push(state(&app).targets_remaining());
    }

    assert_eq!(remaining, vec![2, 1, 0]);
    assert_eq!(state(&app).phase(), Phase::Placing);
    assert_eq!(state(&app).elapsed_seconds(), 0);
    assert!(!state(&app).timer_running());

    let hud = hud(&app);
    assert_eq!(hud.score_label, "0");
    assert_eq!(hud.time_label, None);
    assert!(!hud.prize_visible);

    // 0.5s cleanup delay = 2 шага по 250ms, с запасом
    for _ in 0..4 {
        app.update();
    }
    for bullet in projectiles {
        assert!(app.world().get_entity(bullet).is_err(), "projectile cleaned up");
    }
}

#[test]
fn test_taps_without_pose_place_nothing() {
    let mut app = create_session_app();

    for _ in 0..5 {
        tap(&mut app);
        assert_eq!(last_tap_outcome(&app), Some(TapOutcome::PlacementSkipped));
    }

    assert!(entities_with::<Target>(&mut app).is_empty());
    assert_eq!(state(&app).targets_remaining(), 0);
    assert_eq!(state(&app).phase(), Phase::Placing);
}

#[test]
fn test_round_clock_runs_while_shooting() {
    let mut app = create_session_app();
    place_three(&mut app);

    for _ in 0..12 {
        app.update();
    }

    let elapsed = state(&app).elapsed_seconds();
    assert!((2..=3).contains(&elapsed), "elapsed = {}", elapsed);
    assert_eq!(hud(&app).time_label, clock_label(elapsed));
    assert!(hud(&app).time_label.is_some());
}

#[test]
fn test_pause_tears_down_round() {
    let mut app = create_session_app();
    place_three(&mut app);
    let _bullet = fire(&mut app);
    for _ in 0..8 {
        app.update();
    }
    assert!(state(&app).elapsed_seconds() > 0);

    app.world_mut().send_event(TrackingCommand::Pause);
    app.update();

    assert_eq!(state(&app).phase(), Phase::Placing);
    assert_eq!(state(&app).elapsed_seconds(), 0);
    assert!(!state(&app).timer_running());
    assert_eq!(state(&app).targets_remaining(), 0);
    assert!(entities_with::<Target>(&mut app).is_empty());
    assert!(entities_with::<Projectile>(&mut app).is_empty());

    let hud = hud(&app);
    assert_eq!(hud.time_label, None);
    assert!(!hud.prize_visible);
    assert_eq!(hud.score_label, "0");

    // Пауза → позы нет, tap ничего не ставит
    tap(&mut app);
    assert!(entities_with::<Target>(&mut app).is_empty());
}

#[test]
fn test_duplicate_contacts_in_one_batch_count_once() {
    let mut app = create_session_app();
    place_three(&mut app);

    let target = entities_with::<Target>(&mut app)[0];
    let bullet = fire(&mut app);
    let bullet2 = fire(&mut app);

    app.world_mut()
        .send_event(CollisionEvent::Started(target, bullet, CollisionEventFlags::empty()));
    app.world_mut()
        .send_event(CollisionEvent::Started(bullet2, target, CollisionEventFlags::empty()));
    app.update();

    assert_eq!(state(&app).targets_remaining(), 2);
    assert_eq!(entities_with::<Target>(&mut app).len(), 2);

    // Следующий кадр: target уже нет, повторный контакт игнорируется
    contact(&mut app, bullet, target);
    assert_eq!(state(&app).targets_remaining(), 2);
}

#[test]
fn test_irrelevant_contacts_ignored() {
    let mut app = create_session_app();
    place_three(&mut app);

    let targets = entities_with::<Target>(&mut app);
    let bullet = fire(&mut app);
    let bullet2 = fire(&mut app);
    let wall = app.world_mut().spawn(Transform::default()).id();

    contact(&mut app, targets[0], targets[1]);
    contact(&mut app, bullet, bullet2);
    contact(&mut app, wall, targets[2]);
    app.world_mut()
        .send_event(CollisionEvent::Stopped(bullet, targets[0], CollisionEventFlags::empty()));
    app.update();

    assert_eq!(state(&app).targets_remaining(), 3);
    assert_eq!(entities_with::<Target>(&mut app).len(), 3);
    assert_eq!(state(&app).phase(), Phase::Shooting);
}

#[test]
fn test_custom_config_threshold() {
    let mut app = create_stepped_app(STEP);
    app.insert_resource(GameConfig {
        target_count: 2,
        ..GameConfig::default()
    });
    app.add_plugins(SimulationPlugin);
    app.world_mut()
        .send_event(TrackingCommand::Run(TrackingConfiguration::WorldTracking));
    app.update();

    submit_pose(&mut app, 0.0);
    tap(&mut app);
    assert_eq!(state(&app).phase(), Phase::Placing);
    tap(&mut app);
    assert_eq!(state(&app).phase(), Phase::Shooting);
}

#[test]
fn test_missed_projectile_expires_after_lifetime() {
    let mut app = create_stepped_app(STEP);
    app.insert_resource(GameConfig {
        projectile_lifetime: 1.0,
        ..GameConfig::default()
    });
    app.add_plugins(SimulationPlugin);
    app.world_mut()
        .send_event(TrackingCommand::Run(TrackingConfiguration::WorldTracking));
    app.update();
    place_three(&mut app);

    let bullet = fire(&mut app);
    assert!(matches!(
        last_tap_outcome(&app),
        Some(TapOutcome::ProjectileFired { degenerate: false, .. })
    ));

    // 1s lifetime = 4 шага по 250ms, с запасом
    for _ in 0..6 {
        app.update();
    }

    assert!(app.world().get_entity(bullet).is_err(), "missed projectile expired");
    assert!(entities_with::<Projectile>(&mut app).is_empty());
    assert_eq!(state(&app).targets_remaining(), 3);
    assert_eq!(state(&app).phase(), Phase::Shooting);
}

#[test]
fn test_config_change_applies_at_runtime() {
    let mut app = create_session_app();

    {
        let mut config = app.world_mut().resource_mut::<GameConfig>();
        config.target_count = 1;
        config.placement_distance = 2.0;
    }
    app.update();
    assert_eq!(app.world().resource::<GameController>().config().target_count, 1);

    submit_pose(&mut app, 0.0);
    tap(&mut app);

    assert_eq!(state(&app).phase(), Phase::Shooting);
    let target = entities_with::<Target>(&mut app)[0];
    let translation = app.world().get::<Transform>(target).unwrap().translation;
    assert!((translation - Vec3::new(0.0, 1.5, -2.0)).length() < 1e-4, "{:?}", translation);
}
