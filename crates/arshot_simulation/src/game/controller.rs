//! Game controller: placement → shooting → reset
//!
//! Владеет `SessionState`. Все входы (tap, tick, contact, teardown)
//! приходят сюда последовательно из систем `GamePlugin`, сцена и HUD
//! доступны только через `SceneGraph` / `UiPost`.

use std::time::Duration;

use bevy::prelude::*;

use super::hud::{clock_label, UiCommand, UiPost};
use super::scene::SceneGraph;
use super::state::{Phase, RoundTimer, SessionState};
use crate::collision::{classify_contact, CollisionCategory, TargetSide};
use crate::config::GameConfig;
use crate::tracking::{launch_vector, CameraPose};

/// Result of a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    TargetPlaced {
        entity: Entity,
        targets_remaining: u32,
        round_started: bool,
    },
    /// No camera pose, placement skipped
    PlacementSkipped,
    /// `degenerate` = fired without a camera pose (zero position + direction)
    ProjectileFired { entity: Entity, degenerate: bool },
}

/// One side of a reported contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub entity: Entity,
    pub category: CollisionCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Not a target/projectile pair
    Ignored,
    /// Target already removed earlier in the same batch
    AlreadyResolved,
    TargetHit {
        target: Entity,
        projectile: Entity,
        targets_remaining: u32,
        round_over: bool,
    },
}

/// Receiver for "contact began" reports from the physics world.
pub trait ContactObserver {
    fn on_contact(
        &mut self,
        a: ContactBody,
        b: ContactBody,
        scene: &mut dyn SceneGraph,
        ui: &mut dyn UiPost,
    ) -> ContactOutcome;
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameController {
    state: SessionState,
    config: GameConfig,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: SessionState::default(),
            config,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the config mid-session. A running round timer keeps its
    /// interval until the next round starts.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Initial labels: score "0", clock hidden, prize hidden.
    pub fn announce(&self, ui: &mut dyn UiPost) {
        ui.post(UiCommand::SetScore(self.state.targets_remaining));
        ui.post(UiCommand::SetClock(clock_label(self.state.elapsed_seconds)));
        ui.post(UiCommand::SetPrizeVisible(self.state.phase == Phase::Shooting));
    }

    pub fn on_tap(
        &mut self,
        pose: Option<CameraPose>,
        scene: &mut dyn SceneGraph,
        ui: &mut dyn UiPost,
    ) -> TapOutcome {
        match self.state.phase {
            Phase::Placing => self.place_target(pose, scene, ui),
            Phase::Shooting => self.fire_projectile(pose, scene),
        }
    }

    pub fn place_target(
        &mut self,
        pose: Option<CameraPose>,
        scene: &mut dyn SceneGraph,
        ui: &mut dyn UiPost,
    ) -> TapOutcome {
        let Some(pose) = pose else {
            crate::logger::log("Tap ignored: no camera pose yet, target not placed");
            return TapOutcome::PlacementSkipped;
        };

        let transform = pose.placement(self.config.placement_distance);
        let entity = scene.spawn_target(transform, &self.config);

        let targets_remaining = self.state.targets_remaining + 1;
        self.set_targets_remaining(targets_remaining, ui);

        crate::logger::log(&format!(
            "🎯 Target {:?} placed at {:?} ({}/{})",
            entity, transform.translation, targets_remaining, self.config.target_count
        ));

        // >=: порог мог уменьшиться через set_config посреди расстановки
        let round_started = targets_remaining >= self.config.target_count;
        if round_started {
            self.set_phase(Phase::Shooting, ui);
            self.start_round_timer();
            crate::logger::log_info("Round started: all targets placed");
        }

        TapOutcome::TargetPlaced {
            entity,
            targets_remaining,
            round_started,
        }
    }

    pub fn fire_projectile(&mut self, pose: Option<CameraPose>, scene: &mut dyn SceneGraph) -> TapOutcome {
        let (direction, position) = launch_vector(pose);
        let impulse = direction * self.config.projectile_impulse;
        let entity = scene.spawn_projectile(position, impulse, &self.config);

        let degenerate = pose.is_none();
        if degenerate {
            crate::logger::log_warning(&format!(
                "Projectile {:?} fired without camera pose (zero position/direction)",
                entity
            ));
        } else {
            crate::logger::log(&format!("💥 Projectile {:?} fired from {:?} along {:?}", entity, position, direction));
        }

        TapOutcome::ProjectileFired { entity, degenerate }
    }

    /// Start the repeating round tick. An existing timer is dropped first.
    pub fn start_round_timer(&mut self) {
        if self.state.timer.take().is_some() {
            crate::logger::log_warning("Round timer restarted while running (old timer dropped)");
        }
        self.state.timer = Some(RoundTimer::new(self.config.tick_interval));
    }

    /// Drop the timer, reset the clock and hide it.
    pub fn stop_round_timer(&mut self, ui: &mut dyn UiPost) {
        self.state.timer = None;
        self.state.elapsed_seconds = 0;
        ui.post(UiCommand::SetClock(clock_label(0)));
    }

    /// Advance the round timer by `delta`. Returns the number of ticks fired.
    pub fn tick(&mut self, delta: Duration, ui: &mut dyn UiPost) -> u32 {
        let Some(timer) = self.state.timer.as_mut() else {
            return 0;
        };

        let ticks = timer.tick(delta);
        if ticks > 0 {
            self.state.elapsed_seconds += ticks;
            ui.post(UiCommand::SetClock(clock_label(self.state.elapsed_seconds)));
        }
        ticks
    }

    /// Tracking session ended: scene goes away, round resets.
    pub fn teardown(&mut self, scene: &mut dyn SceneGraph, ui: &mut dyn UiPost) {
        crate::logger::log_info(&format!(
            "Teardown: phase={:?}, {} targets abandoned",
            self.state.phase, self.state.targets_remaining
        ));

        scene.clear();
        self.stop_round_timer(ui);
        self.set_phase(Phase::Placing, ui);
        self.set_targets_remaining(0, ui);
    }

    fn set_phase(&mut self, phase: Phase, ui: &mut dyn UiPost) {
        self.state.phase = phase;
        ui.post(UiCommand::SetPrizeVisible(phase == Phase::Shooting));
    }

    fn set_targets_remaining(&mut self, targets_remaining: u32, ui: &mut dyn UiPost) {
        self.state.targets_remaining = targets_remaining;
        ui.post(UiCommand::SetScore(targets_remaining));
    }
}

impl ContactObserver for GameController {
    fn on_contact(
        &mut self,
        a: ContactBody,
        b: ContactBody,
        scene: &mut dyn SceneGraph,
        ui: &mut dyn UiPost,
    ) -> ContactOutcome {
        let Some(side) = classify_contact(a.category, b.category) else {
            crate::logger::log(&format!(
                "Contact ignored: {} {:?} / {} {:?}",
                a.category.name(),
                a.entity,
                b.category.name(),
                b.entity
            ));
            return ContactOutcome::Ignored;
        };

        let (target, projectile) = match side {
            TargetSide::A => (a.entity, b.entity),
            TargetSide::B => (b.entity, a.entity),
        };

        if !scene.remove(target) {
            return ContactOutcome::AlreadyResolved;
        }
        scene.remove_after(projectile, self.config.projectile_cleanup_delay);

        let targets_remaining = self.state.targets_remaining.saturating_sub(1);
        self.set_targets_remaining(targets_remaining, ui);

        crate::logger::log(&format!(
            "Hit: target {:?} by projectile {:?} ({} left)",
            target, projectile, targets_remaining
        ));

        let round_over = targets_remaining == 0;
        if round_over {
            self.set_phase(Phase::Placing, ui);
            self.stop_round_timer(ui);
            crate::logger::log_info("Round over: all targets cleared");
        }

        ContactOutcome::TargetHit {
            target,
            projectile,
            targets_remaining,
            round_over,
        }
    }
}
