//! Session state: phase, remaining targets, round clock

use std::time::Duration;

use bevy::prelude::*;

/// Round phase
///
/// Placing → Shooting: поставлено `target_count` targets.
/// Shooting → Placing: все targets сбиты или tracking session закончилась.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Phase {
    #[default]
    Placing,
    Shooting,
}

/// Repeating round tick (owned exclusively by `SessionState`).
///
/// Drop = invalidate: нет handle — нет тиков.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    timer: Timer,
}

impl RoundTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
        }
    }

    /// Advance the timer. Returns how many ticks fired during `delta`.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) targets_remaining: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) timer: Option<RoundTimer>,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn targets_remaining(&self) -> u32 {
        self.targets_remaining
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }
}
