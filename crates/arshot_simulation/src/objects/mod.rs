//! Scene objects: targets, projectiles, delayed cleanup
//!
//! Симуляция описывает только физику + appearance (форма, цвет).
//! Mesh/material создаёт хост по `Added<Appearance>`.

use bevy::prelude::*;

pub mod cleanup;
pub mod projectile;
pub mod target;

pub use cleanup::{despawn_after_timeout, DespawnAfter};
pub use projectile::{projectile_bundle, Projectile};
pub use target::{target_bundle, Target};

/// Collision shape of a game body, mirrored by the host's mesh.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum Shape {
    Cube { size: f32 },
    Sphere { radius: f32 },
}

/// Visual definition of a game body.
///
/// `base_color` — sRGB, хост конвертирует в свой material.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Appearance {
    pub shape: Shape,
    pub base_color: [f32; 3],
}
