//! Target object definition

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{Appearance, Shape};
use crate::collision::PhysicsTag;
use crate::config::GameConfig;

/// Marker: target body (cube)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Target;

pub const TARGET_COLOR: [f32; 3] = [0.95, 0.55, 0.1];

/// Target components: cube collider, target category, no gravity.
///
/// Dynamic тело (не kinematic), чтобы projectile мог его толкнуть
/// в том же шаге, где Rapier сообщает о контакте.
pub fn target_bundle(transform: Transform, config: &GameConfig) -> impl Bundle {
    let half = config.target_size * 0.5;
    let tag = PhysicsTag::TARGET;

    (
        Name::new("Target"),
        Target,
        transform,
        Appearance {
            shape: Shape::Cube { size: config.target_size },
            base_color: TARGET_COLOR,
        },
        tag,
        (
            RigidBody::Dynamic,
            Collider::cuboid(half, half, half),
            ColliderMassProperties::Mass(config.body_mass),
            GravityScale(0.0),
            tag.collision_groups(),
            ActiveEvents::COLLISION_EVENTS,
            Velocity::default(),
        ),
    )
}
