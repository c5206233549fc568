//! Projectile object definition

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{Appearance, Shape};
use crate::collision::PhysicsTag;
use crate::config::GameConfig;

/// Marker: projectile body (sphere)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Projectile;

pub const PROJECTILE_COLOR: [f32; 3] = [0.2, 0.6, 1.0];

/// Projectile components: sphere collider, projectile category, no gravity.
///
/// Движение только от стартового импульса (`ExternalImpulse` применяется
/// Rapier один раз и сбрасывается).
pub fn projectile_bundle(position: Vec3, impulse: Vec3, config: &GameConfig) -> impl Bundle {
    let tag = PhysicsTag::PROJECTILE;

    (
        Name::new("Projectile"),
        Projectile,
        Transform::from_translation(position),
        Appearance {
            shape: Shape::Sphere { radius: config.projectile_radius },
            base_color: PROJECTILE_COLOR,
        },
        tag,
        (
            RigidBody::Dynamic,
            Collider::ball(config.projectile_radius),
            ColliderMassProperties::Mass(config.body_mass),
            GravityScale(0.0),
            tag.collision_groups(),
            ActiveEvents::COLLISION_EVENTS,
            Velocity::default(),
            ExternalImpulse {
                impulse,
                torque_impulse: Vec3::ZERO,
            },
        ),
    )
}
