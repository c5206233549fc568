//! Scene graph seam
//!
//! Контроллер добавляет/удаляет тела только через `SceneGraph`.
//! В игре это `CommandsScene` (Bevy `Commands`), в unit тестах — запись вызовов.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::objects::{projectile_bundle, target_bundle, DespawnAfter};

pub trait SceneGraph {
    fn spawn_target(&mut self, transform: Transform, config: &GameConfig) -> Entity;

    fn spawn_projectile(&mut self, position: Vec3, impulse: Vec3, config: &GameConfig) -> Entity;

    /// Remove a body now. Returns `false` if it was already removed.
    fn remove(&mut self, entity: Entity) -> bool;

    /// Remove a body after `delay` seconds (fire-and-forget).
    fn remove_after(&mut self, entity: Entity, delay: f32);

    /// Remove every live target and projectile.
    fn clear(&mut self);
}

/// `SceneGraph` over Bevy `Commands` for one system run.
///
/// Despawn применяется после системы, поэтому повторный контакт с тем же
/// телом в одном batch отсекается через `removed`.
pub struct CommandsScene<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    now: f32,
    removed: HashSet<Entity>,
    live_bodies: Vec<Entity>,
}

impl<'a, 'w, 's> CommandsScene<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, now: f32) -> Self {
        Self {
            commands,
            now,
            removed: HashSet::new(),
            live_bodies: Vec::new(),
        }
    }

    /// Bodies `clear()` removes.
    pub fn with_live_bodies(mut self, bodies: impl IntoIterator<Item = Entity>) -> Self {
        self.live_bodies.extend(bodies);
        self
    }
}

impl SceneGraph for CommandsScene<'_, '_, '_> {
    fn spawn_target(&mut self, transform: Transform, config: &GameConfig) -> Entity {
        self.commands.spawn(target_bundle(transform, config)).id()
    }

    fn spawn_projectile(&mut self, position: Vec3, impulse: Vec3, config: &GameConfig) -> Entity {
        // Промах живёт projectile_lifetime; попадание перезапишет на cleanup delay
        self.commands
            .spawn((
                projectile_bundle(position, impulse, config),
                DespawnAfter {
                    despawn_time: self.now + config.projectile_lifetime,
                },
            ))
            .id()
    }

    fn remove(&mut self, entity: Entity) -> bool {
        if !self.removed.insert(entity) {
            return false;
        }

        match self.commands.get_entity(entity) {
            Ok(mut entity_commands) => {
                entity_commands.despawn();
                true
            }
            Err(_) => false,
        }
    }

    fn remove_after(&mut self, entity: Entity, delay: f32) {
        if let Ok(mut entity_commands) = self.commands.get_entity(entity) {
            entity_commands.try_insert(DespawnAfter {
                despawn_time: self.now + delay,
            });
        }
    }

    fn clear(&mut self) {
        let bodies = std::mem::take(&mut self.live_bodies);
        for entity in bodies {
            self.remove(entity);
        }
    }
}
