//! Delayed despawn (fire-and-forget)

use bevy::prelude::*;

/// Компонент-маркер: деспавн entity после указанного времени
///
/// Не отменяется. Если entity уже удалён (teardown), маркер уходит вместе с ним.
#[derive(Component, Debug, Clone, Copy)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта игры)
    pub despawn_time: f32,
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            crate::logger::log(&format!("Despawning {:?} (cleanup delay elapsed)", entity));
            commands.entity(entity).despawn();
        }
    }
}
