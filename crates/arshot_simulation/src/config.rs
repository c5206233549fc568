//! Game configuration resource
//!
//! Все числовые константы раунда в одном месте. Тесты переопределяют
//! через `app.insert_resource(GameConfig { .. })`, изменения в runtime
//! подхватываются `GamePlugin` (см. `sync_game_config`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct GameConfig {
    /// Сколько targets ставится до начала стрельбы
    pub target_count: u32,
    /// Расстояние от камеры до новой target (вдоль оси взгляда)
    pub placement_distance: f32,
    /// Период тика раундового таймера (секунды)
    pub tick_interval: f32,
    /// Задержка перед удалением projectile после попадания (секунды)
    pub projectile_cleanup_delay: f32,
    /// Время жизни projectile без попадания (секунды), промахи не копятся
    pub projectile_lifetime: f32,
    /// Длина ребра куба target
    pub target_size: f32,
    /// Радиус сферы projectile
    pub projectile_radius: f32,
    /// Масса обоих типов тел (импульс 1.0 → скорость 1 m/s)
    pub body_mass: f32,
    /// Множитель импульса выстрела (направление камеры нормализовано)
    pub projectile_impulse: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_count: 3,
            placement_distance: 1.0,
            tick_interval: 1.0,
            projectile_cleanup_delay: 0.5,
            projectile_lifetime: 5.0,
            target_size: 0.1,
            projectile_radius: 0.025,
            body_mass: 1.0,
            projectile_impulse: 1.0,
        }
    }
}
