use bevy::prelude::*;
use arshot_simulation::{Appearance, Shape};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, spawn_visuals_for_new_bodies);
    }
}

/// Attach mesh + material to bodies spawned by the simulation.
///
/// Тела уже имеют Transform (Rapier двигает его сам), поэтому визуал
/// вешаем прямо на entity, отдельный visual entity не нужен.
fn spawn_visuals_for_new_bodies(
    mut commands: Commands,
    query: Query<(Entity, &Appearance), Added<Appearance>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, appearance) in query.iter() {
        let mesh = match appearance.shape {
            Shape::Cube { size } => meshes.add(Cuboid::new(size, size, size)),
            Shape::Sphere { radius } => meshes.add(Sphere::new(radius)),
        };

        let [r, g, b] = appearance.base_color;
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            ..default()
        });

        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_insert((Mesh3d(mesh), MeshMaterial3d(material)));
        }
    }
}
