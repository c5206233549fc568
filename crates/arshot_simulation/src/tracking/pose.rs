//! Camera pose in world space

use bevy::prelude::*;

/// Position + orientation of the tracked camera.
///
/// Камера смотрит вдоль локальной -Z (как в Bevy и в AR transform матрице).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// From a camera-to-world matrix (scale is discarded).
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (_scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self { position, rotation }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }

    /// Viewing direction, unit length.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Pose `distance` units in front of the camera, same orientation.
    ///
    /// Эквивалент `camera_transform * translation(0, 0, -distance)`.
    pub fn placement(&self, distance: f32) -> Transform {
        Transform {
            translation: self.position + self.rotation * Vec3::new(0.0, 0.0, -distance),
            rotation: self.rotation,
            scale: Vec3::ONE,
        }
    }
}

/// Launch vector `(direction, position)` for a shot.
///
/// Без позы возвращает нулевые векторы: выстрел всё равно происходит
/// (projectile в начале координат без импульса).
pub fn launch_vector(pose: Option<CameraPose>) -> (Vec3, Vec3) {
    match pose {
        Some(pose) => (pose.forward(), pose.position),
        None => (Vec3::ZERO, Vec3::ZERO),
    }
}
