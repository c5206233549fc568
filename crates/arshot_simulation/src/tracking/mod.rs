//! Camera tracking session (external collaborator contract)
//!
//! ECS не считает позу камеры сам. Хост (client: free-look камера,
//! тесты: скрипт) кладёт позу в `TrackingSession` каждый кадр.
//! Игра только читает `current_pose()` — `None` до первого валидного кадра
//! и пока сессия на паузе.
//!
//! Lifecycle: `TrackingCommand::Run` / `TrackingCommand::Pause` → система
//! `apply_tracking_commands`. Пауза работающей сессии шлёт `TrackingSessionEnded`.

use bevy::prelude::*;

mod pose;

pub use pose::{launch_vector, CameraPose};

/// Tracking mode the session runs with.
///
/// World tracking reports full 6DoF poses. Orientation-only tracking reports
/// rotation only; position stays pinned at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum TrackingConfiguration {
    #[default]
    WorldTracking,
    OrientationOnly,
}

impl TrackingConfiguration {
    /// World tracking когда устройство умеет, иначе orientation-only
    pub fn preferred(world_tracking_supported: bool) -> Self {
        if world_tracking_supported {
            Self::WorldTracking
        } else {
            Self::OrientationOnly
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum TrackingState {
    #[default]
    NotStarted,
    Running(TrackingConfiguration),
    Paused,
}

#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct TrackingSession {
    state: TrackingState,
    current_pose: Option<CameraPose>,
}

impl TrackingSession {
    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TrackingState::Running(_))
    }

    /// (Re)start tracking. The pose stays absent until the next frame arrives.
    pub fn run(&mut self, configuration: TrackingConfiguration) {
        self.state = TrackingState::Running(configuration);
        self.current_pose = None;
    }

    /// Pause tracking. Returns `true` if the session was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = TrackingState::Paused;
        self.current_pose = None;
        was_running
    }

    /// Host feeds the latest camera pose. Ignored unless running.
    pub fn submit_frame(&mut self, pose: CameraPose) {
        let TrackingState::Running(configuration) = self.state else {
            return;
        };

        self.current_pose = Some(match configuration {
            TrackingConfiguration::WorldTracking => pose,
            TrackingConfiguration::OrientationOnly => CameraPose {
                position: Vec3::ZERO,
                ..pose
            },
        });
    }

    /// Tracking lost (no valid frame), session keeps running.
    pub fn drop_frame(&mut self) {
        self.current_pose = None;
    }

    pub fn current_pose(&self) -> Option<CameraPose> {
        if self.is_running() {
            self.current_pose
        } else {
            None
        }
    }
}

/// Event: host lifecycle request (view appeared / disappeared)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum TrackingCommand {
    Run(TrackingConfiguration),
    Pause,
}

/// Event: running session was paused, game must tear down the round
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingSessionEnded;

/// Tracking Plugin
///
/// Регистрирует `TrackingSession` + lifecycle события. Позу кладёт хост.
pub struct TrackingPlugin;

impl Plugin for TrackingPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TrackingSession>()
            .init_resource::<TrackingSession>()
            .add_event::<TrackingCommand>()
            .add_event::<TrackingSessionEnded>()
            .add_systems(Update, apply_tracking_commands);
    }
}

/// System: TrackingCommand → TrackingSession lifecycle
pub fn apply_tracking_commands(
    mut commands_in: EventReader<TrackingCommand>,
    mut session: ResMut<TrackingSession>,
    mut ended: EventWriter<TrackingSessionEnded>,
) {
    for command in commands_in.read() {
        match *command {
            TrackingCommand::Run(configuration) => {
                session.run(configuration);
                crate::logger::log_info(&format!("📷 Tracking session running ({:?})", configuration));
            }
            TrackingCommand::Pause => {
                if session.pause() {
                    crate::logger::log_info("📷 Tracking session paused");
                    ended.write(TrackingSessionEnded);
                }
            }
        }
    }
}
