//! Input → simulation events
//!
//! - LMB / touch → TapEvent
//! - [P] или потеря фокуса окна → TrackingCommand::Pause (teardown раунда)
//! - [P] ещё раз или возврат фокуса → TrackingCommand::Run

use bevy::prelude::*;
use bevy::window::WindowFocused;
use arshot_simulation::{TapEvent, TrackingCommand, TrackingConfiguration, TrackingSession};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_tracking_session).add_systems(
            Update,
            (tap_input, tracking_lifecycle_input)
                .before(arshot_simulation::tracking::apply_tracking_commands),
        );
    }
}

/// Desktop: "world tracking" всегда поддерживается (камера двигается по WASD)
fn start_tracking_session(mut tracking: EventWriter<TrackingCommand>) {
    tracking.write(TrackingCommand::Run(TrackingConfiguration::preferred(true)));
}

fn tap_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut taps: EventWriter<TapEvent>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) || touches.any_just_pressed() {
        taps.write(TapEvent);
    }
}

fn tracking_lifecycle_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut focus_events: EventReader<WindowFocused>,
    session: Res<TrackingSession>,
    mut tracking: EventWriter<TrackingCommand>,
) {
    let mut running = session.is_running();

    for event in focus_events.read() {
        if event.focused != running {
            running = event.focused;
            tracking.write(lifecycle_command(running));
        }
    }

    if keys.just_pressed(KeyCode::KeyP) {
        running = !running;
        tracking.write(lifecycle_command(running));
    }
}

fn lifecycle_command(run: bool) -> TrackingCommand {
    if run {
        TrackingCommand::Run(TrackingConfiguration::preferred(true))
    } else {
        TrackingCommand::Pause
    }
}
