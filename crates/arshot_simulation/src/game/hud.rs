//! HUD: display state + "post to UI thread" queue
//!
//! Контроллер никогда не пишет в `Hud` напрямую. Он постит `UiCommand`
//! через `UiPost`, а `apply_ui_commands_main_thread` применяет их в одном месте
//! (хост рисует `Hud` в свои labels).

use bevy::prelude::*;

/// Display update posted from tap / tick / contact handlers.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Score label = remaining targets
    SetScore(u32),
    /// Clock label text, `None` = hidden
    SetClock(Option<String>),
    /// Prize icon visibility (shown while shooting)
    SetPrizeVisible(bool),
}

/// Post-to-UI-thread primitive.
pub trait UiPost {
    fn post(&mut self, command: UiCommand);
}

impl UiPost for EventWriter<'_, UiCommand> {
    fn post(&mut self, command: UiCommand) {
        self.write(command);
    }
}

impl UiPost for Vec<UiCommand> {
    fn post(&mut self, command: UiCommand) {
        self.push(command);
    }
}

/// Display state the host renders.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub time_label: Option<String>,
    pub score_label: String,
    pub prize_visible: bool,
}

impl Hud {
    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SetScore(score) => self.score_label = score.to_string(),
            UiCommand::SetClock(label) => self.time_label = label,
            UiCommand::SetPrizeVisible(visible) => self.prize_visible = visible,
        }
    }
}

/// Clock text for `elapsed_seconds`, `None` when nothing elapsed.
///
/// Minutes wrap at 60: 3600 → "00:00".
pub fn clock_label(elapsed_seconds: u32) -> Option<String> {
    if elapsed_seconds == 0 {
        return None;
    }

    let seconds = elapsed_seconds % 60;
    let minutes = (elapsed_seconds / 60) % 60;
    Some(format!("{:02}:{:02}", minutes, seconds))
}

/// System: UiCommand queue → Hud
pub fn apply_ui_commands_main_thread(mut commands_in: EventReader<UiCommand>, mut hud: ResMut<Hud>) {
    for command in commands_in.read() {
        hud.apply(command.clone());
    }
}
