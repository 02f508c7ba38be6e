//! Desktop notification and alert sound for agent lifecycle hooks
//! Native delivery goes through macOS `osascript` and `afplay`

use crate::error::NotifyError;
use crate::message::NotificationConfig;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Sound requested alongside the notification banner
pub const DEFAULT_SOUND_NAME: &str = "Glass";

/// Sound file played as the secondary (and fallback) cue
pub const DEFAULT_SOUND_FILE: &str = "/System/Library/Sounds/Glass.aiff";

/// Delivers notifications and sounds to the host
pub trait Dispatcher {
    /// Show a notification banner with an alert sound
    fn show_notification(&self, title: &str, message: &str) -> Result<(), NotifyError>;

    /// Play the alert sound file
    fn play_sound(&self) -> Result<(), NotifyError>;
}

/// Dispatcher backed by the OS command-line helpers
#[derive(Debug, Clone)]
pub struct NativeDispatcher {
    notifier: String,
    player: String,
    sound_name: String,
    sound_file: PathBuf,
}

impl Default for NativeDispatcher {
    fn default() -> Self {
        Self {
            notifier: "osascript".to_string(),
            player: "afplay".to_string(),
            sound_name: DEFAULT_SOUND_NAME.to_string(),
            sound_file: PathBuf::from(DEFAULT_SOUND_FILE),
        }
    }
}

impl NativeDispatcher {
    /// Override the banner sound name and the playback file
    #[cfg(test)]
    fn with_sound(
        mut self,
        sound_name: impl Into<String>,
        sound_file: impl Into<PathBuf>,
    ) -> Self {
        self.sound_name = sound_name.into();
        self.sound_file = sound_file.into();
        self
    }

    /// Override the helper programs
    #[cfg(test)]
    fn with_programs(mut self, notifier: &str, player: &str) -> Self {
        self.notifier = notifier.to_string();
        self.player = player.to_string();
        self
    }

    fn script(&self, title: &str, message: &str) -> String {
        format!(
            r#"display notification "{}" with title "{}" sound name "{}""#,
            escape_applescript(message),
            escape_applescript(title),
            escape_applescript(&self.sound_name)
        )
    }
}

impl Dispatcher for NativeDispatcher {
    fn show_notification(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let script = self.script(title, message);
        run(Command::new(&self.notifier).arg("-e").arg(&script), &self.notifier)
    }

    fn play_sound(&self) -> Result<(), NotifyError> {
        run(Command::new(&self.player).arg(&self.sound_file), &self.player)
    }
}

/// Run a helper to completion. No timeout is applied.
fn run(command: &mut Command, program: &str) -> Result<(), NotifyError> {
    debug!(program, args = ?command.get_args().collect::<Vec<_>>(), "running helper");

    let status = command.status().map_err(|source| NotifyError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(NotifyError::Status {
            program: program.to_string(),
            status,
        })
    }
}

/// Escape text for use inside an AppleScript string literal
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Notify the user that the agent task ended.
///
/// Tries the banner and then the sound file. If either fails the content is
/// still printed as plain text and the sound is attempted once more.
/// Never fails; console output is the only signal of what happened.
pub fn notify<D, W>(config: &NotificationConfig, dispatcher: &D, out: &mut W)
where
    D: Dispatcher + ?Sized,
    W: Write + ?Sized,
{
    let delivered = dispatcher
        .show_notification(&config.title, &config.message)
        .and_then(|()| dispatcher.play_sound());

    let report = match delivered {
        Ok(()) => format!("\n🔔 [{}] {}\n", config.title, config.message),
        Err(e) => {
            warn!(program = e.program(), error = %e, "notification failed, falling back to console");
            let report = format!(
                "\n[Notification Error]: Could not send system ping. {}\n[{}] {}\n",
                e, config.title, config.message
            );

            // Best effort only
            if let Err(e) = dispatcher.play_sound() {
                debug!(error = %e, "ignoring fallback sound failure");
            }

            report
        }
    };

    if let Err(e) = out.write_all(report.as_bytes()).and_then(|()| out.flush()) {
        debug!(error = %e, "could not write notification to console");
    }
}
