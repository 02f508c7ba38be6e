/// Title of every notification
pub const DEFAULT_TITLE: &str = "Claude Code";

/// Message used when the agent exited cleanly or no exit code was given
pub const DEFAULT_MESSAGE: &str = "Agent has finished the task.";

/// Exit code that counts as success
const SUCCESS_CODE: &str = "0";

/// Title and message for one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub title: String,
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl NotificationConfig {
    /// Build the config from the hook's optional exit-code argument.
    /// Anything other than the literal "0" is reported verbatim as an error.
    pub fn from_exit_code(exit_code: Option<&str>) -> Self {
        let message = match exit_code {
            Some(code) if code != SUCCESS_CODE => {
                format!("Agent stopped with error (Exit Code: {})", code)
            }
            _ => DEFAULT_MESSAGE.to_string(),
        };

        Self {
            title: DEFAULT_TITLE.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_exit_code() {
        let config = NotificationConfig::from_exit_code(None);
        assert_eq!(config.title, "Claude Code");
        assert_eq!(config.message, "Agent has finished the task.");
        assert_eq!(config, NotificationConfig::default());
    }

    #[test]
    fn test_zero_exit_code() {
        let config = NotificationConfig::from_exit_code(Some("0"));
        assert_eq!(config.message, "Agent has finished the task.");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(
            NotificationConfig::from_exit_code(Some("1")).message,
            "Agent stopped with error (Exit Code: 1)"
        );
        assert_eq!(
            NotificationConfig::from_exit_code(Some("137")).message,
            "Agent stopped with error (Exit Code: 137)"
        );
    }

    #[test]
    fn test_exit_code_is_not_normalized() {
        // "00" and " 0" are not the literal success code
        for code in ["00", " 0", "-1", "killed", ""] {
            let config = NotificationConfig::from_exit_code(Some(code));
            assert_eq!(
                config.message,
                format!("Agent stopped with error (Exit Code: {})", code)
            );
        }
    }
}
