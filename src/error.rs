use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single external helper invocation
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The helper program could not be started at all
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper ran but reported failure
    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
}

impl NotifyError {
    /// Name of the program that failed
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. } | Self::Status { program, .. } => program,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_spawn_error_display() {
        let err = NotifyError::Spawn {
            program: "osascript".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to run osascript: No such file or directory"
        );
        assert_eq!(err.program(), "osascript");
    }
}
