use std::fmt;

/// Errors raised while building the simulation.
///
/// Only construction and configuration can fail. Per-frame operations
/// (update, collision checks, collision responses) are total.
#[derive(Debug)]
pub enum GameError {
    /// Speed must be finite and non-negative
    InvalidSpeed(f64),
    /// Width and height must be finite and non-negative
    InvalidSize { width: f64, height: f64 },
    /// A configuration value is out of range
    InvalidConfig(String),
    /// Configuration JSON could not be parsed
    Config(serde_json::Error),
    /// Configuration file could not be read
    Io(std::io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSpeed(speed) => {
                write!(f, "speed must be finite and non-negative, got {}", speed)
            }
            GameError::InvalidSize { width, height } => write!(
                f,
                "size must be finite and non-negative, got {}x{}",
                width, height
            ),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            GameError::Config(e) => write!(f, "failed to parse config: {}", e),
            GameError::Io(e) => write!(f, "failed to read config: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(e) => Some(e),
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Config(e)
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}
