use thiserror::Error;

/// Reasons a call-button press is rejected before it reaches the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PressError {
    #[error("floor {floor} is outside the served range {bottom}..={top}")]
    InvalidFloor { floor: i32, bottom: i32, top: i32 },

    #[error("unknown direction {0:?}, expected UP or DOWN")]
    InvalidDirection(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration is missing key {0:?}")]
    MissingKey(&'static str),

    #[error("bottom floor {bottom} must be below top floor {top}")]
    InvalidFloorRange { bottom: i32, top: i32 },
}
