use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum MeterError {
    #[error("config error: {0}")]
    Config(String),

    #[error("rejected reading: {0}")]
    Reading(#[from] ReadingError),

    #[error("feed error: {0}")]
    Feed(String),

    #[error("output error: {0}")]
    Output(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Why a reading was refused at the window boundary.
///
/// These are per-reading and recoverable: the window is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReadingError {
    #[error("value {0} is not finite")]
    NonFinite(f64),

    #[error("value {0} is negative")]
    Negative(f64),

    #[error("timestamp {timestamp} is older than the newest reading ({newest})")]
    OutOfOrder { newest: i64, timestamp: i64 },
}

pub type Result<T, E = MeterError> = std::result::Result<T, E>;
