use std::{error, fmt, io, num};

/// Error type for `primepool`
#[derive(Debug)]
pub enum Error {
    /// std::io::Error
    Io(io::Error),
    /// serde_json::Error
    Json(serde_json::Error),
    /// std::num::ParseIntError
    ParseInt(num::ParseIntError),
    /// A task was submitted after the queue was closed
    SubmitAfterClose,
    /// A worker gave up on a task without delivering its result
    WorkerPanic,
    /// The task queue stayed full past the submission deadline
    BackpressureTimeout,
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value)
    }
}

impl From<num::ParseIntError> for Error {
    fn from(value: num::ParseIntError) -> Self {
        Error::ParseInt(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::Json(e) => write!(f, "{}", e),
            Self::ParseInt(e) => write!(f, "{}", e),
            Self::SubmitAfterClose => {
                write!(f, "task submitted after the queue was closed")
            }
            Self::WorkerPanic => {
                write!(f, "worker terminated before delivering a result")
            }
            Self::BackpressureTimeout => {
                write!(f, "task queue stayed full past the submission deadline")
            }
        }
    }
}

impl error::Error for Error {
    // benefit from default implementations
}
