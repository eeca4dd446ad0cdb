// src/utils/errors.rs

use std::{error::Error, fmt};

use mongodb::error::{Error as MongoError, ErrorKind};

/// Configuration problems. All of them are fatal at start-up.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("You need to set the environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Errors coming out of the data layer (connect, query, decode).
#[derive(Debug)]
pub enum DbError {
    Connect(MongoError),
    Ping(MongoError),
    Timeout { op: &'static str },
    Query { op: &'static str, source: MongoError },
    Decode(MongoError),
    /// Failures raised by stores that do not sit on the driver.
    Backend(String),
}

impl DbError {
    /// Wraps a driver error from `op`, splitting out document decode failures.
    pub fn query(op: &'static str, err: MongoError) -> Self {
        if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
            DbError::Decode(err)
        } else {
            DbError::Query { op, source: err }
        }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::Connect(e)           => write!(f, "failed to connect to MongoDB: {}", e),
            DbError::Ping(e)              => write!(f, "failed to ping MongoDB server: {}", e),
            DbError::Timeout { op }       => write!(f, "{} timed out", op),
            DbError::Query { op, source } => write!(f, "failed to {}: {}", op, source),
            DbError::Decode(e)            => write!(f, "failed to decode dataset: {}", e),
            DbError::Backend(msg)         => write!(f, "{}", msg),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DbError::Connect(e)            => Some(e),
            DbError::Ping(e)               => Some(e),
            DbError::Query { source, .. }  => Some(source),
            DbError::Decode(e)             => Some(e),
            DbError::Timeout { .. }        => None,
            DbError::Backend(_)            => None,
        }
    }
}
