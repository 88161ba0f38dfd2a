//! Values that travel between the exchange controller and the transport.

use std::fmt;

use thiserror::Error;

/// Identifies one send/receive cycle for logging and completion routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExchangeId(u64);

impl ExchangeId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Serialized request ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub id: ExchangeId,
    pub body: Vec<u8>,
}

/// The request never produced a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Connect,
    Timeout,
    Body,
    Other,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// Result of one exchange, delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCompletion {
    pub id: ExchangeId,
    pub result: Result<Vec<u8>, TransportError>,
}

impl ExchangeCompletion {
    pub fn body(id: ExchangeId, body: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            result: Ok(body.into()),
        }
    }

    pub fn failed(id: ExchangeId, error: TransportError) -> Self {
        Self {
            id,
            result: Err(error),
        }
    }
}
