use thiserror::Error;

/// Failure tiers of a gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request body could not be serialized; nothing was sent.
    Encode,
    /// The request never completed (connection refused, body decode failure).
    Transport,
    /// A response arrived with a non-2xx status.
    Http,
    /// A 2xx response whose envelope reported failure or carried no data.
    Envelope,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Http {
        status: u16,
        status_text: String,
        message: String,
    },

    /// `message` is the wrapper's own fixed text; `detail` keeps the
    /// envelope's `error` field for diagnostics only.
    #[error("{message}")]
    Envelope {
        message: String,
        detail: Option<String>,
    },
}

impl GatewayError {
    pub fn envelope(message: impl Into<String>, detail: Option<String>) -> Self {
        GatewayError::Envelope {
            message: message.into(),
            detail,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Encode(_) => ErrorKind::Encode,
            GatewayError::Transport(_) => ErrorKind::Transport,
            GatewayError::Http { .. } => ErrorKind::Http,
            GatewayError::Envelope { .. } => ErrorKind::Envelope,
        }
    }

    /// HTTP status code, only present for the HTTP tier.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_per_tier() {
        let transport = GatewayError::Transport("connection refused".to_string());
        assert_eq!(transport.to_string(), "Network error: connection refused");
        assert_eq!(transport.kind(), ErrorKind::Transport);
        assert_eq!(transport.status(), None);

        let http = GatewayError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(http.to_string(), "not found");
        assert!(http.is_not_found());

        let envelope = GatewayError::envelope("Failed to fetch goals", Some("db down".to_string()));
        assert_eq!(envelope.to_string(), "Failed to fetch goals");
        assert_eq!(envelope.kind(), ErrorKind::Envelope);

        let encode = GatewayError::Encode("key must be a string".to_string());
        assert_eq!(encode.to_string(), "Failed to encode request: key must be a string");
        assert_eq!(encode.kind(), ErrorKind::Encode);
        assert_eq!(encode.status(), None);
    }
}
