/// The only error this crate raises. The remote status code and message
/// text are preserved verbatim so the host layer can translate them into
/// its own user-facing strings.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    #[from]
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Status code of the remote response, when one was received at all.
    pub fn http_status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The remote signals quota exhaustion with HTTP 429. Hosts surface it
    /// as a "try again later" condition distinct from every other failure.
    pub fn is_rate_limited(&self) -> bool {
        self.http_status() == Some(429)
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::from(ErrorKind::Decode(source))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("catalog API request failed with HTTP {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("failed to decode catalog API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("http transport failure: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_detection() {
        let err = Error::from(ErrorKind::Remote {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        assert!(err.is_rate_limited());
        assert_eq!(err.http_status(), Some(429));

        let err = Error::from(ErrorKind::Remote {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(!err.is_rate_limited());
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn message_text_is_preserved() {
        let err = Error::from(ErrorKind::Remote {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        assert!(err.to_string().contains("quota exceeded"));
        assert!(err.to_string().contains("429"));
    }
}
