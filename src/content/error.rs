use thiserror::Error;

/// Coarse classification of a failed content call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Shape,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl ContentError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn shape(err: impl std::fmt::Display) -> Self {
        Self::Shape(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Status { .. } => ErrorKind::Transport,
            Self::Shape(_) => ErrorKind::Shape,
        }
    }
}

/// The error a page sees. `Display` is the user-facing message only; the
/// structured cause stays available through [`FetchError::cause`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    message: &'static str,
    #[source]
    cause: ContentError,
}

impl FetchError {
    pub fn new(message: &'static str, cause: ContentError) -> Self {
        Self { message, cause }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn cause(&self) -> &ContentError {
        &self.cause
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_hides_cause() {
        let err = FetchError::new(
            "Failed to fetch reviews.",
            ContentError::transport("http://cms/api/reviews", "connection refused"),
        );
        assert_eq!(err.to_string(), "Failed to fetch reviews.");
        assert_eq!(err.kind(), ErrorKind::Transport);
        let source = err.source().expect("cause should be the source");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn test_status_is_transport_kind() {
        let err = ContentError::Status {
            url: "http://cms/api/phases".to_string(),
            status: 502,
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(ContentError::shape("missing id").kind(), ErrorKind::Shape);
    }
}
