use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The request could not be sent, or came back with a non-2xx status.
    NetworkFailure(String),
    /// The comic is absent from the backend listing.
    NotFound(String),
    /// The response body did not have the expected JSON shape.
    InvalidFormat(String),
    /// A rendered image failed to load.
    ImageLoadFailure(String),
    /// The backend answered 2xx but reported an error (e.g. unknown topic).
    Backend(String),
}

impl AppError {
    /// Static message shown to the user; details only go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::NetworkFailure(_) => "Failed to load. Please check your connection and try again.",
            AppError::NotFound(_) => "Comic not found",
            AppError::InvalidFormat(_) => "Invalid response format",
            AppError::ImageLoadFailure(_) => "Image unavailable",
            AppError::Backend(_) => "Failed to generate comic.",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkFailure(m) => write!(f, "network failure: {m}"),
            AppError::NotFound(m) => write!(f, "not found: {m}"),
            AppError::InvalidFormat(m) => write!(f, "invalid format: {m}"),
            AppError::ImageLoadFailure(m) => write!(f, "image failed to load: {m}"),
            AppError::Backend(m) => write!(f, "backend error: {m}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(inner) => AppError::InvalidFormat(inner.to_string()),
            other => AppError::NetworkFailure(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidFormat(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_invalid_format() {
        let err: AppError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, AppError::InvalidFormat(_)));
        assert_eq!(err.user_message(), "Invalid response format");
    }

    #[test]
    fn display_keeps_detail() {
        let err = AppError::NotFound("Cats".into());
        assert_eq!(err.to_string(), "not found: Cats");
    }
}
