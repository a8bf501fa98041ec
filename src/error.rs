/// All errors that can occur while talking to the Lichess API.
#[derive(thiserror::Error, Debug)]
pub enum LichessError {
    /// The username was empty after trimming; no request was issued.
    #[error("Please enter a username")]
    EmptyUsername,

    /// The username cannot name a user (e.g. `..`); no request was issued.
    #[error("invalid username {username:?}")]
    InvalidUsername { username: String },

    /// The configured API base cannot have path segments appended.
    #[error("invalid API base url {base}")]
    InvalidBaseUrl { base: String },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The body was not JSON, or did not have the shape we need.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },
}

impl LichessError {
    /// Message shown to the user for this failure.
    ///
    /// Status errors get the page's fixed `status_message`; everything else
    /// surfaces its own text.
    pub fn user_message(&self, status_message: &str) -> String {
        match self {
            LichessError::UnexpectedStatus { .. } => status_message.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LichessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_message() {
        assert_eq!(
            LichessError::EmptyUsername.to_string(),
            "Please enter a username"
        );
        assert_eq!(
            LichessError::EmptyUsername.user_message("User not found"),
            "Please enter a username"
        );
    }

    #[test]
    fn status_error_uses_page_message() {
        let err = LichessError::UnexpectedStatus {
            url: "https://lichess.org/api/user/nobody".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.user_message("User not found"), "User not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn decode_error_surfaces_its_text() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LichessError::Json {
            url: "https://lichess.org/api/tournament".to_string(),
            source,
        };
        let message = err.user_message("Failed to fetch tournaments");
        assert!(message.starts_with("failed to decode response from"));
    }
}
