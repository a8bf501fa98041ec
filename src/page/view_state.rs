use crate::error::Result;

/// What a page currently shows. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing has been requested yet.
    Idle,
    Loading,
    /// Human-readable failure message.
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    /// Turn a settled fetch into a state. Status failures are reported with
    /// `status_message`, every other failure with its own text.
    pub fn settle(result: Result<T>, status_message: &str) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(err) => ViewState::Error(err.user_message(status_message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LichessError;

    #[test]
    fn settle_success() {
        let state = ViewState::settle(Ok(7), "unused");
        assert_eq!(state, ViewState::Ready(7));
        assert_eq!(state.data(), Some(&7));
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn settle_status_failure() {
        let state: ViewState<u8> = ViewState::settle(
            Err(LichessError::UnexpectedStatus {
                url: "http://localhost/api/user/x".to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            }),
            "User not found",
        );
        assert_eq!(state.error(), Some("User not found"));
        assert!(state.data().is_none());
    }

    #[test]
    fn settle_validation_failure() {
        let state: ViewState<u8> =
            ViewState::settle(Err(LichessError::EmptyUsername), "User not found");
        assert_eq!(state, ViewState::Error("Please enter a username".to_string()));
    }
}
