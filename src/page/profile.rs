use maud::Markup;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::ViewState;
use crate::error::LichessError;
use crate::model::UserProfile;
use crate::{view, LichessClient};

const STATUS_ERROR: &str = "User not found";

/// Looks up a single profile on demand. Starts [`ViewState::Idle`].
pub struct ProfilePage {
    client: LichessClient,
    query: watch::Sender<String>,
    state: watch::Sender<ViewState<UserProfile>>,
}

impl ProfilePage {
    pub fn new(client: LichessClient) -> Self {
        Self {
            client,
            query: watch::Sender::new(String::new()),
            state: watch::Sender::new(ViewState::Idle),
        }
    }

    pub fn state(&self) -> watch::Ref<'_, ViewState<UserProfile>> {
        self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<UserProfile>> {
        self.state.subscribe()
    }

    /// The username as last submitted.
    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    /// Search for `username`. Blank input fails immediately without a
    /// request.
    #[instrument(skip(self))]
    pub async fn search(&self, username: &str) {
        self.query.send_replace(username.to_string());

        if username.trim().is_empty() {
            self.state
                .send_replace(ViewState::Error(LichessError::EmptyUsername.to_string()));
            return;
        }

        self.state.send_replace(ViewState::Loading);
        let result = self.client.get_user(username).await;
        debug!(ok = result.is_ok(), "profile fetch settled");
        self.state.send_replace(ViewState::settle(result, STATUS_ERROR));
    }

    /// Repeat the last search.
    pub async fn retry(&self) {
        let query = self.query();
        self.search(&query).await;
    }

    pub fn render(&self) -> Markup {
        view::profile::render(&self.state.borrow(), &self.query.borrow(), self.client.config())
    }
}
