use maud::Markup;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::ViewState;
use crate::model::{Leaderboards, TimeControl};
use crate::{view, LichessClient};

const STATUS_ERROR: &str = "Failed to fetch leaderboards";

/// Top players for every time control, shown one tab at a time.
pub struct LeaderboardsPage {
    client: LichessClient,
    active_tab: watch::Sender<TimeControl>,
    state: watch::Sender<ViewState<Leaderboards>>,
}

impl LeaderboardsPage {
    /// The page starts out loading; call [`fetch`](Self::fetch) once it is
    /// shown.
    pub fn new(client: LichessClient) -> Self {
        Self {
            client,
            active_tab: watch::Sender::new(TimeControl::default()),
            state: watch::Sender::new(ViewState::Loading),
        }
    }

    pub fn state(&self) -> watch::Ref<'_, ViewState<Leaderboards>> {
        self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Leaderboards>> {
        self.state.subscribe()
    }

    pub fn active_tab(&self) -> TimeControl {
        *self.active_tab.borrow()
    }

    /// Switch the visible leaderboard. Never fetches.
    pub fn select_tab(&self, time_control: TimeControl) {
        self.active_tab.send_replace(time_control);
    }

    /// Load all four leaderboards. Run on mount and on "Try Again".
    #[instrument(skip(self))]
    pub async fn fetch(&self) {
        self.state.send_replace(ViewState::Loading);
        let result = self.client.get_leaderboards().await;
        debug!(ok = result.is_ok(), "leaderboards fetch settled");
        self.state.send_replace(ViewState::settle(result, STATUS_ERROR));
    }

    pub fn render(&self) -> Markup {
        view::leaderboards::render(&self.state.borrow(), self.active_tab())
    }
}
