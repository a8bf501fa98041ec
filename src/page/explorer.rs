use maud::Markup;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::{LeaderboardsPage, ProfilePage, TournamentsPage};
use crate::route::{Navigation, Route, UnknownRoute};
use crate::{view, LichessClient};

/// All pages behind one navigation entry point. Follows the links and
/// forms the views render and decides which page fetches.
///
/// Entering a page counts as mounting it. Leaderboards and Tournaments
/// fetch on mount and again when their previous fetch failed ("Try
/// Again" links back to the page). A `?tab=` on the current page only
/// switches tabs; a `?status=` fetches only when the filter changes.
/// Profile searches whenever a `?username=` is submitted.
pub struct Explorer {
    profile: ProfilePage,
    leaderboards: LeaderboardsPage,
    tournaments: TournamentsPage,
    current: watch::Sender<Route>,
}

impl Explorer {
    pub fn new(client: LichessClient) -> Self {
        Self {
            profile: ProfilePage::new(client.clone()),
            leaderboards: LeaderboardsPage::new(client.clone()),
            tournaments: TournamentsPage::new(client),
            current: watch::Sender::new(Route::Home),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    pub fn profile(&self) -> &ProfilePage {
        &self.profile
    }

    pub fn leaderboards(&self) -> &LeaderboardsPage {
        &self.leaderboards
    }

    pub fn tournaments(&self) -> &TournamentsPage {
        &self.tournaments
    }

    /// Follow `target` (a path with optional query), run whatever fetch it
    /// calls for and render the resulting page.
    #[instrument(skip(self))]
    pub async fn navigate(&self, target: &str) -> Result<Markup, UnknownRoute> {
        let navigation: Navigation = target.parse()?;
        let route = navigation.route();
        let mounted = self.current.send_replace(route) != route;
        debug!(?route, mounted, "navigating");

        match navigation {
            Navigation::Home => {}
            Navigation::Profile { username } => {
                if let Some(username) = username {
                    self.profile.search(&username).await;
                }
            }
            Navigation::Leaderboards { tab } => {
                if let Some(tab) = tab {
                    self.leaderboards.select_tab(tab);
                }
                let failed = self.leaderboards.state().error().is_some();
                if mounted || failed {
                    self.leaderboards.fetch().await;
                }
            }
            Navigation::Tournaments { filter } => {
                let fetched = match filter {
                    Some(filter) => self.tournaments.set_filter(filter).await,
                    None => false,
                };
                let failed = self.tournaments.state().error().is_some();
                if !fetched && (mounted || failed) {
                    self.tournaments.fetch().await;
                }
            }
        }

        Ok(self.render())
    }

    /// Render the current page without fetching.
    pub fn render(&self) -> Markup {
        match self.current() {
            Route::Home => view::home(),
            Route::Profile => self.profile.render(),
            Route::Leaderboards => self.leaderboards.render(),
            Route::Tournaments => self.tournaments.render(),
        }
    }
}
