use std::str::FromStr;

use url::form_urlencoded;

use crate::model::{TimeControl, TournamentFilter};

/// Navigation targets of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum Route {
    Home,
    Profile,
    Leaderboards,
    Tournaments,
}

impl Route {
    /// Links shown in the navigation bar, in order.
    pub const NAV_ITEMS: [Route; 3] = [Route::Profile, Route::Leaderboards, Route::Tournaments];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Leaderboards => "/leaderboards",
            Route::Tournaments => "/tournaments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Lichess Explorer",
            Route::Profile => "Profile",
            Route::Leaderboards => "Leaderboards",
            Route::Tournaments => "Tournaments",
        }
    }

    /// Resolve a request path. Query strings and trailing slashes are
    /// ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Some(Route::Home),
            "/profile" => Some(Route::Profile),
            "/leaderboards" => Some(Route::Leaderboards),
            "/tournaments" => Some(Route::Tournaments),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no route for path {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// A route together with the page state its query string selects, as
/// produced by the links and forms the views render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    /// `?username=` submits a search, including a blank one.
    Profile { username: Option<String> },
    /// `?tab=` picks the visible leaderboard.
    Leaderboards { tab: Option<TimeControl> },
    /// `?status=` picks the tournament filter.
    Tournaments { filter: Option<TournamentFilter> },
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::Home => Route::Home,
            Navigation::Profile { .. } => Route::Profile,
            Navigation::Leaderboards { .. } => Route::Leaderboards,
            Navigation::Tournaments { .. } => Route::Tournaments,
        }
    }
}

impl FromStr for Navigation {
    type Err = UnknownRoute;

    /// Unrecognised query values are dropped rather than rejected.
    fn from_str(target: &str) -> Result<Self, Self::Err> {
        let route: Route = target.parse()?;
        let target = target.split('#').next().unwrap_or_default();
        let query = target.split_once('?').map(|(_, query)| query).unwrap_or_default();
        let param = |name: &str| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        Ok(match route {
            Route::Home => Navigation::Home,
            Route::Profile => Navigation::Profile {
                username: param("username"),
            },
            Route::Leaderboards => Navigation::Leaderboards {
                tab: param("tab").and_then(|tab| tab.parse().ok()),
            },
            Route::Tournaments => Navigation::Tournaments {
                filter: param("status").and_then(|status| status.parse().ok()),
            },
        })
    }
}
