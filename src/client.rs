use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::lichess;
use crate::model::*;

/// The main entry point for reading public data from Lichess.
///
/// `LichessClient` wraps a [`reqwest::Client`] and exposes one method
/// per API endpoint: user profiles, top-player leaderboards and
/// tournament listings. Cloning is cheap and shares the connection pool.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lichess_explorer::Result<()> {
/// use lichess_explorer::{LichessClient, TournamentFilter};
///
/// let client = LichessClient::new();
/// let tournaments = client.get_tournaments(TournamentFilter::Started).await?;
/// println!("Found {} running tournaments", tournaments.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LichessClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl LichessClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            config: ClientConfig::default(),
        }
    }

    /// Create a new client talking to the endpoints in `config`.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a single user profile. The username is trimmed first; an
    /// empty name fails without touching the network.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        lichess::user::get_user(&self.http, &self.config, username).await
    }

    /// Fetch the top players for one time control.
    #[instrument(skip(self))]
    pub async fn get_top_players(&self, time_control: TimeControl) -> Result<Vec<Player>> {
        lichess::leaderboard::get_top_players(&self.http, &self.config, time_control).await
    }

    /// Fetch all four leaderboards concurrently. Fails as a whole if any
    /// single leaderboard fails.
    #[instrument(skip(self))]
    pub async fn get_leaderboards(&self) -> Result<Leaderboards> {
        lichess::leaderboard::get_leaderboards(&self.http, &self.config).await
    }

    /// Fetch the tournaments in the given lifecycle stage.
    #[instrument(skip(self))]
    pub async fn get_tournaments(&self, filter: TournamentFilter) -> Result<Vec<Tournament>> {
        lichess::tournament::get_tournaments(&self.http, &self.config, filter).await
    }
}

impl Default for LichessClient {
    fn default() -> Self {
        Self::new()
    }
}
