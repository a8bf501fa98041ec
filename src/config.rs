const DEFAULT_API_BASE: &str = "https://lichess.org";
const DEFAULT_ASSET_BASE: &str = "https://lichess1.org";

/// Number of players requested per leaderboard.
pub const LEADERBOARD_SIZE: u8 = 50;
/// Number of tournaments requested per listing.
pub const TOURNAMENT_PAGE_SIZE: u8 = 50;

/// Endpoints and request sizes used by [`LichessClient`](crate::LichessClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the read API, without a trailing slash.
    pub api_base: String,
    /// Base URL for static assets such as profile images.
    pub asset_base: String,
    pub leaderboard_size: u8,
    pub tournament_page_size: u8,
}

impl ClientConfig {
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }

    pub(crate) fn asset_url(&self, path: &str) -> String {
        format!("{}{path}", self.asset_base.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            leaderboard_size: LEADERBOARD_SIZE,
            tournament_page_size: TOURNAMENT_PAGE_SIZE,
        }
    }
}
