use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{LichessError, Result};
use crate::lichess;
use crate::model::UserProfile;

#[instrument(skip(client, config))]
pub(crate) async fn get_user(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<UserProfile> {
    let username = username.trim();
    if username.is_empty() {
        return Err(LichessError::EmptyUsername);
    }

    let url = user_url(config, username)?;
    let profile: UserProfile = lichess::get_json(client, url.as_str()).await?;
    debug!(
        username = %profile.username,
        games = profile.games_played(),
        "fetched user profile"
    );
    Ok(profile)
}

/// `{api_base}/api/user/{username}` with the name encoded as one path
/// segment, so `/`, `?` and `#` cannot leave the lookup endpoint.
fn user_url(config: &ClientConfig, username: &str) -> Result<Url> {
    if matches!(username, "." | "..") {
        return Err(LichessError::InvalidUsername {
            username: username.to_string(),
        });
    }

    let base = config.api_url("/api/user");
    let invalid_base = || LichessError::InvalidBaseUrl { base: base.clone() };
    let mut url = Url::parse(&base).map_err(|_| invalid_base())?;
    url.path_segments_mut()
        .map_err(|_| invalid_base())?
        .push(username);
    Ok(url)
}
