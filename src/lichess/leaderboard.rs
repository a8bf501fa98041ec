use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::lichess;
use crate::model::{Leaderboards, Player, TimeControl};

/// Body of `/api/player/top/{nb}/{perf}`.
#[derive(Debug, Deserialize)]
struct TopPlayers {
    #[serde(default)]
    users: Option<Vec<Player>>,
}

#[instrument(skip(client, config))]
pub(crate) async fn get_top_players(
    client: &reqwest::Client,
    config: &ClientConfig,
    time_control: TimeControl,
) -> Result<Vec<Player>> {
    let url = config.api_url(&format!(
        "/api/player/top/{}/{time_control}",
        config.leaderboard_size
    ));
    let body: TopPlayers = lichess::get_json(client, &url).await?;
    let players = body.users.unwrap_or_default();
    debug!(count = players.len(), %time_control, "fetched top players");
    Ok(players)
}

/// Fan out one request per time control and join them. The first failure
/// fails the whole set; partial results are never returned.
#[instrument(skip(client, config))]
pub(crate) async fn get_leaderboards(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<Leaderboards> {
    let (blitz, rapid, classical, bullet) = tokio::try_join!(
        get_top_players(client, config, TimeControl::Blitz),
        get_top_players(client, config, TimeControl::Rapid),
        get_top_players(client, config, TimeControl::Classical),
        get_top_players(client, config, TimeControl::Bullet),
    )?;

    Ok(Leaderboards {
        blitz,
        rapid,
        classical,
        bullet,
    })
}
