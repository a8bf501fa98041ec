pub(crate) mod leaderboard;
pub(crate) mod tournament;
pub(crate) mod user;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LichessError, Result};

/// GET a URL and decode the JSON body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| LichessError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LichessError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| LichessError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| LichessError::Json {
        url: url.to_owned(),
        source: e,
    })
}
