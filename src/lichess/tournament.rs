use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{LichessError, Result};
use crate::lichess;
use crate::model::{Tournament, TournamentFilter};

/// Fields searched, in order, when neither the body nor the field named
/// after the filter holds the list.
const FALLBACK_FIELDS: [&str; 5] = ["started", "created", "finished", "tournaments", "data"];

/// One way of locating the tournament array inside a response body.
struct Extraction {
    name: &'static str,
    /// Whether a match means the body had a documented shape.
    expected: bool,
    extract: fn(&Value, TournamentFilter) -> Option<&Value>,
}

const EXTRACTIONS: [Extraction; 3] = [
    Extraction {
        name: "top-level array",
        expected: true,
        extract: top_level_array,
    },
    Extraction {
        name: "filter field",
        expected: true,
        extract: filter_field,
    },
    Extraction {
        name: "fallback field",
        expected: false,
        extract: fallback_field,
    },
];

fn top_level_array(body: &Value, _filter: TournamentFilter) -> Option<&Value> {
    body.is_array().then_some(body)
}

fn filter_field(body: &Value, filter: TournamentFilter) -> Option<&Value> {
    let field: &str = filter.as_ref();
    body.get(field).filter(|v| v.is_array())
}

fn fallback_field(body: &Value, _filter: TournamentFilter) -> Option<&Value> {
    FALLBACK_FIELDS
        .iter()
        .find_map(|field| body.get(field).filter(|v| v.is_array()))
}

#[instrument(skip(client, config))]
pub(crate) async fn get_tournaments(
    client: &reqwest::Client,
    config: &ClientConfig,
    filter: TournamentFilter,
) -> Result<Vec<Tournament>> {
    let url = config.api_url(&format!(
        "/api/tournament?status={filter}&nb={}",
        config.tournament_page_size
    ));
    let body: Value = lichess::get_json(client, &url).await?;
    let tournaments = normalize_tournaments(&body, filter).map_err(|e| LichessError::Json {
        url: url.clone(),
        source: e,
    })?;
    debug!(count = tournaments.len(), %filter, "fetched tournaments");
    Ok(tournaments)
}

/// Locate the tournament list in `body` using the first extraction that
/// matches. A body with no recognizable list yields an empty one.
pub(crate) fn normalize_tournaments(
    body: &Value,
    filter: TournamentFilter,
) -> serde_json::Result<Vec<Tournament>> {
    let found = EXTRACTIONS.iter().find_map(|extraction| {
        (extraction.extract)(body, filter).map(|list| (extraction, list))
    });

    match found {
        Some((extraction, list)) => {
            if extraction.expected {
                debug!(strategy = extraction.name, %filter, "located tournament list");
            } else {
                warn!(strategy = extraction.name, %filter, "unexpected tournament list shape");
            }
            Vec::<Tournament>::deserialize(list)
        }
        None => {
            warn!(%filter, "no tournament list found in response");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{ok, MockApi};

    fn tournament(id: &str) -> Value {
        json!({
            "id": id,
            "fullName": format!("{id} Arena"),
            "status": 30,
            "clock": {"limit": 60, "increment": 0},
            "minutes": 30,
            "variant": {"key": "standard", "name": "Standard"}
        })
    }

    fn ids(tournaments: &[Tournament]) -> Vec<&str> {
        tournaments.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn extracts_filter_field() {
        let body = json!({
            "created": [tournament("c1")],
            "started": [tournament("s1")],
            "finished": [tournament("f1"), tournament("f2")]
        });
        let list = normalize_tournaments(&body, TournamentFilter::Finished).unwrap();
        assert_eq!(ids(&list), vec!["f1", "f2"]);
    }

    #[test]
    fn uses_bare_array() {
        let body = json!([tournament("a"), tournament("b")]);
        let list = normalize_tournaments(&body, TournamentFilter::Finished).unwrap();
        assert_eq!(ids(&list), vec!["a", "b"]);
    }

    #[test]
    fn falls_back_to_data_field() {
        let body = json!({"data": [tournament("d1")]});
        let list = normalize_tournaments(&body, TournamentFilter::Finished).unwrap();
        assert_eq!(ids(&list), vec!["d1"]);
    }

    #[test]
    fn fallback_order() {
        let body = json!({
            "finished": "not a list",
            "tournaments": [tournament("t1")],
            "created": [tournament("c1")]
        });
        let list = normalize_tournaments(&body, TournamentFilter::Finished).unwrap();
        assert_eq!(ids(&list), vec!["c1"]);
    }

    #[test]
    fn nothing_matches() {
        let body = json!({"message": "nothing here"});
        assert!(normalize_tournaments(&body, TournamentFilter::Started)
            .unwrap()
            .is_empty());
        assert!(normalize_tournaments(&json!(null), TournamentFilter::Created)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn malformed_entry_is_an_error() {
        let body = json!({"created": [{"fullName": "no id"}]});
        assert!(normalize_tournaments(&body, TournamentFilter::Created).is_err());
    }

    #[tokio::test]
    async fn test_get_tournaments() {
        let api = MockApi::spawn(|_| {
            ok(&json!({"created": [], "started": [tournament("s1")], "finished": []}).to_string())
        })
        .await;
        let client = api.client();

        let list = get_tournaments(&reqwest::Client::new(), client.config(), TournamentFilter::Started)
            .await
            .unwrap();

        assert_eq!(ids(&list), vec!["s1"]);
        assert_eq!(api.requests(), vec!["/api/tournament?status=started&nb=50"]);
    }
}
