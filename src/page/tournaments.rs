use maud::Markup;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::ViewState;
use crate::model::{Tournament, TournamentFilter};
use crate::{view, LichessClient};

const STATUS_ERROR: &str = "Failed to fetch tournaments";

/// Tournament listing filtered by lifecycle stage. Changing the filter
/// fetches again.
pub struct TournamentsPage {
    client: LichessClient,
    filter: watch::Sender<TournamentFilter>,
    state: watch::Sender<ViewState<Vec<Tournament>>>,
}

impl TournamentsPage {
    pub fn new(client: LichessClient) -> Self {
        Self {
            client,
            filter: watch::Sender::new(TournamentFilter::default()),
            state: watch::Sender::new(ViewState::Loading),
        }
    }

    pub fn state(&self) -> watch::Ref<'_, ViewState<Vec<Tournament>>> {
        self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Tournament>>> {
        self.state.subscribe()
    }

    pub fn filter(&self) -> TournamentFilter {
        *self.filter.borrow()
    }

    /// Load tournaments for the current filter. Run on mount and on
    /// "Try Again".
    #[instrument(skip(self))]
    pub async fn fetch(&self) {
        let filter = self.filter();
        self.state.send_replace(ViewState::Loading);
        let result = self.client.get_tournaments(filter).await;
        debug!(ok = result.is_ok(), %filter, "tournaments fetch settled");
        self.state.send_replace(ViewState::settle(result, STATUS_ERROR));
    }

    /// Select `filter`, fetching once if it differs from the current one.
    /// Returns whether a fetch ran.
    #[instrument(skip(self))]
    pub async fn set_filter(&self, filter: TournamentFilter) -> bool {
        let changed = self.filter.send_if_modified(|current| {
            if *current == filter {
                return false;
            }
            *current = filter;
            true
        });
        if changed {
            self.fetch().await;
        }
        changed
    }

    pub fn render(&self) -> Markup {
        view::tournaments::render(&self.state.borrow(), self.filter(), self.client.config())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::test_support::{ok, MockApi};

    /// Answers with a one-element list named after the requested status,
    /// keyed the way the real API does.
    fn serve_by_status(target: &str) -> (StatusCode, String) {
        let status = target
            .split(['?', '&'])
            .find_map(|part| part.strip_prefix("status="))
            .unwrap_or("created");
        let mut body = serde_json::Map::new();
        body.insert(
            status.to_string(),
            json!([{"id": format!("{status}-1"), "fullName": format!("{status} arena")}]),
        );
        ok(&serde_json::Value::Object(body).to_string())
    }

    #[tokio::test]
    async fn test_mount_uses_default_filter() {
        let api = MockApi::spawn(serve_by_status).await;
        let page = TournamentsPage::new(api.client());

        page.fetch().await;

        assert_eq!(page.filter(), TournamentFilter::Created);
        assert_eq!(api.requests(), vec!["/api/tournament?status=created&nb=50"]);
        let ids: Vec<String> = page
            .state()
            .data()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["created-1"]);
    }

    #[tokio::test]
    async fn test_filter_change_fetches_once() {
        let api = MockApi::spawn(serve_by_status).await;
        let page = TournamentsPage::new(api.client());
        page.fetch().await;

        for filter in [
            TournamentFilter::Finished,
            TournamentFilter::Started,
            TournamentFilter::Created,
        ] {
            let before = api.requests().len();

            assert!(page.set_filter(filter).await);

            let requests = api.requests();
            assert_eq!(requests.len(), before + 1);
            assert_eq!(
                requests.last().map(String::as_str),
                Some(format!("/api/tournament?status={filter}&nb=50").as_str())
            );
            let first_id = page
                .state()
                .data()
                .and_then(|list| list.first())
                .map(|t| t.id.clone());
            assert_eq!(first_id, Some(format!("{filter}-1")));
        }
    }

    #[tokio::test]
    async fn test_overlapping_fetches_last_settled_wins() {
        let api = MockApi::spawn_with_delay(serve_by_status, |target| {
            if target.contains("status=created") {
                Duration::from_millis(400)
            } else {
                Duration::ZERO
            }
        })
        .await;
        let page = TournamentsPage::new(api.client());
        let mut states = page.subscribe();

        let (_, changed) = tokio::join!(page.fetch(), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let changed = page.set_filter(TournamentFilter::Finished).await;
            let ids: Vec<String> = page
                .state()
                .data()
                .map(|list| list.iter().map(|t| t.id.clone()).collect())
                .unwrap_or_default();
            assert_eq!(ids, vec!["finished-1"]);
            changed
        });

        assert!(changed);
        assert_eq!(
            api.requests(),
            vec![
                "/api/tournament?status=created&nb=50",
                "/api/tournament?status=finished&nb=50",
            ]
        );
        // The slow created listing settled last and replaced the finished one.
        assert_eq!(page.filter(), TournamentFilter::Finished);
        let ids: Vec<String> = states
            .borrow_and_update()
            .data()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["created-1"]);
    }

    #[tokio::test]
    async fn test_same_filter_does_not_fetch() {
        let api = MockApi::spawn(serve_by_status).await;
        let page = TournamentsPage::new(api.client());
        page.fetch().await;

        assert!(!page.set_filter(TournamentFilter::Created).await);
        assert_eq!(api.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let api = MockApi::spawn(|target| {
            if target.contains("status=finished") {
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            } else {
                serve_by_status(target)
            }
        })
        .await;
        let page = TournamentsPage::new(api.client());

        page.set_filter(TournamentFilter::Finished).await;
        assert_eq!(page.state().error(), Some("Failed to fetch tournaments"));

        page.set_filter(TournamentFilter::Started).await;
        assert!(page.state().error().is_none());
        assert_eq!(page.state().data().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let api = MockApi::spawn(|_| ok(r#"{"created":[],"started":[],"finished":[]}"#)).await;
        let page = TournamentsPage::new(api.client());

        page.fetch().await;

        assert_eq!(page.state().data().map(Vec::len), Some(0));
        assert!(page
            .render()
            .into_string()
            .contains("No tournaments found for the selected filter."));
    }
}
