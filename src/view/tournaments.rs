use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::config::ClientConfig;
use crate::model::{Tournament, TournamentFilter};
use crate::page::ViewState;
use crate::route::Route;
use crate::view;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn render(
    state: &ViewState<Vec<Tournament>>,
    filter: TournamentFilter,
    config: &ClientConfig,
) -> Markup {
    let content = match state {
        ViewState::Idle => html! {},
        ViewState::Loading => view::loading_panel("Loading tournaments..."),
        ViewState::Error(message) => view::error_panel(message, &filter_href(filter)),
        ViewState::Ready(tournaments) => ready(tournaments, filter, config),
    };
    view::page(Route::Tournaments, content)
}

fn filter_href(filter: TournamentFilter) -> String {
    format!("{}?status={filter}", Route::Tournaments.path())
}

fn ready(tournaments: &[Tournament], active: TournamentFilter, config: &ClientConfig) -> Markup {
    html! {
        h1 { "Lichess Tournaments" }
        nav.tabs {
            @for filter in TournamentFilter::ALL {
                a.tab.active[filter == active] href=(filter_href(filter)) { (filter.label()) }
            }
        }
        div.tournaments {
            @if tournaments.is_empty() {
                p.empty { "No tournaments found for the selected filter." }
            } @else {
                @for tournament in tournaments {
                    (card(tournament, config))
                }
            }
        }
    }
}

fn card(tournament: &Tournament, config: &ClientConfig) -> Markup {
    let status = tournament.status.to_string();
    html! {
        article.tournament-card id=(tournament.id) {
            header {
                h3 { (tournament.display_name()) }
                @if let Some(description) = tournament.description.as_deref().filter(|d| !d.is_empty()) {
                    p.description { (description) }
                }
                span class={ "status status-" (status.to_lowercase()) } { (status) }
                @if tournament.rated {
                    span.rated { "Rated" }
                }
            }
            dl.details {
                dt { "Players" }
                dd.players { (tournament.nb_players) "/" (tournament.max_players_label()) }
                dt { "Time Control" }
                dd.clock { (tournament.clock.label()) }
                dt { "Duration" }
                dd.duration { (tournament.duration_label()) }
                dt { "Variant" }
                dd.variant { (tournament.variant.display_name()) }
            }
            dl.timeline {
                @if let Some(created_at) = tournament.created_at {
                    dt { "Created:" }
                    dd { (format_time(created_at)) }
                }
                @if let Some(starts_at) = tournament.starts_at {
                    dt { "Starts:" }
                    dd { (format_time(starts_at)) }
                }
                @if let Some(finishes_at) = tournament.finishes_at {
                    dt { "Ends:" }
                    dd { (format_time(finishes_at)) }
                }
            }
            @if let Some(schedule) = &tournament.schedule {
                p.schedule { strong { "Schedule:" } " " (schedule.freq) " - " (schedule.speed) }
            }
            @if let Some(winner) = &tournament.winner {
                p.winner {
                    strong { "Winner:" } " " (winner.name)
                    @if let Some(title) = &winner.title {
                        " " span.title-badge { (title) }
                    }
                }
            }
            @if let Some(perf) = &tournament.perf {
                p.perf { strong { "Performance:" } " " (perf.label()) }
            }
            a.view-link
                href=(config.api_url(&format!("/tournament/{}", tournament.id)))
                target="_blank"
                rel="noopener noreferrer" {
                "View Tournament"
            }
        }
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}
