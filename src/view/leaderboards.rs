use maud::{html, Markup};

use crate::model::{Leaderboards, TimeControl};
use crate::page::ViewState;
use crate::route::Route;
use crate::view;

pub fn render(state: &ViewState<Leaderboards>, active_tab: TimeControl) -> Markup {
    let content = match state {
        ViewState::Idle => html! {},
        ViewState::Loading => view::loading_panel("Loading leaderboards..."),
        ViewState::Error(message) => view::error_panel(message, Route::Leaderboards.path()),
        ViewState::Ready(boards) => ready(boards, active_tab),
    };
    view::page(Route::Leaderboards, content)
}

fn ready(boards: &Leaderboards, active_tab: TimeControl) -> Markup {
    html! {
        h1 { "Lichess Leaderboards" }
        nav.tabs {
            @for time_control in TimeControl::ALL {
                a.tab.active[time_control == active_tab]
                    href={ (Route::Leaderboards.path()) "?tab=" (time_control.to_string()) } {
                    (time_control.label())
                }
            }
        }
        table.leaderboard {
            thead {
                tr {
                    th { "Rank" }
                    th { "Player" }
                    th { "Title" }
                    th { "Rating" }
                }
            }
            tbody {
                @for (index, player) in boards.get(active_tab).iter().enumerate() {
                    tr {
                        td.rank { (index + 1) }
                        td.player { (player.username) }
                        td.player-title {
                            @if let Some(title) = &player.title {
                                span.title-badge { (title) }
                            }
                        }
                        td.rating { (player.perfs.rating(active_tab)) }
                    }
                }
            }
        }
    }
}
