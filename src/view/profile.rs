use itertools::Itertools;
use maud::{html, Markup};

use crate::config::ClientConfig;
use crate::model::UserProfile;
use crate::page::ViewState;
use crate::route::Route;
use crate::view;

/// Search form plus whichever of error panel or profile card applies.
pub fn render(state: &ViewState<UserProfile>, query: &str, config: &ClientConfig) -> Markup {
    let loading = state.is_loading();
    let content = html! {
        h1 { "Lichess Profile Viewer" }
        section.search {
            h2 { "Search Player Profile" }
            form method="get" action=(Route::Profile.path()) {
                input type="text" name="username" value=(query)
                    placeholder="Enter Lichess username (e.g., magnuscarlsen, hikaru)";
                button type="submit" disabled[loading] {
                    @if loading {
                        span.spinner {}
                        "Searching..."
                    } @else {
                        "Search Player"
                    }
                }
            }
            @if let Some(message) = state.error() {
                div.error {
                    p.error-message { (message) }
                }
            }
        }
        @if let Some(profile) = state.data() {
            (profile_card(profile, config))
        }
    };
    view::page(Route::Profile, content)
}

fn profile_card(profile: &UserProfile, config: &ClientConfig) -> Markup {
    html! {
        article.profile-card {
            @if profile.avatar.is_some() {
                img.avatar
                    src=(config.asset_url(&format!("/export/crosstable/{}.png", profile.username)))
                    alt={ (profile.username) " avatar" };
            }
            header {
                h2 { (profile.username) }
                @if let Some(title) = &profile.title {
                    span.title-badge { (title) }
                }
            }
            @if let Some(bio) = profile.bio() {
                p.bio { (bio) }
            }
            div.stats {
                div.games {
                    h3 { "Games Played" }
                    p.count { (group_thousands(profile.games_played())) }
                }
                div.ratings {
                    h3 { "Ratings" }
                    @for (time_control, perf) in profile.perfs.rated() {
                        div.rating { (time_control.label()) ": " (perf.rating) }
                    }
                }
            }
        }
    }
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}
