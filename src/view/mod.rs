//! HTML rendering. Every function here is a pure function of the state it
//! is handed; nothing in this module fetches.

pub mod leaderboards;
pub mod navigation;
pub mod profile;
pub mod tournaments;

use maud::{html, Markup, DOCTYPE};

use crate::route::Route;

/// Wrap page content in the document shell and navigation bar.
pub fn page(current: Route, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if current == Route::Home {
                        (Route::Home.label())
                    } @else {
                        (current.label()) " | " (Route::Home.label())
                    }
                }
            }
            body {
                (navigation::render(current))
                main class="container" {
                    (content)
                }
            }
        }
    }
}

/// Landing page linking to the three sections.
pub fn home() -> Markup {
    page(
        Route::Home,
        html! {
            h1 { (Route::Home.label()) }
            p { "Browse public Lichess profiles, leaderboards and tournaments." }
            ul.sections {
                @for route in Route::NAV_ITEMS {
                    li { a href=(route.path()) { (route.label()) } }
                }
            }
        },
    )
}

pub(crate) fn loading_panel(message: &str) -> Markup {
    html! {
        div.loading {
            div.spinner {}
            p { (message) }
        }
    }
}

pub(crate) fn error_panel(message: &str, retry_href: &str) -> Markup {
    html! {
        div.error {
            p.error-message { (message) }
            a.retry href=(retry_href) { "Try Again" }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn home_links_every_section() {
        let document = Html::parse_document(&home().into_string());
        let selector = Selector::parse("main ul.sections a").unwrap();
        let hrefs: Vec<_> = document
            .select(&selector)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/profile", "/leaderboards", "/tournaments"]);
    }

    #[test]
    fn error_panel_escapes_message() {
        let html = error_panel("<b>boom</b>", "/leaderboards").into_string();
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
        assert!(html.contains("Try Again"));
    }
}
