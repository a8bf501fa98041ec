use maud::{html, Markup};

use crate::route::Route;

/// Top bar with the home link and one link per section. The link for
/// `current` carries the `active` class.
pub fn render(current: Route) -> Markup {
    html! {
        nav.navbar {
            a.brand href=(Route::Home.path()) { (Route::Home.label()) }
            div.nav-links {
                @for route in Route::NAV_ITEMS {
                    a.nav-link.active[route == current] href=(route.path()) { (route.label()) }
                }
            }
        }
    }
}
