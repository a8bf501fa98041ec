//! Page controllers. Each page owns its [`ViewState`] and decides when a
//! fetch is triggered; rendering is delegated to [`crate::view`].
//!
//! Fetches are not de-duplicated or cancelled. When several are in flight,
//! whichever settles last determines the state.

mod explorer;
mod leaderboards;
mod profile;
mod tournaments;
mod view_state;

pub use explorer::Explorer;
pub use leaderboards::LeaderboardsPage;
pub use profile::ProfilePage;
pub use tournaments::TournamentsPage;
pub use view_state::ViewState;
