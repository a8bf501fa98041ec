//! Typed access to public Lichess data (player profiles, leaderboards and
//! tournament listings) plus the page controllers and HTML views of a small
//! explorer built on top of it.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod route;
pub mod view;

pub(crate) mod lichess;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::LichessClient;
pub use config::ClientConfig;
pub use error::{LichessError, Result};
pub use model::*;
pub use page::{Explorer, LeaderboardsPage, ProfilePage, TournamentsPage, ViewState};
pub use route::{Navigation, Route};
