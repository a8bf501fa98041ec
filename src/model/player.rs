use serde::{Deserialize, Serialize};

use super::{Perfs, TimeControl};

/// A ranked player as listed on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub perfs: Perfs,
}

/// Top players for every time control.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Leaderboards {
    pub blitz: Vec<Player>,
    pub rapid: Vec<Player>,
    pub classical: Vec<Player>,
    pub bullet: Vec<Player>,
}

impl Leaderboards {
    pub fn get(&self, time_control: TimeControl) -> &[Player] {
        match time_control {
            TimeControl::Blitz => &self.blitz,
            TimeControl::Rapid => &self.rapid,
            TimeControl::Classical => &self.classical,
            TimeControl::Bullet => &self.bullet,
        }
    }
}

/// Game counters of a user profile.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCount {
    #[serde(default)]
    pub all: u64,
}

/// Free-form profile section some accounts fill in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    #[serde(default)]
    pub bio: Option<String>,
}

/// Public profile of a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub count: GameCount,
    #[serde(default)]
    pub perfs: Perfs,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileDetails>,
}

impl UserProfile {
    /// Bio text, preferring the top-level field over the nested profile.
    pub fn bio(&self) -> Option<&str> {
        self.bio
            .as_deref()
            .or_else(|| self.profile.as_ref().and_then(|p| p.bio.as_deref()))
            .filter(|bio| !bio.trim().is_empty())
    }

    pub fn games_played(&self) -> u64 {
        self.count.all
    }
}
