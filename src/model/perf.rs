use serde::{Deserialize, Serialize};

/// Game pacing category used to split ratings and leaderboards.
///
/// Variants are declared in the order the leaderboard tabs are shown.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeControl {
    #[default]
    Blitz,
    Rapid,
    Classical,
    Bullet,
}

impl TimeControl {
    pub const ALL: [TimeControl; 4] = [
        TimeControl::Blitz,
        TimeControl::Rapid,
        TimeControl::Classical,
        TimeControl::Bullet,
    ];

    /// Human-readable label, e.g. `"Blitz"`.
    pub fn label(self) -> &'static str {
        match self {
            TimeControl::Blitz => "Blitz",
            TimeControl::Rapid => "Rapid",
            TimeControl::Classical => "Classical",
            TimeControl::Bullet => "Bullet",
        }
    }
}

/// Performance record for one time control.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perf {
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub games: Option<u32>,
    #[serde(default, alias = "prog")]
    pub progress: Option<i32>,
}

/// Ratings keyed by time control. Other perf categories the API reports
/// (puzzles, variants, ...) are ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perfs {
    #[serde(default)]
    pub blitz: Option<Perf>,
    #[serde(default)]
    pub rapid: Option<Perf>,
    #[serde(default)]
    pub classical: Option<Perf>,
    #[serde(default)]
    pub bullet: Option<Perf>,
}

impl Perfs {
    pub fn get(&self, time_control: TimeControl) -> Option<&Perf> {
        match time_control {
            TimeControl::Blitz => self.blitz.as_ref(),
            TimeControl::Rapid => self.rapid.as_ref(),
            TimeControl::Classical => self.classical.as_ref(),
            TimeControl::Bullet => self.bullet.as_ref(),
        }
    }

    /// Rating for `time_control`, or 0 when the player has none.
    pub fn rating(&self, time_control: TimeControl) -> u32 {
        self.get(time_control).map(|p| p.rating).unwrap_or_default()
    }

    /// Time controls that carry a rating, in display order.
    pub fn rated(&self) -> impl Iterator<Item = (TimeControl, &Perf)> + '_ {
        TimeControl::ALL
            .into_iter()
            .filter_map(|tc| self.get(tc).map(|perf| (tc, perf)))
    }
}
