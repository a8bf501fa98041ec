use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tournament lifecycle filter used when listing tournaments.
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
pub enum TournamentFilter {
    #[default]
    Created,
    Started,
    Finished,
}

impl TournamentFilter {
    pub const ALL: [TournamentFilter; 3] = [
        TournamentFilter::Created,
        TournamentFilter::Started,
        TournamentFilter::Finished,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TournamentFilter::Created => "Created",
            TournamentFilter::Started => "Started",
            TournamentFilter::Finished => "Finished",
        }
    }
}

/// Lifecycle stage as encoded by the API (10, 20, 30). Serializes back to
/// the numeric code; reading never fails, anything unrecognized (including
/// `null`) becomes `Unknown`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::FromRepr,
)]
#[serde(into = "u16")]
#[repr(u16)]
pub enum TournamentStatus {
    Created = 10,
    Started = 20,
    Finished = 30,
    #[default]
    Unknown = 0,
}

impl From<u16> for TournamentStatus {
    fn from(code: u16) -> Self {
        Self::from_repr(code).unwrap_or_else(|| {
            warn!(code, "unknown tournament status");
            Self::Unknown
        })
    }
}

impl From<TournamentStatus> for u16 {
    fn from(status: TournamentStatus) -> Self {
        status as u16
    }
}

impl<'de> Deserialize<'de> for TournamentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Name(String),
            Other(serde::de::IgnoredAny),
        }

        let status = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Code(code)) => u16::try_from(code).map(Self::from).unwrap_or_else(|_| {
                warn!(code, "tournament status out of range");
                Self::Unknown
            }),
            Some(Raw::Name(name)) => match name.to_ascii_lowercase().as_str() {
                "created" => Self::Created,
                "started" => Self::Started,
                "finished" => Self::Finished,
                _ => {
                    warn!(%name, "unknown tournament status");
                    Self::Unknown
                }
            },
            Some(Raw::Other(_)) | None => Self::Unknown,
        };
        Ok(status)
    }
}

/// Chess variant, reported either as a bare name or as `{key, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    Plain(String),
    Structured {
        key: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl Variant {
    pub fn display_name(&self) -> &str {
        match self {
            Variant::Plain(name) => name,
            Variant::Structured { key, name } => name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(key),
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Plain("standard".to_string())
    }
}

/// Clock settings: base time in seconds plus per-move increment in seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub increment: u32,
}

impl Clock {
    pub fn base_minutes(&self) -> f64 {
        f64::from(self.limit) / 60.0
    }

    /// Short notation such as `3+2` or `0.5+0`.
    pub fn label(&self) -> String {
        format!("{}+{}", self.base_minutes(), self.increment)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub freq: String,
    #[serde(default)]
    pub speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Performance category the tournament is rated in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfCategory {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
}

impl PerfCategory {
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.key.as_deref().filter(|k| !k.is_empty()))
            .unwrap_or("Unknown")
    }
}

/// An arena tournament as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nb_players: u32,
    /// `None` or `Some(0)` means the tournament has no player cap.
    #[serde(default)]
    pub max_players: Option<u32>,
    #[serde(default)]
    pub clock: Clock,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub rated: bool,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default, deserialize_with = "flexible_timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_timestamp::deserialize")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_timestamp::deserialize")]
    pub finishes_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default)]
    pub perf: Option<PerfCategory>,
}

impl Tournament {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn max_players_label(&self) -> String {
        self.max_players
            .filter(|&max| max > 0)
            .map(|max| max.to_string())
            .unwrap_or_else(|| "∞".to_string())
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.minutes)
    }
}

/// `"{h}h {m}m"` from one hour upwards, `"{m}m"` below.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// Accepts epoch milliseconds or an RFC 3339 string. Anything unreadable
/// becomes `None`.
mod flexible_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| match raw {
            Raw::Millis(ms) => DateTime::from_timestamp_millis(ms),
            Raw::Text(text) => DateTime::parse_from_rfc3339(&text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }))
    }
}
