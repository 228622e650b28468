use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{SessionToken, Username};

/// Identity of a logged-in player, passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub username: Username,
    pub token: SessionToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: Username,
    pub score: u32,
    pub date: DateTime<Utc>,
}
