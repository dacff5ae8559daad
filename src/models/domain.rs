use serde::{Deserialize, Serialize};

/// Candidate profile shown in the swipe queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub location: String,
    pub bio: String,
    #[serde(deserialize_with = "crate::core::normalize::deserialize_sports")]
    pub sports: Vec<SportSkill>,
    /// Distance from the current user in kilometers
    pub distance: f64,
    #[serde(rename = "profilePicture")]
    pub profile_picture: String,
}

impl Profile {
    /// Sport names without levels, in declaration order
    pub fn sport_names(&self) -> Vec<&str> {
        self.sports.iter().map(|s| s.sport.as_str()).collect()
    }
}

/// A sport a profile practices, with an optional self-reported level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSkill {
    pub sport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

impl SportSkill {
    pub fn new(sport: impl Into<String>, level: Option<SkillLevel>) -> Self {
        Self {
            sport: sport.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[serde(alias = "Principiante", alias = "principiante", alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermedio", alias = "intermedio", alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Avanzado", alias = "avanzado", alias = "Advanced")]
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[serde(alias = "right")]
    Like,
    #[serde(alias = "left")]
    Dislike,
}

/// Simulated mutual-interest event raised by a like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub profile: Profile,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "hasChat", default = "default_true")]
    pub has_chat: bool,
}

fn default_true() -> bool { true }

/// Match as stored behind the REST surface, linking two user ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    #[serde(rename = "user1Id")]
    pub user1_id: String,
    #[serde(rename = "user2Id")]
    pub user2_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "hasChat")]
    pub has_chat: bool,
}

impl MatchRecord {
    pub fn involves(&self, user_id: &str) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }
}

/// Chat message exchanged within a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "receiverId")]
    pub receiver_id: String,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

/// Authenticated user as returned by the remote `/users/me` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "crate::core::normalize::deserialize_sports")]
    pub sports: Vec<SportSkill>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}
