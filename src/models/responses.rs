use serde::{Deserialize, Serialize};
use crate::core::swipe::DecisionOutcome;
use crate::models::domain::{Match, MatchRecord, Message, Profile};

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Response for profile create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSavedResponse {
    pub success: bool,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCreatedResponse {
    pub success: bool,
    #[serde(rename = "match")]
    pub match_record: MatchRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreatedResponse {
    pub success: bool,
    pub message: Message,
}

/// Snapshot of a user's swipe session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeStateResponse {
    pub current: Option<Profile>,
    pub available: Vec<Profile>,
    pub liked: Vec<String>,
    pub disliked: Vec<String>,
    pub matches: Vec<Match>,
}

/// Result of a single swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeDecisionResponse {
    pub outcome: DecisionOutcome,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub new_match: Option<Match>,
    /// Next profile to show, if any remain
    pub next: Option<Profile>,
}
