use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{SportSkill, SwipeDirection};

/// Request to create a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, deserialize_with = "crate::core::normalize::deserialize_sports")]
    pub sports: Vec<SportSkill>,
    #[serde(default)]
    pub distance: f64,
    #[serde(alias = "profilePicture", rename = "profilePicture", default)]
    pub profile_picture: String,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "crate::core::normalize::deserialize_optional_sports")]
    pub sports: Option<Vec<SportSkill>>,
    pub distance: Option<f64>,
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,
}

/// Request to create a match between two users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user1_id", rename = "user1Id")]
    pub user1_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "user2_id", rename = "user2Id")]
    pub user2_id: String,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "hasChat", default = "default_true")]
    pub has_chat: bool,
}

fn default_true() -> bool { true }

/// Request to post a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "sender_id", rename = "senderId")]
    pub sender_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "receiver_id", rename = "receiverId")]
    pub receiver_id: String,
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub read: bool,
}

/// `?userId=` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// `?userId=` plus optional queue filters for the swipe endpoints
///
/// `sports` is a comma-separated list, e.g. `?sports=Tenis,Running`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwipeQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub sports: Option<String>,
    #[serde(rename = "maxDistance")]
    pub max_distance: Option<f64>,
    #[serde(rename = "minAge")]
    pub min_age: Option<u8>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<u8>,
}

/// `?matchId=&userId=` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesQuery {
    #[serde(rename = "matchId")]
    pub match_id: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Request to record a swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeDecision {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    pub direction: SwipeDirection,
}

/// Payload forwarded to the remote registration endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub age: u8,
    pub location: String,
    pub bio: String,
    pub sports: Vec<String>,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;
    use serde_json::json;

    #[test]
    fn test_create_profile_normalizes_sports() {
        let req: CreateProfileRequest = serde_json::from_value(json!({
            "name": "Lucía",
            "age": 27,
            "sports": [{ "sport": "Vóley", "level": "Intermedio" }, "vóley"]
        }))
        .unwrap();

        assert_eq!(req.sports.len(), 1);
        assert_eq!(req.sports[0].level, Some(SkillLevel::Intermediate));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_profile_rejects_empty_name() {
        let req: CreateProfileRequest =
            serde_json::from_value(json!({ "name": "", "age": 30 })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_message_accepts_text_alias() {
        let req: CreateMessageRequest = serde_json::from_value(json!({
            "matchId": "1",
            "senderId": "current-user",
            "receiverId": "1",
            "text": "¿Jugamos el sábado?"
        }))
        .unwrap();

        assert_eq!(req.content, "¿Jugamos el sábado?");
        assert!(!req.read);
    }

    #[test]
    fn test_register_requires_matching_passwords() {
        let req = RegisterRequest {
            name: "Tomás".to_string(),
            email: "tomas@example.com".to_string(),
            age: 26,
            location: "Belgrano".to_string(),
            bio: String::new(),
            sports: vec!["Tenis".to_string()],
            password: "secret".to_string(),
            confirm_password: "other".to_string(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_swipe_direction_accepts_left_right() {
        let req: SwipeDecision =
            serde_json::from_value(json!({ "profileId": "3", "direction": "right" })).unwrap();
        assert_eq!(req.direction, SwipeDirection::Like);
    }
}
