// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, MatchRecord, Message, Profile, SkillLevel, SportSkill, SwipeDirection, User};
pub use requests::{CreateMatchRequest, CreateMessageRequest, CreateProfileRequest, MessagesQuery, RegisterRequest, SwipeDecision, SwipeQuery, UpdateProfileRequest, UserQuery};
pub use responses::{
    ErrorResponse, HealthResponse, MatchCreatedResponse, MatchListResponse, MessageCreatedResponse, MessageListResponse,
    ProfileListResponse, ProfileResponse, ProfileSavedResponse, SuccessResponse, SwipeDecisionResponse, SwipeStateResponse,
};
