use crate::fixtures;
use crate::models::{CreateMatchRequest, CreateMessageRequest, CreateProfileRequest, Match, MatchRecord, Message, Profile, UpdateProfileRequest};
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory store behind the REST handlers
///
/// Seeded from fixtures; nothing written here survives a restart.
pub struct Repository {
    current_user: RwLock<Profile>,
    profiles: RwLock<Vec<Profile>>,
    matches: RwLock<Vec<MatchRecord>>,
    messages: RwLock<Vec<Message>>,
}

impl Repository {
    pub fn new(
        current_user: Profile,
        profiles: Vec<Profile>,
        matches: Vec<MatchRecord>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            current_user: RwLock::new(current_user),
            profiles: RwLock::new(profiles),
            matches: RwLock::new(matches),
            messages: RwLock::new(messages),
        }
    }

    /// Repository seeded with the bundled fixtures
    pub fn seeded() -> Self {
        Self::new(
            fixtures::current_user(),
            fixtures::profiles(),
            fixtures::matches(),
            fixtures::messages(),
        )
    }

    pub async fn current_user(&self) -> Profile {
        self.current_user.read().await.clone()
    }

    pub async fn list_profiles(&self) -> Vec<Profile> {
        self.profiles.read().await.clone()
    }

    /// Every profile except `user_id`'s own
    pub async fn candidates_for(&self, user_id: &str) -> Vec<Profile> {
        self.profiles
            .read()
            .await
            .iter()
            .filter(|p| p.id != user_id)
            .cloned()
            .collect()
    }

    pub async fn get_profile(&self, id: &str) -> Option<Profile> {
        {
            let current = self.current_user.read().await;
            if current.id == id {
                return Some(current.clone());
            }
        }
        self.profiles.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn create_profile(&self, req: CreateProfileRequest) -> Profile {
        let profile = Profile {
            id: new_id(),
            name: req.name,
            age: req.age,
            location: req.location,
            bio: req.bio,
            sports: req.sports,
            distance: req.distance,
            profile_picture: req.profile_picture,
        };

        self.profiles.write().await.push(profile.clone());
        tracing::debug!("Created profile {}", profile.id);
        profile
    }

    /// Apply a partial update, returning the stored result
    ///
    /// The signed-in user's own profile is editable like any other.
    pub async fn update_profile(&self, id: &str, req: UpdateProfileRequest) -> Option<Profile> {
        {
            let mut current = self.current_user.write().await;
            if current.id == id {
                apply_update(&mut current, req);
                return Some(current.clone());
            }
        }

        let mut profiles = self.profiles.write().await;
        let profile = profiles.iter_mut().find(|p| p.id == id)?;
        apply_update(profile, req);
        Some(profile.clone())
    }

    /// Matches where `user_id` is on either side, newest first
    pub async fn matches_for(&self, user_id: &str) -> Vec<MatchRecord> {
        let mut matches: Vec<MatchRecord> = self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.involves(user_id))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matches
    }

    pub async fn create_match(&self, req: CreateMatchRequest) -> MatchRecord {
        let record = MatchRecord {
            id: new_id(),
            user1_id: req.user1_id,
            user2_id: req.user2_id,
            timestamp: req.timestamp.unwrap_or_else(Utc::now),
            has_chat: req.has_chat,
        };

        self.matches.write().await.push(record.clone());
        record
    }

    /// Store a match raised by a swipe under the same id, so chats can key on it
    pub async fn record_match(&self, user_id: &str, found: &Match) -> MatchRecord {
        let record = MatchRecord {
            id: found.id.clone(),
            user1_id: user_id.to_string(),
            user2_id: found.profile.id.clone(),
            timestamp: found.timestamp,
            has_chat: found.has_chat,
        };

        self.matches.write().await.push(record.clone());
        tracing::debug!("Recorded match {} between {} and {}", record.id, record.user1_id, record.user2_id);
        record
    }

    /// Messages of a match, oldest first
    pub async fn messages_for(&self, match_id: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| m.match_id == match_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        messages
    }

    pub async fn create_message(&self, req: CreateMessageRequest) -> Message {
        let message = Message {
            id: new_id(),
            match_id: req.match_id,
            sender_id: req.sender_id,
            receiver_id: req.receiver_id,
            content: req.content,
            timestamp: req.timestamp.unwrap_or_else(Utc::now),
            read: req.read,
        };

        self.messages.write().await.push(message.clone());
        message
    }

    /// Mark every unread message addressed to `user_id` in a match as read
    ///
    /// Returns how many messages changed.
    pub async fn mark_read(&self, match_id: &str, user_id: &str) -> usize {
        let mut messages = self.messages.write().await;
        let mut updated = 0;
        for message in messages
            .iter_mut()
            .filter(|m| m.match_id == match_id && m.receiver_id == user_id && !m.read)
        {
            message.read = true;
            updated += 1;
        }
        updated
    }
}

fn apply_update(profile: &mut Profile, req: UpdateProfileRequest) {
    if let Some(name) = req.name {
        profile.name = name;
    }
    if let Some(age) = req.age {
        profile.age = age;
    }
    if let Some(location) = req.location {
        profile.location = location;
    }
    if let Some(bio) = req.bio {
        profile.bio = bio;
    }
    if let Some(sports) = req.sports {
        profile.sports = sports;
    }
    if let Some(distance) = req.distance {
        profile.distance = distance;
    }
    if let Some(picture) = req.profile_picture {
        profile.profile_picture = picture;
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CURRENT_USER_ID;

    #[tokio::test]
    async fn test_candidates_exclude_self() {
        let repo = Repository::seeded();
        let candidates = repo.candidates_for("3").await;

        assert_eq!(candidates.len(), 6);
        assert!(candidates.iter().all(|p| p.id != "3"));
    }

    #[tokio::test]
    async fn test_update_profile_is_partial() {
        let repo = Repository::seeded();
        let update = UpdateProfileRequest {
            bio: Some("Nueva bio".to_string()),
            ..Default::default()
        };

        let updated = repo.update_profile("1", update).await.unwrap();

        assert_eq!(updated.bio, "Nueva bio");
        assert_eq!(updated.name, "Mauro Brero");
        assert_eq!(repo.get_profile("1").await.unwrap().bio, "Nueva bio");
        assert!(repo.update_profile("missing", UpdateProfileRequest::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_update_own_profile() {
        let repo = Repository::seeded();
        let update = UpdateProfileRequest {
            location: Some("Núñez".to_string()),
            ..Default::default()
        };

        let updated = repo.update_profile(CURRENT_USER_ID, update).await.unwrap();

        assert_eq!(updated.location, "Núñez");
        assert_eq!(repo.current_user().await.location, "Núñez");
        assert_eq!(repo.get_profile(CURRENT_USER_ID).await.unwrap().location, "Núñez");
        assert_eq!(repo.list_profiles().await.len(), 7);
    }

    #[tokio::test]
    async fn test_swipe_match_listed_with_its_id() {
        let repo = Repository::seeded();
        let profile = repo.get_profile("5").await.unwrap();
        let found = Match {
            id: "swipe-match".to_string(),
            profile,
            timestamp: Utc::now() + chrono::Duration::seconds(1),
            has_chat: true,
        };

        repo.record_match(CURRENT_USER_ID, &found).await;

        let matches = repo.matches_for(CURRENT_USER_ID).await;
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].id, "swipe-match");
        assert_eq!(matches[0].user2_id, "5");
        assert_eq!(repo.matches_for("5").await.len(), 1);
    }

    #[tokio::test]
    async fn test_mark_read_only_touches_receiver() {
        let repo = Repository::seeded();

        assert_eq!(repo.mark_read("2", "3").await, 0);
        assert_eq!(repo.mark_read("2", CURRENT_USER_ID).await, 1);
        assert!(repo.messages_for("2").await.iter().all(|m| m.read));
    }

    #[tokio::test]
    async fn test_matches_for_either_side() {
        let repo = Repository::seeded();

        assert_eq!(repo.matches_for(CURRENT_USER_ID).await.len(), 2);
        assert_eq!(repo.matches_for("3").await.len(), 1);
        assert!(repo.matches_for("7").await.is_empty());
    }
}
