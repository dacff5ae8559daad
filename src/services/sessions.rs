use crate::core::{SwipeError, SwipeMachine, SwipeSnapshot};
use crate::models::Profile;
use crate::services::storage::{load_json, save_json, Storage, StorageError, StorageKey};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Swipe(#[from] SwipeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Per-user swipe sessions persisted through a `Storage` adapter
///
/// Every operation loads the user's snapshot, rebuilds the machine over the
/// current candidate set, applies the change and writes the snapshot back.
/// Operations are serialized so a load/save pair never interleaves.
pub struct SwipeSessions {
    storage: Arc<dyn Storage>,
    match_probability: f64,
    lock: Mutex<()>,
}

impl SwipeSessions {
    pub fn new(storage: Arc<dyn Storage>, match_probability: f64) -> Result<Self, SwipeError> {
        // Fail at startup rather than on the first swipe
        SwipeMachine::new(Vec::new(), match_probability)?;

        Ok(Self {
            storage,
            match_probability,
            lock: Mutex::new(()),
        })
    }

    pub fn match_probability(&self) -> f64 {
        self.match_probability
    }

    /// Load a user's session without modifying it
    pub async fn view(&self, user_id: &str, candidates: Vec<Profile>) -> Result<SwipeMachine, SessionError> {
        let _guard = self.lock.lock().await;
        self.load(user_id, candidates)
    }

    /// Load, mutate and persist a user's session
    pub async fn update<F, T>(
        &self,
        user_id: &str,
        candidates: Vec<Profile>,
        f: F,
    ) -> Result<(T, SwipeMachine), SessionError>
    where
        F: FnOnce(&mut SwipeMachine) -> Result<T, SwipeError>,
    {
        let _guard = self.lock.lock().await;
        let mut machine = self.load(user_id, candidates)?;
        let value = f(&mut machine)?;
        save_json(self.storage.as_ref(), &StorageKey::swipe(user_id), &machine.snapshot())?;
        Ok((value, machine))
    }

    /// Drop everything stored for a user, matches included
    pub async fn discard(&self, user_id: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().await;
        self.storage.remove(&StorageKey::swipe(user_id))?;
        tracing::info!("Discarded swipe session for {}", user_id);
        Ok(())
    }

    fn load(&self, user_id: &str, candidates: Vec<Profile>) -> Result<SwipeMachine, SessionError> {
        let key = StorageKey::swipe(user_id);
        let snapshot = match load_json::<SwipeSnapshot>(self.storage.as_ref(), &key) {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(StorageError::SerializationError(e)) => {
                tracing::warn!("Corrupt swipe snapshot for {}, starting over: {}", user_id, e);
                SwipeSnapshot::default()
            }
            Err(e) => return Err(e.into()),
        };

        let today = Utc::now().date_naive();
        Ok(SwipeMachine::restore(candidates, self.match_probability, snapshot, today)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DecisionOutcome;
    use crate::fixtures;
    use crate::models::SwipeDirection;
    use crate::services::storage::MemoryStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_decisions_survive_between_calls() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let sessions = SwipeSessions::new(storage.clone(), 0.0).unwrap();

        sessions
            .update("u1", fixtures::profiles(), |m| {
                m.decide("1", SwipeDirection::Dislike, &mut StdRng::seed_from_u64(3))
            })
            .await
            .unwrap();

        let machine = sessions.view("u1", fixtures::profiles()).await.unwrap();
        assert_eq!(machine.disliked(), ["1".to_string()]);
        assert!(storage.get("swipe:u1").unwrap().is_some());

        let other = sessions.view("u2", fixtures::profiles()).await.unwrap();
        assert!(other.disliked().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_is_not_persisted() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let sessions = SwipeSessions::new(storage.clone(), 0.0).unwrap();

        let result = sessions
            .update("u1", fixtures::profiles(), |m| {
                m.decide("missing", SwipeDirection::Like, &mut StdRng::seed_from_u64(3))
            })
            .await;

        assert!(matches!(result, Err(SessionError::Swipe(SwipeError::UnknownProfile(_)))));
        assert!(storage.get("swipe:u1").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_starts_over() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set("swipe:u1", "{not json").unwrap();
        let sessions = SwipeSessions::new(storage, 1.0).unwrap();

        let (decision, machine) = sessions
            .update("u1", fixtures::profiles(), |m| {
                m.decide("2", SwipeDirection::Like, &mut StdRng::seed_from_u64(3))
            })
            .await
            .unwrap();

        assert_eq!(decision.outcome, DecisionOutcome::Matched);
        assert_eq!(machine.available().len(), 6);
    }

    #[tokio::test]
    async fn test_discard_wipes_matches() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let sessions = SwipeSessions::new(storage, 1.0).unwrap();

        sessions
            .update("u1", fixtures::profiles(), |m| {
                m.decide("2", SwipeDirection::Like, &mut StdRng::seed_from_u64(3))
            })
            .await
            .unwrap();
        sessions.discard("u1").await.unwrap();

        let machine = sessions.view("u1", fixtures::profiles()).await.unwrap();
        assert!(machine.matches().is_empty());
    }

    #[test]
    fn test_rejects_invalid_probability() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        assert!(SwipeSessions::new(storage, 2.0).is_err());
    }
}
