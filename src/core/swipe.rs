use crate::models::{Match, Profile, SwipeDirection};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the swipe state machine
#[derive(Debug, Error, PartialEq)]
pub enum SwipeError {
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Match probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// What a single decision did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    Liked,
    Matched,
    Disliked,
    /// The profile had already been liked or disliked; nothing changed
    AlreadyDecided,
}

#[derive(Debug, Clone)]
pub struct Decision {
    pub outcome: DecisionOutcome,
    pub new_match: Option<Match>,
}

/// Persisted form of a swipe session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeSnapshot {
    #[serde(default)]
    pub liked: Vec<String>,
    #[serde(default)]
    pub disliked: Vec<String>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(rename = "sessionDate", default)]
    pub session_date: Option<NaiveDate>,
}

/// Swipe state for one user
///
/// The available queue is never stored: it is always the candidate set minus
/// every decided id, in candidate order. `liked` and `disliked` stay disjoint
/// because a profile can only be decided once until `reset`.
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    candidates: Vec<Profile>,
    liked: Vec<String>,
    disliked: Vec<String>,
    matches: Vec<Match>,
    match_probability: f64,
    session_date: NaiveDate,
}

impl SwipeMachine {
    /// Start a fresh session over `candidates`
    pub fn new(candidates: Vec<Profile>, match_probability: f64) -> Result<Self, SwipeError> {
        validate_probability(match_probability)?;

        Ok(Self {
            candidates,
            liked: Vec::new(),
            disliked: Vec::new(),
            matches: Vec::new(),
            match_probability,
            session_date: Utc::now().date_naive(),
        })
    }

    /// Rehydrate a session from a snapshot
    ///
    /// Decisions from a different day are dropped; matches always survive.
    pub fn restore(
        candidates: Vec<Profile>,
        match_probability: f64,
        snapshot: SwipeSnapshot,
        today: NaiveDate,
    ) -> Result<Self, SwipeError> {
        let mut machine = Self::new(candidates, match_probability)?;
        machine.session_date = today;
        machine.matches = snapshot.matches;

        if snapshot.session_date != Some(today) {
            tracing::debug!("Swipe snapshot from {:?} is stale, starting a new day", snapshot.session_date);
            return Ok(machine);
        }

        for id in snapshot.liked {
            if !machine.is_decided(&id) {
                machine.liked.push(id);
            }
        }
        for id in snapshot.disliked {
            if !machine.is_decided(&id) {
                machine.disliked.push(id);
            }
        }

        Ok(machine)
    }

    pub fn snapshot(&self) -> SwipeSnapshot {
        SwipeSnapshot {
            liked: self.liked.clone(),
            disliked: self.disliked.clone(),
            matches: self.matches.clone(),
            session_date: Some(self.session_date),
        }
    }

    /// Record a like or dislike for `profile_id`
    ///
    /// A like rolls `rng` against the match probability and raises a match
    /// on success, at most once per profile.
    pub fn decide<R: Rng + ?Sized>(
        &mut self,
        profile_id: &str,
        direction: SwipeDirection,
        rng: &mut R,
    ) -> Result<Decision, SwipeError> {
        let profile = self
            .candidates
            .iter()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| SwipeError::UnknownProfile(profile_id.to_string()))?;

        if self.is_decided(profile_id) {
            return Ok(Decision {
                outcome: DecisionOutcome::AlreadyDecided,
                new_match: None,
            });
        }

        match direction {
            SwipeDirection::Dislike => {
                self.disliked.push(profile_id.to_string());
                Ok(Decision {
                    outcome: DecisionOutcome::Disliked,
                    new_match: None,
                })
            }
            SwipeDirection::Like => {
                let already_matched = self.matches.iter().any(|m| m.profile.id == profile_id);
                let new_match = if !already_matched && rng.gen_bool(self.match_probability) {
                    Some(Match {
                        id: uuid::Uuid::new_v4().simple().to_string(),
                        profile: profile.clone(),
                        timestamp: Utc::now(),
                        has_chat: true,
                    })
                } else {
                    None
                };

                self.liked.push(profile_id.to_string());

                match new_match {
                    Some(m) => {
                        self.matches.push(m.clone());
                        Ok(Decision {
                            outcome: DecisionOutcome::Matched,
                            new_match: Some(m),
                        })
                    }
                    None => Ok(Decision {
                        outcome: DecisionOutcome::Liked,
                        new_match: None,
                    }),
                }
            }
        }
    }

    /// Forget every decision; matches are kept
    pub fn reset(&mut self) {
        self.liked.clear();
        self.disliked.clear();
    }

    /// Profiles not yet decided, in candidate order
    pub fn available(&self) -> Vec<&Profile> {
        self.candidates
            .iter()
            .filter(|p| !self.is_decided(&p.id))
            .collect()
    }

    /// Head of the available queue
    pub fn current(&self) -> Option<&Profile> {
        self.candidates.iter().find(|p| !self.is_decided(&p.id))
    }

    pub fn is_decided(&self, profile_id: &str) -> bool {
        self.liked.iter().any(|id| id == profile_id) || self.disliked.iter().any(|id| id == profile_id)
    }

    pub fn liked(&self) -> &[String] {
        &self.liked
    }

    pub fn disliked(&self) -> &[String] {
        &self.disliked
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_probability(&self) -> f64 {
        self.match_probability
    }
}

fn validate_probability(p: f64) -> Result<(), SwipeError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SwipeError::InvalidProbability(p))
    }
}
