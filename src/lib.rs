//! SportMatch - swipe-to-match service for finding sports partners
//!
//! The library holds the swipe state machine, the auth shell and the REST
//! handlers over an in-memory profile store.

pub mod config;
pub mod core;
pub mod fixtures;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{guard, normalize_sports, Decision, DecisionOutcome, RouteDecision, SwipeError, SwipeMachine, SwipeSnapshot};
pub use models::{Match, Profile, SportSkill, SwipeDecision, SwipeDirection, User};
pub use services::{AuthShell, Repository, Storage, SwipeSessions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let machine = SwipeMachine::new(fixtures::profiles(), 0.5).unwrap();
        assert_eq!(machine.available().len(), 7);
    }
}
