// Core logic exports
pub mod filters;
pub mod guard;
pub mod normalize;
pub mod swipe;

pub use filters::{plays_any, SwipeFilters};
pub use guard::{guard, RouteDecision};
pub use normalize::{normalize_sports, RawSports};
pub use swipe::{Decision, DecisionOutcome, SwipeError, SwipeMachine, SwipeSnapshot};
