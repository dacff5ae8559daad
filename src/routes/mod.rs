// Route exports
pub mod error;
pub mod matches;
pub mod messages;
pub mod profiles;
pub mod swipe;

use actix_web::web;
use std::sync::Arc;
use crate::services::{Repository, SwipeSessions};

pub use error::{handle_json_payload_error, handle_query_payload_error, ApiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<Repository>,
    pub sessions: Arc<SwipeSessions>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(matches::configure)
            .configure(profiles::configure)
            .configure(messages::configure)
            .configure(swipe::configure),
    );
}
