// Service exports
pub mod auth;
pub mod repository;
pub mod sessions;
pub mod storage;

pub use auth::{AuthBackend, AuthError, AuthSession, AuthShell, HttpAuthBackend};
pub use repository::Repository;
pub use sessions::{SessionError, SwipeSessions};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageKey};
