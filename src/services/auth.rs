use crate::config::AuthSettings;
use crate::core::{guard, RouteDecision};
use crate::models::{RegisterRequest, User};
use crate::services::storage::{load_json, save_json, Storage, StorageError, StorageKey};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the auth endpoint
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Auth endpoint returned {0}")]
    Rejected(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid registration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Remote identity provider
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Fetch the profile that owns `token`
    async fn current_user(&self, token: &str) -> Result<User, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// `AuthBackend` over the external REST auth service
///
/// Handles:
/// - `POST /auth/login` (form encoded, returns `access_token`)
/// - `GET /users/me` (bearer token)
/// - `POST /auth/register` (JSON)
pub struct HttpAuthBackend {
    base_url: String,
    client: Client,
}

impl HttpAuthBackend {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a backend from the `[auth]` settings section
    pub fn from_settings(settings: &AuthSettings) -> Result<Self, AuthError> {
        let timeout = Duration::from_secs(settings.timeout_secs.unwrap_or(10));
        Self::new(settings.endpoint.clone(), timeout)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(response.status()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("Failed to parse token: {}", e)))?;

        Ok(body.access_token)
    }

    async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .get(self.url("/users/me"))
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("Failed to parse user: {}", e)))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let payload = serde_json::json!({
            "username": request.email,
            "name": request.name,
            "email": request.email,
            "age": request.age,
            "location": request.location,
            "bio": request.bio,
            "sports": request.sports,
            "password": request.password,
            "confirm_password": request.confirm_password,
        });

        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(response.status()));
        }

        Ok(())
    }
}

/// Signed-in state: a bearer token and the user it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Holds the optional `{token, user}` pair and keeps it in storage
///
/// Tokens are never inspected locally. An expired token is only noticed when
/// a later call fails, at which point `handle_auth_error` signs the user out.
pub struct AuthShell {
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn Storage>,
    session: Option<AuthSession>,
}

impl AuthShell {
    pub fn new(backend: Arc<dyn AuthBackend>, storage: Arc<dyn Storage>) -> Self {
        Self {
            backend,
            storage,
            session: None,
        }
    }

    /// Rehydrate the session from storage
    ///
    /// Returns whether a session was found. Unreadable entries count as absent.
    pub fn restore(&mut self) -> bool {
        let token = self.storage.get(&StorageKey::token());
        let user = load_json::<User>(self.storage.as_ref(), &StorageKey::user());

        self.session = match (token, user) {
            (Ok(Some(token)), Ok(Some(user))) => Some(AuthSession { token, user }),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Failed to restore auth session: {}", e);
                None
            }
            _ => None,
        };
        self.session.is_some()
    }

    /// Sign in; any failure leaves the shell signed out and returns `false`
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        match self.try_login(email, password).await {
            Ok(session) => {
                tracing::info!("Signed in as {}", session.user.username);
                self.session = Some(session);
                true
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                false
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let token = self.backend.login(email, password).await?;
        let user = self.backend.current_user(&token).await?;

        self.storage.set(&StorageKey::token(), &token)?;
        save_json(self.storage.as_ref(), &StorageKey::user(), &user)?;

        Ok(AuthSession { token, user })
    }

    /// Create an account; does not sign in
    pub async fn register(&self, request: &RegisterRequest) -> bool {
        let result = match request.validate() {
            Ok(()) => self.backend.register(request).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                false
            }
        }
    }

    /// Sign out and wipe everything in storage, swipe sessions included
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear storage on logout: {}", e);
        }
    }

    /// React to a 401 from any authenticated call
    pub fn handle_auth_error(&mut self) {
        tracing::info!("Token expired or invalid, signing out");
        self.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn guard(&self, path: &str) -> RouteDecision {
        guard(path, self.is_authenticated())
    }
}
