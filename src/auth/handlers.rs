use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{dto::User, error::AuthError},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub async fn root() -> &'static str {
    "Fomo Backend is Running! 🚀"
}

/// Parse a request body into a user record. This is the only structural
/// validation the service performs; any parse failure, including a body
/// that is not UTF-8, is reported as the same opaque 400.
fn parse_user(body: &[u8]) -> Result<User, AuthError> {
    serde_json::from_slice(body).map_err(|_| AuthError::InvalidData)
}

#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), AuthError> {
    let new_user = parse_user(&body)?;

    // Existence check and append are two separate store operations; a
    // concurrent identical signup can slip between them.
    if state.store.exists(&new_user).await {
        warn!(username = %new_user.username, email = %new_user.email, "signup conflict");
        return Err(AuthError::UserExists);
    }

    state.store.append(new_user.clone()).await;
    info!(username = %new_user.username, "New User Registered");

    Ok((StatusCode::CREATED, Json(new_user)))
}

#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>, AuthError> {
    let credentials = parse_user(&body)?;

    // The email field doubles as the identifier; it is matched against
    // stored emails AND usernames. The username field of the payload is
    // never consulted.
    match state
        .store
        .find_match(&credentials.email, &credentials.password)
        .await
    {
        Some(user) => {
            info!(username = %user.username, "user logged in");
            Ok(Json(user))
        }
        None => {
            warn!(identifier = %credentials.email, "login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
