use {
    super::{
        Auth,
        RestError,
    },
    crate::{
        profile::service::verify_password::VerifyPasswordInput,
        session::service::{
            create_session::CreateSessionInput,
            revoke_session::RevokeSessionInput,
        },
        state::Store,
    },
    axum::{
        extract::State,
        Json,
    },
    gavel_api_types::{
        session::{
            AccessToken,
            Login,
        },
        ErrorBodyResponse,
    },
    std::sync::Arc,
};

/// Log in and obtain a session token.
///
/// The error for a wrong password and for an unknown username is the same,
/// so the endpoint cannot be used to probe which usernames exist.
#[utoipa::path(post, path = "/login", request_body = Login, responses(
(status = 200, description = "A fresh session token", body = AccessToken),
(status = 401, description = "Invalid username or password", body = ErrorBodyResponse),
),)]
pub async fn post_login(
    State(store): State<Arc<Store>>,
    Json(params): Json<Login>,
) -> Result<Json<AccessToken>, RestError> {
    store
        .profile_service
        .verify_password(VerifyPasswordInput {
            username: params.username.clone(),
            password: params.password,
        })
        .await?;
    let session = store
        .session_service
        .create_session(CreateSessionInput {
            username: params.username,
        })
        .await;
    Ok(Json(AccessToken {
        token: session.token,
    }))
}

/// Log out, revoking the presented session token.
#[utoipa::path(post, path = "/logout",
security(
    ("bearerAuth" = []),
),
responses(
(status = 200, description = "The session was revoked"),
(status = 401, description = "Session token is invalid or expired", body = ErrorBodyResponse),
),)]
pub async fn post_logout(
    auth: Auth,
    State(store): State<Arc<Store>>,
) -> Result<Json<()>, RestError> {
    match auth {
        Auth::Authorized(token, _) => {
            store
                .session_service
                .revoke_session(RevokeSessionInput { token })
                .await;
            Ok(Json(()))
        }
        Auth::Unauthorized => Err(RestError::InvalidSession),
    }
}
