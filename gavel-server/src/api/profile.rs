use {
    super::RestError,
    crate::{
        profile::{
            entities,
            service::create_profile::CreateProfileInput,
        },
        state::Store,
    },
    axum::{
        extract::State,
        Json,
    },
    gavel_api_types::{
        profile::{
            CreateProfile,
            Profile,
        },
        ErrorBodyResponse,
    },
    std::sync::Arc,
};

impl From<entities::Profile> for Profile {
    fn from(profile: entities::Profile) -> Self {
        Profile {
            username:   profile.username,
            created_at: profile.created_at,
        }
    }
}

/// Register a new user.
///
/// Usernames are unique; registering a taken one fails. The password is
/// stored only as a salted hash.
#[utoipa::path(post, path = "/register", request_body = CreateProfile, responses(
(status = 200, description = "The registered profile", body = Profile),
(status = 400, response = ErrorBodyResponse),
(status = 409, description = "The username is already taken", body = ErrorBodyResponse),
),)]
pub async fn post_register(
    State(store): State<Arc<Store>>,
    Json(params): Json<CreateProfile>,
) -> Result<Json<Profile>, RestError> {
    let profile = store
        .profile_service
        .create_profile(CreateProfileInput {
            username: params.username,
            password: params.password,
        })
        .await?;
    Ok(Json(profile.into()))
}
