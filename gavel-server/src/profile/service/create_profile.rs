use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Username,
        profile::entities,
    },
    argon2::{
        password_hash::{
            rand_core::OsRng,
            PasswordHasher,
            SaltString,
        },
        Argon2,
    },
    time::OffsetDateTime,
};

pub struct CreateProfileInput {
    pub username: Username,
    pub password: String,
}

impl Service {
    #[tracing::instrument(skip_all, fields(username))]
    pub async fn create_profile(
        &self,
        input: CreateProfileInput,
    ) -> Result<entities::Profile, RestError> {
        tracing::Span::current().record("username", input.username.as_str());
        if input.username.is_empty() {
            return Err(RestError::BadParameters(
                "username must not be empty".to_string(),
            ));
        }
        if input.password.chars().count() < self.config.minimum_password_length {
            return Err(RestError::BadParameters(format!(
                "password must be at least {} characters long",
                self.config.minimum_password_length
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|err| {
                tracing::error!(error = ?err, "Failed to hash password");
                RestError::TemporarilyUnavailable
            })?
            .to_string();

        self.repo
            .add_profile(entities::Profile {
                username: input.username,
                password_hash,
                created_at: OffsetDateTime::now_utc(),
            })
            .await
    }
}
