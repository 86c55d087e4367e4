use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Username,
    },
    argon2::{
        password_hash::{
            rand_core::OsRng,
            PasswordHash,
            PasswordHasher,
            PasswordVerifier,
            SaltString,
        },
        Argon2,
    },
};

pub struct VerifyPasswordInput {
    pub username: Username,
    pub password: String,
}

impl Service {
    /// Checks the presented credentials. Unknown usernames and wrong
    /// passwords fail with the same error, and the unknown-username path
    /// still runs a hash so response time does not reveal user existence.
    #[tracing::instrument(skip_all, fields(username))]
    pub async fn verify_password(&self, input: VerifyPasswordInput) -> Result<(), RestError> {
        tracing::Span::current().record("username", input.username.as_str());
        let Some(profile) = self.repo.get_profile(&input.username).await else {
            let salt = SaltString::generate(&mut OsRng);
            let _ = Argon2::default().hash_password(input.password.as_bytes(), &salt);
            return Err(RestError::InvalidCredentials);
        };

        let parsed_hash = PasswordHash::new(&profile.password_hash).map_err(|err| {
            tracing::error!(error = ?err, "Stored password hash failed to parse");
            RestError::TemporarilyUnavailable
        })?;
        match Argon2::default().verify_password(input.password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(_) => Err(RestError::InvalidCredentials),
        }
    }
}
