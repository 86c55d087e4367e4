use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Username,
        session::entities::SessionToken,
    },
    time::OffsetDateTime,
};

pub struct ResolveSessionInput {
    pub token: SessionToken,
}

impl Service {
    /// Maps a token to its owning username. Expiry is checked here on every
    /// call; the background sweep only reclaims memory. Unknown and expired
    /// tokens produce the same error.
    pub async fn resolve_session(&self, input: ResolveSessionInput) -> Result<Username, RestError> {
        let session = self
            .repo
            .get_session(&input.token)
            .await
            .ok_or(RestError::InvalidSession)?;
        if session.is_expired(OffsetDateTime::now_utc()) {
            self.repo.remove_session(&input.token).await;
            return Err(RestError::InvalidSession);
        }
        Ok(session.username)
    }
}
