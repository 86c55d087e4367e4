use {
    super::Service,
    crate::{
        kernel::entities::Username,
        session::entities,
    },
    base64::{
        engine::general_purpose::URL_SAFE_NO_PAD,
        Engine,
    },
    time::OffsetDateTime,
};

pub struct CreateSessionInput {
    pub username: Username,
}

impl Service {
    #[tracing::instrument(skip_all, fields(username))]
    pub async fn create_session(&self, input: CreateSessionInput) -> entities::Session {
        tracing::Span::current().record("username", input.username.as_str());
        if self.config.single_session_per_user {
            self.repo.remove_sessions_for_user(&input.username).await;
        }

        let raw: [u8; 32] = rand::random();
        let issued_at = OffsetDateTime::now_utc();
        let session = entities::Session {
            token: URL_SAFE_NO_PAD.encode(raw),
            username: input.username,
            issued_at,
            expires_at: issued_at + self.config.session_ttl,
        };
        self.repo.add_session(session.clone()).await;
        session
    }
}
