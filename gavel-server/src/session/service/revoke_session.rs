use {
    super::Service,
    crate::session::entities::SessionToken,
};

pub struct RevokeSessionInput {
    pub token: SessionToken,
}

impl Service {
    /// Logout. Revoking a token that is already gone is a no-op.
    pub async fn revoke_session(&self, input: RevokeSessionInput) {
        self.repo.remove_session(&input.token).await;
    }
}

#[cfg(test)]
mod tests {
    use {
        super::RevokeSessionInput,
        crate::{
            api::RestError,
            session::service::{
                create_session::CreateSessionInput,
                resolve_session::ResolveSessionInput,
                Config,
                Service,
            },
        },
        std::time::Duration,
    };

    #[tokio::test]
    async fn test_revoked_session_no_longer_resolves() {
        let service = Service::new(Config {
            session_ttl:             Duration::from_secs(3600),
            single_session_per_user: false,
        });
        let session = service
            .create_session(CreateSessionInput {
                username: "alice".to_string(),
            })
            .await;
        service
            .revoke_session(RevokeSessionInput {
                token: session.token.clone(),
            })
            .await;
        let result = service
            .resolve_session(ResolveSessionInput {
                token: session.token.clone(),
            })
            .await;
        assert!(matches!(result, Err(RestError::InvalidSession)));

        // Revoking again is harmless.
        service
            .revoke_session(RevokeSessionInput {
                token: session.token,
            })
            .await;
    }
}
