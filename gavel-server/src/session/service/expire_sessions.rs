use {
    super::Service,
    time::OffsetDateTime,
};

impl Service {
    /// Housekeeping sweep over the session map. `resolve_session` re-checks
    /// expiry itself, so correctness never depends on this running.
    #[tracing::instrument(skip_all, fields(removed))]
    pub async fn expire_sessions(&self) {
        let removed = self
            .repo
            .remove_expired_sessions(OffsetDateTime::now_utc())
            .await;
        if removed > 0 {
            tracing::Span::current().record("removed", removed);
            tracing::debug!("Removed expired sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::session::service::{
            create_session::CreateSessionInput,
            Config,
            Service,
        },
        std::time::Duration,
    };

    #[tokio::test]
    async fn test_sweep_removes_only_expired_entries() {
        let expiring = Service::new(Config {
            session_ttl:             Duration::ZERO,
            single_session_per_user: false,
        });
        let dead = expiring
            .create_session(CreateSessionInput {
                username: "alice".to_string(),
            })
            .await;
        expiring.expire_sessions().await;
        assert!(expiring.repo.get_session(&dead.token).await.is_none());

        let lasting = Service::new(Config {
            session_ttl:             Duration::from_secs(3600),
            single_session_per_user: false,
        });
        let live = lasting
            .create_session(CreateSessionInput {
                username: "bob".to_string(),
            })
            .await;
        lasting.expire_sessions().await;
        assert!(lasting.repo.get_session(&live.token).await.is_some());
    }
}
