use {
    super::Repository,
    time::OffsetDateTime,
};

impl Repository {
    /// Drops every session past its expiry and returns how many were removed.
    pub async fn remove_expired_sessions(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.in_memory_store.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        before - sessions.len()
    }
}
