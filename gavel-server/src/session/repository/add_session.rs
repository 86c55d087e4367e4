use {
    super::Repository,
    crate::session::entities,
};

impl Repository {
    pub async fn add_session(&self, session: entities::Session) {
        self.in_memory_store
            .sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }
}
