use {
    super::Repository,
    crate::session::entities,
};

impl Repository {
    pub async fn get_session(&self, token: &str) -> Option<entities::Session> {
        self.in_memory_store
            .sessions
            .read()
            .await
            .get(token)
            .cloned()
    }
}
