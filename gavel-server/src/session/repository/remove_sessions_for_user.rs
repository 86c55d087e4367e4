use super::Repository;

impl Repository {
    pub async fn remove_sessions_for_user(&self, username: &str) {
        self.in_memory_store
            .sessions
            .write()
            .await
            .retain(|_, session| session.username != username);
    }
}
