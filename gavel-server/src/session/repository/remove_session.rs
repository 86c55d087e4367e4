use super::Repository;

impl Repository {
    pub async fn remove_session(&self, token: &str) {
        self.in_memory_store.sessions.write().await.remove(token);
    }
}
