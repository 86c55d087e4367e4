use {
    super::Repository,
    crate::profile::entities,
};

impl Repository {
    pub async fn get_profile(&self, username: &str) -> Option<entities::Profile> {
        self.in_memory_store
            .profiles
            .read()
            .await
            .get(username)
            .cloned()
    }
}
