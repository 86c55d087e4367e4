use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

mod add_session;
mod get_session;
mod remove_expired_sessions;
mod remove_session;
mod remove_sessions_for_user;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub sessions: RwLock<HashMap<entities::SessionToken, entities::Session>>,
}

#[derive(Debug, Default)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
