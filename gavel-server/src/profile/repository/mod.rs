use {
    super::entities,
    crate::kernel::entities::Username,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

mod add_profile;
mod get_profile;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub profiles: RwLock<HashMap<Username, entities::Profile>>,
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
