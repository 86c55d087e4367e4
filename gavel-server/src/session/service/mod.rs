use {
    super::repository::Repository,
    std::{
        sync::Arc,
        time::Duration,
    },
};

pub mod create_session;
pub mod expire_sessions;
pub mod resolve_session;
pub mod revoke_session;
pub mod workers;

pub struct Config {
    pub session_ttl:             Duration,
    /// When set, logging in revokes the user's other sessions.
    pub single_session_per_user: bool,
}

pub struct ServiceInner {
    config: Config,
    repo:   Arc<Repository>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new()),
        }))
    }
}
