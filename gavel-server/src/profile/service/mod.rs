use {
    super::repository::Repository,
    std::sync::Arc,
};

pub mod create_profile;
pub mod verify_password;

pub struct Config {
    pub minimum_password_length: usize,
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
