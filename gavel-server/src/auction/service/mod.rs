use {
    super::repository::Repository,
    crate::config,
    std::sync::Arc,
};

pub mod add_auction;
pub mod close_auction;
pub mod conclude_auctions;
pub mod get_active_auctions;
pub mod get_auction_by_id;
pub mod handle_bid;
pub mod verification;
pub mod workers;

/// Whether a first bid may equal the starting price or must exceed it. The
/// source material is ambiguous on this, so it is an explicit server policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstBidRule {
    AtLeastStart,
    AboveStart,
}

impl From<config::FirstBidRule> for FirstBidRule {
    fn from(rule: config::FirstBidRule) -> Self {
        match rule {
            config::FirstBidRule::AtLeastStart => FirstBidRule::AtLeastStart,
            config::FirstBidRule::AboveStart => FirstBidRule::AboveStart,
        }
    }
}

pub struct Config {
    pub first_bid_rule:        FirstBidRule,
    /// Applied to auctions created without an explicit increment.
    pub default_min_increment: crate::kernel::entities::Amount,
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
