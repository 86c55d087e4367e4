use crate::{
    auction,
    profile,
    session,
};

/// The one-per-process container of the services. Every request handler and
/// background worker reaches shared state through an `Arc` of this.
pub struct Store {
    pub auction_service: auction::service::Service,
    pub profile_service: profile::service::Service,
    pub session_service: session::service::Service,
}
