use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::{
        Mutex,
        RwLock,
    },
};

mod add_auction;
mod apply_bid;
mod conclude_auction;
mod get_auction_by_id;
mod get_auctions;
mod get_or_create_auction_lock;
mod remove_auction_lock;

/// The `auctions` map guards structural access (insert, lookup, list) and is
/// only ever held briefly. `auction_lock` hands out one `AuctionLock` per
/// auction id; a bid holds that lock across its whole validate-then-commit
/// sequence, so bids on the same auction serialize while bids on different
/// auctions proceed independently.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auctions:     RwLock<HashMap<entities::AuctionId, entities::Auction>>,
    pub auction_lock: Mutex<HashMap<entities::AuctionId, entities::AuctionLock>>,
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
