use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_or_create_auction_lock(
        &self,
        auction_id: entities::AuctionId,
    ) -> entities::AuctionLock {
        self.in_memory_store
            .auction_lock
            .lock()
            .await
            .entry(auction_id)
            .or_default()
            .clone()
    }
}
