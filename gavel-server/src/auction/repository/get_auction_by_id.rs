use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Returns a snapshot, never a live reference into the store.
    pub async fn get_auction_by_id(
        &self,
        auction_id: &entities::AuctionId,
    ) -> Option<entities::Auction> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .get(auction_id)
            .cloned()
    }
}
