use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn add_auction(&self, auction: entities::Auction) {
        self.in_memory_store
            .auctions
            .write()
            .await
            .insert(auction.id, auction);
    }
}
