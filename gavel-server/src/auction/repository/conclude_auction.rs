use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Commits the `Closed` transition. Idempotent: a second caller finds the
    /// auction already closed and the stored state unchanged.
    pub async fn conclude_auction(
        &self,
        auction_id: &entities::AuctionId,
    ) -> Option<entities::Auction> {
        let mut auctions = self.in_memory_store.auctions.write().await;
        let auction = auctions.get_mut(auction_id)?;
        if auction.status == entities::AuctionStatus::Open {
            auction.close();
        }
        Some(auction.clone())
    }
}
