use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Commits an accepted bid. The caller must hold the auction's
    /// `AuctionLock`; on top of that, the status re-check happens under the
    /// same write guard as the mutation, so a concurrently committing close
    /// can never interleave between validation and commit.
    pub async fn apply_bid(
        &self,
        auction_id: &entities::AuctionId,
        bid: entities::PlacedBid,
    ) -> Result<entities::Auction, RestError> {
        let mut auctions = self.in_memory_store.auctions.write().await;
        let auction = auctions
            .get_mut(auction_id)
            .ok_or(RestError::AuctionNotFound)?;
        if auction.status != entities::AuctionStatus::Open || bid.placed_at >= auction.close_time {
            return Err(RestError::AuctionClosed);
        }
        auction.highest_bid = Some(bid.clone());
        auction.bids.push(bid);
        Ok(auction.clone())
    }
}
