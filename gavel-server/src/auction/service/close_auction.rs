use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::Username,
    },
    time::OffsetDateTime,
};

pub struct CloseAuctionInput {
    pub auction_id: entities::AuctionId,
    pub caller:     Username,
}

impl Service {
    /// Explicit close ahead of the deadline. Only the seller may do this;
    /// the transition is the same terminal one the clock would commit.
    #[tracing::instrument(skip_all, fields(auction_id, caller))]
    pub async fn close_auction(
        &self,
        input: CloseAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        tracing::Span::current().record("auction_id", input.auction_id.to_string());
        tracing::Span::current().record("caller", input.caller.as_str());
        let auction = self
            .repo
            .get_auction_by_id(&input.auction_id)
            .await
            .ok_or(RestError::AuctionNotFound)?;
        if auction.seller != input.caller {
            return Err(RestError::Unauthorized);
        }
        if !auction.is_open(OffsetDateTime::now_utc()) {
            // Commit the overdue transition before reporting the conflict.
            self.repo.conclude_auction(&input.auction_id).await;
            return Err(RestError::AuctionClosed);
        }
        let closed = self
            .repo
            .conclude_auction(&input.auction_id)
            .await
            .ok_or(RestError::AuctionNotFound)?;
        tracing::info!("Auction closed by seller");
        Ok(closed)
    }
}
