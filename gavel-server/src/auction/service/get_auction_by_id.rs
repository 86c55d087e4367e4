use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
    time::OffsetDateTime,
};

pub struct GetAuctionByIdInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Fetches a snapshot of the auction. The first access past the close
    /// time commits the lazy `Closed` transition before returning.
    pub async fn get_auction_by_id(
        &self,
        input: GetAuctionByIdInput,
    ) -> Result<entities::Auction, RestError> {
        let auction = self
            .repo
            .get_auction_by_id(&input.auction_id)
            .await
            .ok_or(RestError::AuctionNotFound)?;
        if auction.is_expired(OffsetDateTime::now_utc()) {
            return self
                .repo
                .conclude_auction(&input.auction_id)
                .await
                .ok_or(RestError::AuctionNotFound);
        }
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::GetAuctionByIdInput,
        crate::{
            api::RestError,
            auction::{
                entities,
                service::{
                    tests::{
                        auction_closing_in,
                        new_service,
                    },
                    FirstBidRule,
                },
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_unknown_auction_not_found() {
        let service = new_service(FirstBidRule::AboveStart);
        let result = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(RestError::AuctionNotFound)));
    }

    #[tokio::test]
    async fn test_snapshot_is_a_defensive_copy() {
        let service = new_service(FirstBidRule::AboveStart);
        let auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        service.repo.add_auction(auction.clone()).await;

        let mut snapshot = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        snapshot.title = "scribbled over".to_string();
        snapshot.bids.push(entities::PlacedBid {
            amount:    999,
            bidder:    "mallory".to_string(),
            placed_at: OffsetDateTime::now_utc(),
        });

        let stored = service.repo.get_auction_by_id(&auction.id).await.unwrap();
        assert_eq!(stored.title, "test auction");
        assert!(stored.bids.is_empty());
    }

    #[tokio::test]
    async fn test_access_past_close_time_commits_the_close() {
        let service = new_service(FirstBidRule::AboveStart);
        let mut auction = auction_closing_in("alice", 100, 10, Duration::seconds(-5));
        auction.highest_bid = Some(entities::PlacedBid {
            amount:    150,
            bidder:    "bob".to_string(),
            placed_at: auction.created_at,
        });
        service.repo.add_auction(auction.clone()).await;

        let observed = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(observed.status, entities::AuctionStatus::Closed);
        assert_eq!(observed.winner.as_deref(), Some("bob"));

        // The transition was committed, not just reported.
        let stored = service.repo.get_auction_by_id(&auction.id).await.unwrap();
        assert_eq!(stored.status, entities::AuctionStatus::Closed);
    }
}
