use {
    super::{
        get_auction_by_id::GetAuctionByIdInput,
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::{
            Amount,
            Username,
        },
    },
    time::OffsetDateTime,
};

pub struct HandleBidInput {
    pub auction_id: entities::AuctionId,
    pub bidder:     Username,
    pub amount:     Amount,
}

impl Service {
    /// Places a bid. The acceptance checks run twice: once on a plain
    /// snapshot so hopeless bids never contend for the lock, and again under
    /// this auction's `AuctionLock` against the latest state, which is the
    /// check that counts. Bids on other auctions never wait here.
    #[tracing::instrument(skip_all, fields(auction_id, bidder, amount = input.amount), err(level = tracing::Level::TRACE))]
    pub async fn handle_bid(&self, input: HandleBidInput) -> Result<entities::Auction, RestError> {
        tracing::Span::current().record("auction_id", input.auction_id.to_string());
        tracing::Span::current().record("bidder", input.bidder.as_str());

        let snapshot = self
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: input.auction_id,
            })
            .await?;
        self.verify_bid(
            &snapshot,
            &input.bidder,
            input.amount,
            OffsetDateTime::now_utc(),
        )?;

        let auction_lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let updated = {
            let _guard = auction_lock.lock().await;
            // State may have advanced while this bid waited on the lock.
            let latest = self
                .get_auction_by_id(GetAuctionByIdInput {
                    auction_id: input.auction_id,
                })
                .await?;
            let now = OffsetDateTime::now_utc();
            self.verify_bid(&latest, &input.bidder, input.amount, now)?;
            self.repo
                .apply_bid(
                    &input.auction_id,
                    entities::PlacedBid {
                        amount:    input.amount,
                        bidder:    input.bidder,
                        placed_at: now,
                    },
                )
                .await?
        };
        tracing::info!("Bid accepted");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::HandleBidInput,
        crate::{
            api::RestError,
            auction::{
                entities,
                service::{
                    close_auction::CloseAuctionInput,
                    tests::{
                        auction_closing_in,
                        new_service,
                    },
                    FirstBidRule,
                    Service,
                },
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
        uuid::Uuid,
    };

    fn bid(auction_id: entities::AuctionId, bidder: &str, amount: u64) -> HandleBidInput {
        HandleBidInput {
            auction_id,
            bidder: bidder.to_string(),
            amount,
        }
    }

    async fn seeded_service(rule: FirstBidRule) -> (Service, entities::Auction) {
        let service = new_service(rule);
        let auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        service.repo.add_auction(auction.clone()).await;
        (service, auction)
    }

    #[tokio::test]
    async fn test_bid_scenario_from_start_to_outbid() {
        let (service, auction) = seeded_service(FirstBidRule::AboveStart).await;

        // Equal to the starting price: rejected under AboveStart.
        let too_low = service.handle_bid(bid(auction.id, "bob", 100)).await;
        assert!(matches!(
            too_low,
            Err(RestError::BidTooLow { minimum: 101 })
        ));

        let updated = service
            .handle_bid(bid(auction.id, "bob", 110))
            .await
            .expect("110 should be accepted");
        assert_eq!(
            updated.highest_bid.as_ref().map(|b| (b.amount, b.bidder.as_str())),
            Some((110, "bob"))
        );

        // Below 110 + 10.
        let outbid_too_low = service.handle_bid(bid(auction.id, "carol", 115)).await;
        assert!(matches!(
            outbid_too_low,
            Err(RestError::BidTooLow { minimum: 120 })
        ));

        let updated = service
            .handle_bid(bid(auction.id, "carol", 120))
            .await
            .expect("120 should be accepted");
        assert_eq!(
            updated.highest_bid.as_ref().map(|b| (b.amount, b.bidder.as_str())),
            Some((120, "carol"))
        );
        assert_eq!(
            updated.bids.iter().map(|b| b.amount).collect::<Vec<_>>(),
            vec![110, 120]
        );
    }

    #[tokio::test]
    async fn test_first_bid_at_starting_price_accepted_under_at_least_start() {
        let (service, auction) = seeded_service(FirstBidRule::AtLeastStart).await;
        let updated = service
            .handle_bid(bid(auction.id, "bob", 100))
            .await
            .expect("100 should be accepted under AtLeastStart");
        assert_eq!(updated.highest_bid.unwrap().amount, 100);
    }

    #[tokio::test]
    async fn test_seller_cannot_bid_on_own_auction() {
        let (service, auction) = seeded_service(FirstBidRule::AboveStart).await;
        let result = service.handle_bid(bid(auction.id, "alice", 200)).await;
        assert!(matches!(result, Err(RestError::SelfBid)));
    }

    #[tokio::test]
    async fn test_bid_on_unknown_auction_not_found() {
        let service = new_service(FirstBidRule::AboveStart);
        let result = service.handle_bid(bid(Uuid::new_v4(), "bob", 200)).await;
        assert!(matches!(result, Err(RestError::AuctionNotFound)));
    }

    #[tokio::test]
    async fn test_bids_after_close_time_rejected_regardless_of_amount() {
        let service = new_service(FirstBidRule::AboveStart);
        let auction = auction_closing_in("alice", 100, 10, Duration::seconds(-5));
        service.repo.add_auction(auction.clone()).await;

        let result = service.handle_bid(bid(auction.id, "bob", 1_000_000)).await;
        assert!(matches!(result, Err(RestError::AuctionClosed)));

        // Rejected bids leave no trace.
        let stored = service.repo.get_auction_by_id(&auction.id).await.unwrap();
        assert!(stored.bids.is_empty());
        assert!(stored.highest_bid.is_none());
    }

    #[tokio::test]
    async fn test_bids_on_explicitly_closed_auction_rejected() {
        let (service, auction) = seeded_service(FirstBidRule::AboveStart).await;
        service
            .close_auction(CloseAuctionInput {
                auction_id: auction.id,
                caller:     "alice".to_string(),
            })
            .await
            .expect("seller close should succeed");
        let result = service.handle_bid(bid(auction.id, "bob", 200)).await;
        assert!(matches!(result, Err(RestError::AuctionClosed)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_two_racing_bids_commit_exactly_one_order() {
        let service = new_service(FirstBidRule::AboveStart);
        let mut auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        auction.highest_bid = Some(entities::PlacedBid {
            amount:    100,
            bidder:    "bob".to_string(),
            placed_at: OffsetDateTime::now_utc(),
        });
        service.repo.add_auction(auction.clone()).await;

        let first = {
            let service = service.clone();
            let id = auction.id;
            tokio::spawn(async move { service.handle_bid(bid(id, "carol", 150)).await })
        };
        let second = {
            let service = service.clone();
            let id = auction.id;
            tokio::spawn(async move { service.handle_bid(bid(id, "dave", 160)).await })
        };
        let results = [first.await.unwrap(), second.await.unwrap()];

        let stored = service.repo.get_auction_by_id(&auction.id).await.unwrap();
        assert_eq!(stored.highest_bid.as_ref().unwrap().amount, 160);

        // Either 160 landed first and 150 lost, or 150 then 160 both landed.
        let amounts: Vec<u64> = stored.bids.iter().map(|b| b.amount).collect();
        assert!(amounts == vec![160] || amounts == vec![150, 160]);
        let accepted = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(accepted, amounts.len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_many_racing_bids_serialize_per_auction() {
        let service = new_service(FirstBidRule::AboveStart);
        let auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        service.repo.add_auction(auction.clone()).await;

        let mut handles = Vec::new();
        for i in 0..32u64 {
            let service = service.clone();
            let id = auction.id;
            let bidder = format!("bidder-{i}");
            let amount = 101 + i * 3;
            handles.push(tokio::spawn(async move {
                service
                    .handle_bid(HandleBidInput {
                        auction_id: id,
                        bidder,
                        amount,
                    })
                    .await
            }));
        }
        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(RestError::BidTooLow { .. }) => {}
                Err(other) => panic!("unexpected bid failure: {:?}", other),
            }
        }

        let stored = service.repo.get_auction_by_id(&auction.id).await.unwrap();
        let amounts: Vec<u64> = stored.bids.iter().map(|b| b.amount).collect();
        assert_eq!(accepted, amounts.len());
        assert!(!amounts.is_empty());

        // Commit order respects the increment rule bid over bid, and the
        // stored highest is the last committed amount.
        assert!(amounts[0] >= 101);
        for pair in amounts.windows(2) {
            assert!(pair[1] >= pair[0] + 10);
        }
        assert_eq!(
            stored.highest_bid.unwrap().amount,
            *amounts.last().unwrap()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_bids_on_different_auctions_do_not_serialize_against_each_other() {
        let service = new_service(FirstBidRule::AboveStart);
        let first = auction_closing_in("alice", 100, 10, Duration::hours(1));
        let second = auction_closing_in("bob", 100, 10, Duration::hours(1));
        service.repo.add_auction(first.clone()).await;
        service.repo.add_auction(second.clone()).await;

        // Hold the first auction's lock while bidding on the second. If the
        // second bid needed the same lock this would deadlock the test.
        let held = service.repo.get_or_create_auction_lock(first.id).await;
        let _guard = held.lock().await;
        service
            .handle_bid(bid(second.id, "carol", 150))
            .await
            .expect("bid on an unrelated auction should not block");
    }
}
