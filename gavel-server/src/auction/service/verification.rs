use {
    super::{
        FirstBidRule,
        Service,
    },
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::Amount,
    },
    time::OffsetDateTime,
};

impl Service {
    /// The smallest amount the next bid must reach, given the latest state:
    /// `max(starting price, highest + increment)`, where the starting price
    /// is bumped by one under `AboveStart` while no bid has landed yet.
    pub(super) fn minimum_acceptable_bid(&self, auction: &entities::Auction) -> Amount {
        match &auction.highest_bid {
            Some(highest) => std::cmp::max(
                auction.starting_price,
                highest.amount.saturating_add(auction.min_increment),
            ),
            None => match self.config.first_bid_rule {
                FirstBidRule::AtLeastStart => auction.starting_price,
                FirstBidRule::AboveStart => auction.starting_price.saturating_add(1),
            },
        }
    }

    /// Runs the acceptance checks against the given auction state. Callers
    /// re-run this under the auction's lock right before committing.
    pub(super) fn verify_bid(
        &self,
        auction: &entities::Auction,
        bidder: &str,
        amount: Amount,
        now: OffsetDateTime,
    ) -> Result<(), RestError> {
        if !auction.is_open(now) {
            return Err(RestError::AuctionClosed);
        }
        if auction.seller == bidder {
            return Err(RestError::SelfBid);
        }
        let minimum = self.minimum_acceptable_bid(auction);
        if amount < minimum {
            return Err(RestError::BidTooLow { minimum });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
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
    };

    #[test]
    fn test_first_bid_threshold_follows_configured_rule() {
        let auction = auction_closing_in("alice", 100, 10, Duration::hours(1));

        let above = new_service(FirstBidRule::AboveStart);
        assert_eq!(above.minimum_acceptable_bid(&auction), 101);

        let at_least = new_service(FirstBidRule::AtLeastStart);
        assert_eq!(at_least.minimum_acceptable_bid(&auction), 100);
    }

    #[test]
    fn test_threshold_after_a_bid_is_highest_plus_increment() {
        let mut auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        auction.highest_bid = Some(entities::PlacedBid {
            amount:    110,
            bidder:    "bob".to_string(),
            placed_at: OffsetDateTime::now_utc(),
        });

        let service = new_service(FirstBidRule::AboveStart);
        assert_eq!(service.minimum_acceptable_bid(&auction), 120);
    }

    #[test]
    fn test_verify_rejects_seller_and_closed_and_low_bids() {
        let service = new_service(FirstBidRule::AboveStart);
        let now = OffsetDateTime::now_utc();

        let auction = auction_closing_in("alice", 100, 10, Duration::hours(1));
        assert!(matches!(
            service.verify_bid(&auction, "alice", 200, now),
            Err(RestError::SelfBid)
        ));
        assert!(matches!(
            service.verify_bid(&auction, "bob", 100, now),
            Err(RestError::BidTooLow { minimum: 101 })
        ));
        assert!(service.verify_bid(&auction, "bob", 110, now).is_ok());

        let past = auction_closing_in("alice", 100, 10, Duration::hours(-1));
        assert!(matches!(
            service.verify_bid(&past, "bob", 200, now),
            Err(RestError::AuctionClosed)
        ));

        let mut closed = auction_closing_in("alice", 100, 10, Duration::hours(1));
        closed.close();
        assert!(matches!(
            service.verify_bid(&closed, "bob", 200, now),
            Err(RestError::AuctionClosed)
        ));
    }
}
