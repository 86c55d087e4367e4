use {
    super::Service,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Service {
    /// Snapshots of all auctions still accepting bids, evaluated against the
    /// clock at call time. Auctions observed past their close time get their
    /// `Closed` transition committed on the way.
    pub async fn get_active_auctions(&self) -> Vec<entities::Auction> {
        let now = OffsetDateTime::now_utc();
        let mut active = Vec::new();
        for auction in self.repo.get_auctions().await {
            if auction.is_expired(now) {
                self.repo.conclude_auction(&auction.id).await;
                continue;
            }
            if auction.is_open(now) {
                active.push(auction);
            }
        }
        active.sort_by_key(|auction| auction.created_at);
        active
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::auction::{
            entities,
            service::{
                tests::{
                    auction_closing_in,
                    new_service,
                },
                FirstBidRule,
            },
        },
        time::Duration,
    };

    #[tokio::test]
    async fn test_only_open_auctions_are_listed() {
        let service = new_service(FirstBidRule::AboveStart);
        let open = auction_closing_in("alice", 100, 10, Duration::hours(1));
        let expired = auction_closing_in("bob", 200, 10, Duration::seconds(-5));
        let mut closed = auction_closing_in("carol", 300, 10, Duration::hours(1));
        closed.close();
        service.repo.add_auction(open.clone()).await;
        service.repo.add_auction(expired.clone()).await;
        service.repo.add_auction(closed).await;

        let active = service.get_active_auctions().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, open.id);

        // Listing committed the close of the expired auction.
        let stored = service.repo.get_auction_by_id(&expired.id).await.unwrap();
        assert_eq!(stored.status, entities::AuctionStatus::Closed);
    }

    #[tokio::test]
    async fn test_listing_is_ordered_by_creation_time() {
        let service = new_service(FirstBidRule::AboveStart);
        let mut first = auction_closing_in("alice", 100, 10, Duration::hours(1));
        let mut second = auction_closing_in("bob", 100, 10, Duration::hours(1));
        first.created_at = first.created_at - Duration::minutes(10);
        second.created_at = second.created_at - Duration::minutes(5);
        service.repo.add_auction(second.clone()).await;
        service.repo.add_auction(first.clone()).await;

        let active = service.get_active_auctions().await;
        assert_eq!(
            active.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }
}
