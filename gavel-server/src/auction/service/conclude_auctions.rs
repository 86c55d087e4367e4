use {
    super::Service,
    crate::auction::entities,
    futures::future::join_all,
    time::OffsetDateTime,
};

impl Service {
    /// Housekeeping sweep: commits the `Closed` transition for every open
    /// auction past its close time and retires its per-auction lock. Lazy
    /// closing on access keeps the observable state correct without this.
    #[tracing::instrument(skip_all)]
    pub async fn conclude_auctions(&self) {
        let now = OffsetDateTime::now_utc();
        let expired: Vec<entities::Auction> = self
            .repo
            .get_auctions()
            .await
            .into_iter()
            .filter(|auction| auction.is_expired(now))
            .collect();
        join_all(expired.iter().map(|auction| async {
            if let Some(concluded) = self.repo.conclude_auction(&auction.id).await {
                tracing::info!(
                    auction_id = concluded.id.to_string(),
                    winner = concluded.winner.as_deref().unwrap_or("none"),
                    "Concluded auction past its close time"
                );
            }
            self.repo.remove_auction_lock(&auction.id).await;
        }))
        .await;
    }
}
