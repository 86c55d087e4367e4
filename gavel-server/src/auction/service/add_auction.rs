use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
        kernel::entities::{
            Amount,
            Username,
        },
    },
    time::OffsetDateTime,
    uuid::Uuid,
};

pub struct AddAuctionInput {
    pub seller:         Username,
    pub title:          String,
    pub description:    String,
    pub starting_price: Amount,
    /// Falls back to the configured default increment when absent.
    pub min_increment:  Option<Amount>,
    pub close_time:     OffsetDateTime,
}

impl Service {
    #[tracing::instrument(skip_all, fields(auction_id, seller))]
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        tracing::Span::current().record("seller", input.seller.as_str());
        let now = OffsetDateTime::now_utc();
        if input.title.trim().is_empty() {
            return Err(RestError::BadParameters(
                "title must not be empty".to_string(),
            ));
        }
        if input.starting_price == 0 {
            return Err(RestError::BadParameters(
                "starting price must be positive".to_string(),
            ));
        }
        let min_increment = input
            .min_increment
            .unwrap_or(self.config.default_min_increment);
        if min_increment == 0 {
            return Err(RestError::BadParameters(
                "minimum increment must be positive".to_string(),
            ));
        }
        if input.close_time <= now {
            return Err(RestError::BadParameters(
                "close time must be in the future".to_string(),
            ));
        }

        let auction = entities::Auction {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            seller: input.seller,
            starting_price: input.starting_price,
            min_increment,
            close_time: input.close_time,
            created_at: now,
            status: entities::AuctionStatus::Open,
            highest_bid: None,
            winner: None,
            bids: Vec::new(),
        };
        tracing::Span::current().record("auction_id", auction.id.to_string());
        self.repo.add_auction(auction.clone()).await;
        tracing::info!("Auction created");
        Ok(auction)
    }
}
