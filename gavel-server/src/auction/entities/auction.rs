use {
    super::bid::PlacedBid,
    crate::kernel::entities::{
        Amount,
        Username,
    },
    std::sync::Arc,
    time::OffsetDateTime,
    tokio::sync::Mutex,
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type AuctionLock = Arc<Mutex<()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Open,
    Closed,
}

#[derive(Clone, Debug)]
pub struct Auction {
    pub id:             AuctionId,
    pub title:          String,
    pub description:    String,
    pub seller:         Username,
    pub starting_price: Amount,
    pub min_increment:  Amount,
    pub close_time:     OffsetDateTime,
    pub created_at:     OffsetDateTime,
    pub status:         AuctionStatus,
    pub highest_bid:    Option<PlacedBid>,
    pub winner:         Option<Username>,

    pub bids: Vec<PlacedBid>,
}

impl Auction {
    /// Whether bids are accepted at `now`. A pure function of the stored
    /// state and the clock, so callers never depend on a timer having run.
    pub fn is_open(&self, now: OffsetDateTime) -> bool {
        self.status == AuctionStatus::Open && now < self.close_time
    }

    /// Close time reached but the stored status not yet transitioned.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.status == AuctionStatus::Open && now >= self.close_time
    }

    /// Commits the terminal `Closed` transition and records the winner.
    pub fn close(&mut self) {
        self.status = AuctionStatus::Closed;
        self.winner = self.highest_bid.as_ref().map(|bid| bid.bidder.clone());
    }
}
