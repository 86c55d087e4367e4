use {
    crate::kernel::entities::{
        Amount,
        Username,
    },
    time::OffsetDateTime,
};

/// An accepted bid event. Rejected bid attempts leave no trace.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBid {
    pub amount:    Amount,
    pub bidder:    Username,
    pub placed_at: OffsetDateTime,
}
