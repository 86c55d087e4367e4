use {
    crate::{
        AccessLevel,
        Amount,
        Routable,
        Username,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Open,
    Closed,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug, PartialEq)]
pub struct PlacedBid {
    /// The bid amount in minor currency units.
    #[schema(example = 110)]
    pub amount:    Amount,
    /// The username that placed the bid.
    #[schema(example = "bob")]
    pub bidder:    Username,
    /// When the bid was accepted.
    #[schema(example = "2026-08-06T17:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub placed_at: OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse)]
pub struct Auction {
    /// The id of the auction.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:             AuctionId,
    /// Short title of the item on sale.
    #[schema(example = "Victorian writing desk")]
    pub title:          String,
    /// Free-form description of the item.
    #[schema(example = "Mahogany, circa 1880, one drawer missing")]
    pub description:    String,
    /// The username of the seller.
    #[schema(example = "alice")]
    pub seller:         Username,
    /// The starting price in minor currency units.
    #[schema(example = 100)]
    pub starting_price: Amount,
    /// The minimum amount a new bid must exceed the current highest bid by.
    #[schema(example = 10)]
    pub min_increment:  Amount,
    /// When the auction stops accepting bids.
    #[schema(example = "2026-08-06T18:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub close_time:     OffsetDateTime,
    /// When the auction was created.
    #[schema(example = "2026-08-06T17:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at:     OffsetDateTime,
    pub status:         AuctionStatus,
    /// The current highest accepted bid, absent until the first bid lands.
    pub highest_bid:    Option<PlacedBid>,
    /// The winning bidder, recorded once the auction closes.
    #[schema(example = "carol")]
    pub winner:         Option<Username>,
    /// All accepted bids in commit order.
    pub bids:           Vec<PlacedBid>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse)]
pub struct Auctions {
    pub items: Vec<Auction>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug)]
pub struct CreateAuction {
    /// Short title of the item on sale.
    #[schema(example = "Victorian writing desk")]
    pub title:          String,
    /// Free-form description of the item.
    #[schema(example = "Mahogany, circa 1880, one drawer missing")]
    #[serde(default)]
    pub description:    String,
    /// The starting price in minor currency units. Must be positive.
    #[schema(example = 100)]
    pub starting_price: Amount,
    /// The minimum bid increment in minor currency units. Must be positive.
    /// Falls back to the server's configured default when omitted.
    #[schema(example = 10)]
    #[serde(default)]
    pub min_increment:  Option<Amount>,
    /// When the auction stops accepting bids. Must be in the future.
    #[schema(example = "2026-08-06T18:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub close_time:     OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug)]
pub struct PlaceBid {
    /// The id of the auction to bid on.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
    /// The bid amount in minor currency units.
    #[schema(example = 110)]
    pub amount:     Amount,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse)]
pub struct BidResult {
    #[schema(example = "OK")]
    pub status:  String,
    /// The auction state right after the bid was accepted.
    pub auction: Auction,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, ToResponse, Debug)]
pub struct CloseAuction {
    /// The id of the auction to close. Only the seller may close it early.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
}

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct GetAuctionParams {
    /// The id of the auction to fetch.
    #[param(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id: AuctionId,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "auctions")]
    GetAuctions,
    #[strum(serialize = "auction")]
    GetAuction,
    #[strum(serialize = "create_auction")]
    PostCreateAuction,
    #[strum(serialize = "bid")]
    PostBid,
    #[strum(serialize = "close_auction")]
    PostCloseAuction,
}

impl Routable for Route {
    fn properties(&self) -> crate::RouteProperties {
        let full_path = self.as_ref().to_string();
        match self {
            Route::GetAuctions => crate::RouteProperties {
                access_level: AccessLevel::Public,
                method: http::Method::GET,
                full_path,
            },
            Route::GetAuction => crate::RouteProperties {
                access_level: AccessLevel::Public,
                method: http::Method::GET,
                full_path,
            },
            Route::PostCreateAuction => crate::RouteProperties {
                access_level: AccessLevel::LoggedIn,
                method: http::Method::POST,
                full_path,
            },
            Route::PostBid => crate::RouteProperties {
                access_level: AccessLevel::LoggedIn,
                method: http::Method::POST,
                full_path,
            },
            Route::PostCloseAuction => crate::RouteProperties {
                access_level: AccessLevel::LoggedIn,
                method: http::Method::POST,
                full_path,
            },
        }
    }
}
