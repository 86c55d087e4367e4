use {
    super::{
        Auth,
        RestError,
    },
    crate::{
        auction::{
            entities,
            service::{
                add_auction::AddAuctionInput,
                close_auction::CloseAuctionInput,
                get_auction_by_id::GetAuctionByIdInput,
                handle_bid::HandleBidInput,
            },
        },
        state::Store,
    },
    axum::{
        extract::{
            Query,
            State,
        },
        Json,
    },
    gavel_api_types::{
        auction::{
            Auction,
            AuctionStatus,
            Auctions,
            BidResult,
            CloseAuction,
            CreateAuction,
            GetAuctionParams,
            PlaceBid,
            PlacedBid,
        },
        ErrorBodyResponse,
    },
    std::sync::Arc,
};

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Open => AuctionStatus::Open,
            entities::AuctionStatus::Closed => AuctionStatus::Closed,
        }
    }
}

impl From<entities::PlacedBid> for PlacedBid {
    fn from(bid: entities::PlacedBid) -> Self {
        PlacedBid {
            amount:    bid.amount,
            bidder:    bid.bidder,
            placed_at: bid.placed_at,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Auction {
            id:             auction.id,
            title:          auction.title,
            description:    auction.description,
            seller:         auction.seller,
            starting_price: auction.starting_price,
            min_increment:  auction.min_increment,
            close_time:     auction.close_time,
            created_at:     auction.created_at,
            status:         auction.status.into(),
            highest_bid:    auction.highest_bid.map(Into::into),
            winner:         auction.winner,
            bids:           auction.bids.into_iter().map(Into::into).collect(),
        }
    }
}

/// List all auctions currently accepting bids.
#[utoipa::path(get, path = "/auctions", responses(
(status = 200, description = "Snapshots of all open auctions", body = Auctions),
),)]
pub async fn get_auctions(State(store): State<Arc<Store>>) -> Result<Json<Auctions>, RestError> {
    let auctions = store.auction_service.get_active_auctions().await;
    Ok(Json(Auctions {
        items: auctions.into_iter().map(Into::into).collect(),
    }))
}

/// Fetch one auction by id, open or closed.
#[utoipa::path(get, path = "/auction", params(GetAuctionParams), responses(
(status = 200, description = "A snapshot of the auction", body = Auction),
(status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_auction(
    State(store): State<Arc<Store>>,
    Query(params): Query<GetAuctionParams>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput {
            auction_id: params.id,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// Create a new auction owned by the logged-in user.
#[utoipa::path(post, path = "/create_auction",
security(
    ("bearerAuth" = []),
), request_body = CreateAuction, responses(
(status = 200, description = "The created auction", body = Auction),
(status = 400, response = ErrorBodyResponse),
(status = 401, description = "Session token is invalid or expired", body = ErrorBodyResponse),
),)]
pub async fn post_create_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Json(params): Json<CreateAuction>,
) -> Result<Json<Auction>, RestError> {
    match auth {
        Auth::Authorized(_, username) => {
            let auction = store
                .auction_service
                .add_auction(AddAuctionInput {
                    seller:         username,
                    title:          params.title,
                    description:    params.description,
                    starting_price: params.starting_price,
                    min_increment:  params.min_increment,
                    close_time:     params.close_time,
                })
                .await?;
            Ok(Json(auction.into()))
        }
        Auth::Unauthorized => Err(RestError::InvalidSession),
    }
}

/// Place a bid as the logged-in user.
///
/// The bid must clear `max(starting price, highest bid + increment)`;
/// concurrent bids on one auction are committed in a single serial order.
#[utoipa::path(post, path = "/bid",
security(
    ("bearerAuth" = []),
), request_body = PlaceBid, responses(
(status = 200, description = "Bid was placed successfully", body = BidResult),
(status = 401, description = "Session token is invalid or expired", body = ErrorBodyResponse),
(status = 404, description = "Auction was not found", body = ErrorBodyResponse),
(status = 409, description = "Bid too low or bidding on own auction", body = ErrorBodyResponse),
(status = 410, description = "Auction is closed", body = ErrorBodyResponse),
),)]
pub async fn post_bid(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Json(params): Json<PlaceBid>,
) -> Result<Json<BidResult>, RestError> {
    match auth {
        Auth::Authorized(_, username) => {
            let auction = store
                .auction_service
                .handle_bid(HandleBidInput {
                    auction_id: params.auction_id,
                    bidder:     username,
                    amount:     params.amount,
                })
                .await?;
            Ok(Json(BidResult {
                status:  "OK".to_string(),
                auction: auction.into(),
            }))
        }
        Auth::Unauthorized => Err(RestError::InvalidSession),
    }
}

/// Close an auction ahead of its deadline.
///
/// Only the seller may close their own auction. Closing is terminal.
#[utoipa::path(post, path = "/close_auction",
security(
    ("bearerAuth" = []),
), request_body = CloseAuction, responses(
(status = 200, description = "The closed auction", body = Auction),
(status = 401, description = "Session token is invalid or expired", body = ErrorBodyResponse),
(status = 403, description = "Only the seller may close the auction", body = ErrorBodyResponse),
(status = 404, description = "Auction was not found", body = ErrorBodyResponse),
(status = 410, description = "Auction is already closed", body = ErrorBodyResponse),
),)]
pub async fn post_close_auction(
    auth: Auth,
    State(store): State<Arc<Store>>,
    Json(params): Json<CloseAuction>,
) -> Result<Json<Auction>, RestError> {
    match auth {
        Auth::Authorized(_, username) => {
            let auction = store
                .auction_service
                .close_auction(CloseAuctionInput {
                    auction_id: params.auction_id,
                    caller:     username,
                })
                .await?;
            Ok(Json(auction.into()))
        }
        Auth::Unauthorized => Err(RestError::InvalidSession),
    }
}
