use {
    crate::{
        config::RunOptions,
        kernel::entities::{
            Amount,
            Username,
        },
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        session::{
            entities::SessionToken,
            service::resolve_session::ResolveSessionInput,
        },
        state::Store,
    },
    anyhow::Result,
    axum::{
        async_trait,
        extract::{
            self,
            FromRequestParts,
        },
        http::{
            request::Parts,
            Method,
            StatusCode,
        },
        middleware,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            post,
        },
        Json,
        Router,
    },
    axum_extra::{
        headers::{
            authorization::Bearer,
            Authorization,
        },
        TypedHeader,
    },
    clap::crate_version,
    gavel_api_types::{
        AccessLevel,
        ErrorBodyResponse,
        Routable,
        Route,
    },
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::{
        openapi::security::{
            HttpAuthScheme,
            HttpBuilder,
            SecurityScheme,
        },
        Modify,
        OpenApi,
    },
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

mod auction;
mod profile;
mod session;

#[derive(Debug)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The username is already registered
    DuplicateUser,
    /// The presented credentials do not match a registered user
    InvalidCredentials,
    /// The session token was never issued or has expired
    InvalidSession,
    /// The caller is authenticated but not permitted to do this
    Unauthorized,
    /// The auction was not found
    AuctionNotFound,
    /// The auction is closed and accepts no further bids
    AuctionClosed,
    /// Sellers cannot bid on their own auctions
    SelfBid,
    /// The bid is below the current minimum acceptable amount
    BidTooLow { minimum: Amount },
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::DuplicateUser => (
                StatusCode::CONFLICT,
                "The username is already taken".to_string(),
            ),
            RestError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            RestError::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                "Session token is invalid or expired".to_string(),
            ),
            RestError::Unauthorized => (
                StatusCode::FORBIDDEN,
                "You are not allowed to perform this operation".to_string(),
            ),
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::AuctionClosed => (
                StatusCode::GONE,
                "The auction is closed and no longer accepts bids".to_string(),
            ),
            RestError::SelfBid => (
                StatusCode::CONFLICT,
                "Sellers cannot bid on their own auctions".to_string(),
            ),
            RestError::BidTooLow { minimum } => (
                StatusCode::CONFLICT,
                format!("Bid is below the minimum acceptable amount of {}", minimum),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, msg) = self.to_status_and_message();
        f.write_str(&msg)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

/// The caller's identity, resolved fresh from the bearer token on every
/// request. There is no server-side current-user state.
#[derive(Clone)]
pub enum Auth {
    Authorized(SessionToken, Username),
    Unauthorized,
}

#[async_trait]
impl FromRequestParts<Arc<Store>> for Auth {
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<Store>,
    ) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let username = state
                    .session_service
                    .resolve_session(ResolveSessionInput {
                        token: bearer.token().to_string(),
                    })
                    .await?;
                Ok(Auth::Authorized(bearer.token().to_string(), username))
            }
            Err(_) => Ok(Auth::Unauthorized),
        }
    }
}

async fn require_login(
    auth: Auth,
    request: extract::Request,
    next: middleware::Next,
) -> Response {
    match auth {
        Auth::Authorized(..) => next.run(request).await,
        Auth::Unauthorized => RestError::InvalidSession.into_response(),
    }
}

/// Registers handlers from their `Routable` route tables, wiring the
/// login requirement for routes marked `AccessLevel::LoggedIn`.
pub struct WrappedRouter {
    pub router: Router<Arc<Store>>,
    store:      Arc<Store>,
}

impl WrappedRouter {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            router: Router::new(),
            store,
        }
    }

    pub fn route<H, T>(self, route: impl Routable, handler: H) -> Self
    where
        H: axum::handler::Handler<T, Arc<Store>>,
        T: 'static,
    {
        let properties = route.properties();
        let method_router = if properties.method == Method::POST {
            post(handler)
        } else {
            get(handler)
        };
        let method_router = if properties.access_level == AccessLevel::LoggedIn {
            method_router.route_layer(middleware::from_fn_with_state(
                self.store.clone(),
                require_login,
            ))
        } else {
            method_router
        };
        Self {
            router: self.router.route(&properties.full_path, method_router),
            store:  self.store,
        }
    }
}

async fn root() -> String {
    format!("Gavel Auction Server API {}", crate_version!())
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

struct SecurityAddon;
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert(Default::default());
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    profile::post_register,
    session::post_login,
    session::post_logout,
    auction::get_auctions,
    auction::get_auction,
    auction::post_create_auction,
    auction::post_bid,
    auction::post_close_auction,
    ),
    components(
    schemas(
    gavel_api_types::profile::CreateProfile,
    gavel_api_types::profile::Profile,
    gavel_api_types::session::Login,
    gavel_api_types::session::AccessToken,
    gavel_api_types::auction::Auction,
    gavel_api_types::auction::Auctions,
    gavel_api_types::auction::AuctionStatus,
    gavel_api_types::auction::PlacedBid,
    gavel_api_types::auction::CreateAuction,
    gavel_api_types::auction::PlaceBid,
    gavel_api_types::auction::BidResult,
    gavel_api_types::auction::CloseAuction,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    ),
    ),
    modifiers(&SecurityAddon),
    tags(
    (name = "Gavel Auction Server", description = "Gavel runs time-bounded auctions fully in memory. It registers \
    users, hands out bearer session tokens, and serializes concurrent bids per auction.")
    )
    )]
    struct ApiDoc;

    let router = WrappedRouter::new(store.clone())
        .route(Route::Root, root)
        .route(Route::Liveness, live)
        .route(
            gavel_api_types::profile::Route::PostRegister,
            profile::post_register,
        )
        .route(gavel_api_types::session::Route::PostLogin, session::post_login)
        .route(
            gavel_api_types::session::Route::PostLogout,
            session::post_logout,
        )
        .route(
            gavel_api_types::auction::Route::GetAuctions,
            auction::get_auctions,
        )
        .route(
            gavel_api_types::auction::Route::GetAuction,
            auction::get_auction,
        )
        .route(
            gavel_api_types::auction::Route::PostCreateAuction,
            auction::post_create_auction,
        )
        .route(gavel_api_types::auction::Route::PostBid, auction::post_bid)
        .route(
            gavel_api_types::auction::Route::PostCloseAuction,
            auction::post_close_auction,
        )
        .router;

    let app: Router<()> = router
        .merge(Redoc::with_url(
            Route::Docs.as_ref().to_string(),
            ApiDoc::openapi(),
        ))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!("Server listening on {}", run_options.server.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down REST server...");
        })
        .await?;
    Ok(())
}
