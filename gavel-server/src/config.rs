use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
    ValueEnum,
};

pub mod server;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub auth: AuthOptions,

    #[command(flatten)]
    pub auction: AuctionOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auth Options")]
#[group(id = "Auth")]
pub struct AuthOptions {
    /// Number of seconds a session token stays valid after login.
    #[arg(long = "session-ttl-secs")]
    #[arg(env = "SESSION_TTL_SECS")]
    #[arg(default_value = "3600")]
    pub session_ttl_secs: u64,

    /// Revoke a user's existing sessions whenever they log in again.
    #[arg(long = "single-session-per-user")]
    #[arg(env = "SINGLE_SESSION_PER_USER")]
    pub single_session_per_user: bool,

    /// Minimum accepted password length at registration.
    #[arg(long = "minimum-password-length")]
    #[arg(env = "MINIMUM_PASSWORD_LENGTH")]
    #[arg(default_value = "8")]
    pub minimum_password_length: usize,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auction Options")]
#[group(id = "Auction")]
pub struct AuctionOptions {
    /// Whether the first bid on an auction may equal the starting price or
    /// must strictly exceed it.
    #[arg(long = "first-bid-rule", value_enum)]
    #[arg(env = "FIRST_BID_RULE")]
    #[arg(default_value = "above-start")]
    pub first_bid_rule: FirstBidRule,

    /// Minimum bid increment applied to auctions created without one.
    #[arg(long = "default-min-increment")]
    #[arg(env = "DEFAULT_MIN_INCREMENT")]
    #[arg(default_value = "1")]
    pub default_min_increment: u64,

    /// Interval in seconds between housekeeping sweeps (expired sessions,
    /// auctions past their close time).
    #[arg(long = "sweep-interval-secs")]
    #[arg(env = "SWEEP_INTERVAL_SECS")]
    #[arg(default_value = "10")]
    pub sweep_interval_secs: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstBidRule {
    /// A first bid equal to the starting price is accepted.
    AtLeastStart,
    /// A first bid must strictly exceed the starting price.
    AboveStart,
}
