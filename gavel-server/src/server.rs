use {
    crate::{
        api,
        auction,
        config::RunOptions,
        profile,
        session,
        state::Store,
    },
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let store = Arc::new(Store {
        profile_service: profile::service::Service::new(profile::service::Config {
            minimum_password_length: run_options.auth.minimum_password_length,
        }),
        session_service: session::service::Service::new(session::service::Config {
            session_ttl:             Duration::from_secs(run_options.auth.session_ttl_secs),
            single_session_per_user: run_options.auth.single_session_per_user,
        }),
        auction_service: auction::service::Service::new(auction::service::Config {
            first_bid_rule:        run_options.auction.first_bid_rule.into(),
            default_min_increment: run_options.auction.default_min_increment,
        }),
    });

    let sweep_interval = Duration::from_secs(run_options.auction.sweep_interval_secs);
    let task_tracker = TaskTracker::new();
    task_tracker.spawn({
        let service = store.session_service.clone();
        async move { service.run_expiry_loop(sweep_interval).await }
    });
    task_tracker.spawn({
        let service = store.auction_service.clone();
        async move { service.run_conclusion_loop(sweep_interval).await }
    });
    task_tracker.close();

    api::start_api(run_options, store.clone()).await?;
    task_tracker.wait().await;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
