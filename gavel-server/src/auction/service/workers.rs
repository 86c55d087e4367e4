use {
    super::Service,
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    std::{
        sync::atomic::Ordering,
        time::Duration,
    },
};

impl Service {
    pub async fn run_conclusion_loop(&self, sweep_interval: Duration) {
        tracing::info!("Starting auction conclusion sweeper...");
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        let mut sweep = tokio::time::interval(sweep_interval);
        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = sweep.tick() => {
                    self.conclude_auctions().await;
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down auction conclusion sweeper...");
    }
}
