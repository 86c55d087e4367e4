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
    pub async fn run_expiry_loop(&self, sweep_interval: Duration) {
        tracing::info!("Starting session expiry sweeper...");
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        let mut sweep = tokio::time::interval(sweep_interval);
        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = sweep.tick() => {
                    self.expire_sessions().await;
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down session expiry sweeper...");
    }
}
