// Dashboard service - Use case for activating the parking dashboard
use crate::application::dashboard_state::DashboardState;
use crate::application::stats_fetcher::{FetchOutcome, StatsFetcher};
use crate::application::teardown::{teardown_pair, TeardownSignal};
use crate::domain::dashboard::{DashboardView, QuickAction, QUICK_ACTIONS};
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct DashboardService {
    fetcher: StatsFetcher,
}

impl DashboardService {
    pub fn new(fetcher: StatsFetcher) -> Self {
        Self { fetcher }
    }

    /// Run one activation to completion and return the rendered view.
    /// Stays `Loading` only if torn down before the fetch resolved.
    pub async fn load_dashboard(&self, teardown: TeardownSignal) -> DashboardView {
        let mut state = DashboardState::new();
        let start_time = Instant::now();
        let outcome = self.fetcher.activate(&mut state, teardown).await;

        tracing::debug!(
            ?outcome,
            phase = ?state.phase(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Dashboard activation finished"
        );

        let view = state.view();
        if view.is_loading() {
            tracing::debug!("Activation torn down, returning loading view");
        }
        view
    }

    /// Progressive variant: sends the `Loading` view immediately, then the
    /// loaded view once the fetch completes. Dropping the receiver tears the
    /// activation down.
    pub fn stream_dashboard(&self) -> mpsc::Receiver<DashboardView> {
        let (tx, rx) = mpsc::channel(2);
        let fetcher = self.fetcher.clone();

        tokio::spawn(async move {
            let mut state = DashboardState::new();
            if tx.send(state.view()).await.is_err() {
                return;
            }

            let (teardown, signal) = teardown_pair();
            let tx_closed = tx.clone();
            let watcher = tokio::spawn(async move {
                tx_closed.closed().await;
                teardown.tear_down();
            });

            let outcome = fetcher.activate(&mut state, signal).await;
            watcher.abort();

            if outcome == FetchOutcome::Discarded {
                tracing::debug!("Dashboard stream closed before statistics resolved");
                return;
            }
            let _ = tx.send(state.view()).await;
        });

        rx
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }
}
