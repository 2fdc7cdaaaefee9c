// Stats fetcher - One authenticated statistics fetch per dashboard activation
use crate::application::dashboard_state::DashboardState;
use crate::application::statistics_source::{CredentialProvider, StatisticsSource};
use crate::application::teardown::TeardownSignal;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    LoadedWithDefaults,
    /// Torn down before the fetch resolved; state was left untouched.
    Discarded,
}

#[derive(Clone)]
pub struct StatsFetcher {
    source: Arc<dyn StatisticsSource>,
    credentials: Arc<dyn CredentialProvider>,
}

impl StatsFetcher {
    pub fn new(source: Arc<dyn StatisticsSource>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            source,
            credentials,
        }
    }

    /// Fetch statistics into `state`. Failures are logged and absorbed: the
    /// state keeps its all-zero snapshot and still leaves `Loading`. No retries.
    pub async fn activate(&self, state: &mut DashboardState, mut teardown: TeardownSignal) -> FetchOutcome {
        if teardown.is_torn_down() {
            return FetchOutcome::Discarded;
        }

        let token = self.credentials.token();
        if token.is_none() {
            tracing::debug!("No stored token, sending null bearer credential");
        }

        let result = tokio::select! {
            biased;
            _ = teardown.torn_down() => {
                tracing::debug!("Dashboard torn down before statistics resolved");
                return FetchOutcome::Discarded;
            }
            result = self.source.fetch_statistics(token.as_deref()) => result,
        };

        if teardown.is_torn_down() {
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(snapshot) => {
                if !snapshot.is_consistent() {
                    tracing::warn!(?snapshot, "Statistics snapshot violates slot/car invariants");
                }
                state.complete(Some(snapshot));
                FetchOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching dashboard statistics");
                state.complete(None);
                FetchOutcome::LoadedWithDefaults
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::application::dashboard_state::LoadPhase;
    use crate::application::statistics_source::FetchError;
    use crate::application::teardown::teardown_pair;
    use crate::domain::statistics::StatisticsSnapshot;
    use std::time::Duration;

    fn fetcher(source: Arc<FakeSource>, credentials: Arc<FakeCredentials>) -> StatsFetcher {
        StatsFetcher::new(source, credentials)
    }

    async fn run(behavior: Behavior) -> (FetchOutcome, DashboardState) {
        let source = Arc::new(FakeSource::new(behavior));
        let fetcher = fetcher(source, Arc::new(FakeCredentials::with_token("abc")));
        let mut state = DashboardState::new();
        let (_teardown, signal) = teardown_pair();

        assert!(state.is_loading());
        let outcome = fetcher.activate(&mut state, signal).await;
        (outcome, state)
    }

    #[tokio::test]
    async fn test_success_updates_snapshot() {
        let (outcome, state) = run(Behavior::Succeed(sample_snapshot())).await;

        assert_eq!(outcome, FetchOutcome::Loaded);
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.snapshot(), &sample_snapshot());
    }

    #[tokio::test]
    async fn test_failures_keep_zero_defaults() {
        let failures: [fn() -> FetchError; 3] = [
            || FetchError::Transport("connection refused".to_string()),
            || FetchError::Status {
                status: 500,
                body: "boom".to_string(),
            },
            || FetchError::Decode("expected value at line 1".to_string()),
        ];

        for make_error in failures {
            let (outcome, state) = run(Behavior::Fail(make_error)).await;

            assert_eq!(outcome, FetchOutcome::LoadedWithDefaults);
            assert_eq!(state.phase(), LoadPhase::LoadedWithDefaults);
            assert_eq!(state.snapshot(), &StatisticsSnapshot::default());
        }
    }

    #[tokio::test]
    async fn test_token_is_read_at_call_time() {
        let source = Arc::new(FakeSource::new(Behavior::Succeed(sample_snapshot())));
        let credentials = Arc::new(FakeCredentials::default());
        let fetcher = fetcher(source.clone(), credentials.clone());

        *credentials.token.lock().unwrap() = Some("fresh-token".to_string());

        let mut state = DashboardState::new();
        let (_teardown, signal) = teardown_pair();
        fetcher.activate(&mut state, signal).await;

        let seen = source.seen_tokens.lock().unwrap();
        assert_eq!(*seen, vec![Some("fresh-token".to_string())]);
    }

    #[tokio::test]
    async fn test_missing_token_is_still_sent() {
        let source = Arc::new(FakeSource::new(Behavior::Succeed(sample_snapshot())));
        let fetcher = fetcher(source.clone(), Arc::new(FakeCredentials::default()));

        let mut state = DashboardState::new();
        let (_teardown, signal) = teardown_pair();
        let outcome = fetcher.activate(&mut state, signal).await;

        assert_eq!(outcome, FetchOutcome::Loaded);
        assert_eq!(*source.seen_tokens.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn test_teardown_discards_in_flight_fetch() {
        let source = Arc::new(FakeSource::new(Behavior::Hang));
        let fetcher = fetcher(source, Arc::new(FakeCredentials::with_token("abc")));
        let mut state = DashboardState::new();
        let (teardown, signal) = teardown_pair();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            teardown.tear_down();
        });

        let outcome = tokio::time::timeout(Duration::from_secs(1), fetcher.activate(&mut state, signal))
            .await
            .expect("activation should stop on teardown");

        assert_eq!(outcome, FetchOutcome::Discarded);
        assert!(state.is_loading());
    }

    #[tokio::test]
    async fn test_torn_down_before_start_never_fetches() {
        let source = Arc::new(FakeSource::new(Behavior::Succeed(sample_snapshot())));
        let fetcher = fetcher(source.clone(), Arc::new(FakeCredentials::with_token("abc")));
        let mut state = DashboardState::new();
        let (teardown, signal) = teardown_pair();
        drop(teardown);

        let outcome = fetcher.activate(&mut state, signal).await;

        assert_eq!(outcome, FetchOutcome::Discarded);
        assert!(state.is_loading());
        assert!(source.seen_tokens.lock().unwrap().is_empty());
    }
}
