// Local state of one dashboard activation
use crate::application::stats_presenter::present;
use crate::domain::dashboard::DashboardView;
use crate::domain::statistics::StatisticsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    /// The fetch failed; the all-zero snapshot is shown.
    LoadedWithDefaults,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshot: StatisticsSnapshot,
    phase: LoadPhase,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snapshot: StatisticsSnapshot::default(),
            phase: LoadPhase::Loading,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> &StatisticsSnapshot {
        &self.snapshot
    }

    /// Leave `Loading`, keeping the default snapshot when `snapshot` is `None`.
    /// Returns `false` and changes nothing if the state already left `Loading`.
    pub fn complete(&mut self, snapshot: Option<StatisticsSnapshot>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.phase = match snapshot {
            Some(snapshot) => {
                self.snapshot = snapshot;
                LoadPhase::Loaded
            }
            None => LoadPhase::LoadedWithDefaults,
        };
        true
    }

    pub fn view(&self) -> DashboardView {
        if self.is_loading() {
            DashboardView::Loading
        } else {
            DashboardView::loaded(present(&self.snapshot))
        }
    }
}
