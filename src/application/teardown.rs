// Teardown signalling between a dashboard activation and its host
use tokio::sync::watch;

/// Held by whoever hosts an activation. Calling [`Teardown::tear_down`] or
/// dropping the handle tears the activation down.
#[derive(Debug)]
pub struct Teardown {
    tx: watch::Sender<bool>,
}

/// Observed by the activation before it touches state.
#[derive(Debug, Clone)]
pub struct TeardownSignal {
    rx: watch::Receiver<bool>,
}

pub fn teardown_pair() -> (Teardown, TeardownSignal) {
    let (tx, rx) = watch::channel(false);
    (Teardown { tx }, TeardownSignal { rx })
}

impl Teardown {
    pub fn tear_down(&self) {
        self.tx.send_replace(true);
    }
}

impl TeardownSignal {
    pub fn is_torn_down(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolves once the activation has been torn down.
    pub async fn torn_down(&mut self) {
        // Err means the handle was dropped, which counts as teardown.
        let _ = self.rx.wait_for(|down| *down).await;
    }
}
