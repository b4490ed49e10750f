//! Shutdown coordination for the proxy.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// The flag is sticky: a listener created after `trigger` still observes it.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Get a listener for the shutdown signal.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Number of live listeners (tasks still running).
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to long-running tasks.
#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once shutdown is triggered. Never resolves if the coordinator
    /// is dropped without triggering.
    pub async fn triggered(&mut self) {
        if self.rx.wait_for(|triggered| *triggered).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_reaches_every_listener() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.listener_count(), 2);

        shutdown.trigger();

        a.triggered().await;
        b.triggered().await;
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn late_listener_sees_earlier_trigger() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let mut late = shutdown.subscribe();
        tokio::time::timeout(Duration::from_millis(100), late.triggered())
            .await
            .expect("late listener missed the trigger");
    }

    #[tokio::test]
    async fn dropped_coordinator_never_fires() {
        let mut listener = Shutdown::new().subscribe();
        let waited = tokio::time::timeout(Duration::from_millis(50), listener.triggered()).await;
        assert!(waited.is_err());
    }
}
