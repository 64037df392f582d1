//! Delayed "load more" requests.
//!
//! The scroll trigger asks for another page; the page is revealed after a
//! short delay. Filter changes keep flowing meanwhile, so a ticket records
//! the view it was issued for and the session re-checks it on arrival.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::view::ViewKey;

/// Request to reveal one more page of a specific view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreTicket {
    view: ViewKey,
}

impl LoadMoreTicket {
    pub fn new(view: ViewKey) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &ViewKey {
        &self.view
    }
}

/// Holds at most one pending load-more timer.
pub struct LoadMoreScheduler {
    delay: Duration,
    tx: mpsc::Sender<LoadMoreTicket>,
    pending: Option<JoinHandle<()>>,
}

impl LoadMoreScheduler {
    pub fn new(delay: Duration, tx: mpsc::Sender<LoadMoreTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Starts the timer for `ticket`. No-op while another one is pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: LoadMoreTicket) -> bool {
        if self.is_pending() {
            tracing::trace!("Load-more already pending");
            return false;
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Load-more scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ticket).await;
        }));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for LoadMoreScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
