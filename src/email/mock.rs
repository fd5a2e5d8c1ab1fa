use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::info;

use super::{DispatchReceipt, Dispatcher, EmailError, OutboundEmail};

/// Logs the message and discards it; nothing leaves the process. Counts
/// invocations so tests can assert whether a dispatch was attempted.
#[derive(Default)]
pub struct MockDispatcher {
    dispatched: AtomicUsize,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatched.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dispatcher for MockDispatcher {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<DispatchReceipt, EmailError> {
        let n = self.dispatched.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            body = %email.text,
            "mock dispatch: logging and discarding contact email"
        );
        Ok(DispatchReceipt {
            message_id: format!("mock-{n}"),
        })
    }
}
