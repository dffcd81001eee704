//! One-shot quorum signal
//!
//! Workers share a [`QuorumSignal`]; the controller holds the receiving end.
//! Only the first [`QuorumSignal::fire`] is delivered. Later fires, and fires
//! after the controller has stopped listening, return `false` without
//! blocking or panicking.

use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;

/// Receiving end held by the round controller
pub type QuorumReceiver = oneshot::Receiver<usize>;

/// Sending end shared by every worker of a round
#[derive(Debug)]
pub struct QuorumSignal {
    sender: Mutex<Option<oneshot::Sender<usize>>>,
}

impl QuorumSignal {
    /// Create a signal and its receiver.
    ///
    /// The receiver resolves with an error once every handle to the signal
    /// is dropped without a successful fire.
    pub fn channel() -> (Arc<Self>, QuorumReceiver) {
        let (tx, rx) = oneshot::channel();
        let signal = Self {
            sender: Mutex::new(Some(tx)),
        };
        (Arc::new(signal), rx)
    }

    /// Deliver the accepted count. Returns `true` only for a delivered fire.
    pub fn fire(&self, accepted: usize) -> bool {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match sender {
            Some(tx) => tx.send(accepted).is_ok(),
            None => false,
        }
    }

    /// Whether a fire has already been attempted
    #[cfg(test)]
    pub(crate) fn is_spent(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
