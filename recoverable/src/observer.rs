//! Injected event sink for signing and recovery diagnostics.
//!
//! The signing core never writes to a global logger. Callers that want to see
//! retries or rejected recovery candidates pass a [`SigningObserver`] to the
//! [`Signer`](crate::Signer).

use std::sync::Mutex;

use crate::errors::SignatureError;

/// Why a signing attempt was discarded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// `r` or `s` does not encode to exactly 32 bytes with a clear high bit.
    NotFixedWidth,
    /// The assembled 65-byte signature failed the canonical-form check.
    NonCanonical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningEvent {
    AttemptRejected {
        attempt: u32,
        reason: RejectReason,
    },
    /// Recovery for this index failed before producing a candidate key.
    CandidateRejected {
        index: u8,
        error: SignatureError,
    },
    /// Recovery produced a key, but not the expected one.
    CandidateMismatch {
        index: u8,
    },
    Signed {
        attempts: u32,
        recovery_index: u8,
    },
}

pub trait SigningObserver {
    fn on_event(&self, event: &SigningEvent);
}

/// Discards every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl SigningObserver for NoopObserver {
    #[inline]
    fn on_event(&self, _event: &SigningEvent) {}
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SigningEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<SigningEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SigningObserver for RecordingObserver {
    fn on_event(&self, event: &SigningEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

impl<O: SigningObserver + ?Sized> SigningObserver for &O {
    #[inline]
    fn on_event(&self, event: &SigningEvent) {
        (**self).on_event(event)
    }
}
