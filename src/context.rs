//! Invocation context handed in by the host runtime
use crate::types::TimeStamp;
use uuid7::uuid7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Identity of the submitting organisation. Carried, not inspected.
    pub caller_id: String,
    pub tx_id: String,
    /// Transaction time fixed by the host. Every replica stamps records with
    /// this value, never with its own clock.
    pub tx_timestamp: TimeStamp,
}

impl InvocationContext {
    pub fn new(caller_id: impl Into<String>, tx_id: impl Into<String>, tx_timestamp: TimeStamp) -> Self {
        Self {
            caller_id: caller_id.into(),
            tx_id: tx_id.into(),
            tx_timestamp,
        }
    }

    /// Context for a local, single-node invocation: fresh uuid7 transaction id, wall-clock time
    pub fn now(caller_id: impl Into<String>) -> Self {
        Self::new(caller_id, uuid7().to_string(), TimeStamp::new())
    }

    pub fn timestamp(&self) -> TimeStamp {
        self.tx_timestamp
    }
}
