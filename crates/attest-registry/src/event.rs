use serde::{Deserialize, Serialize};

use attest_types::AccountId;

/// Notification emitted by the registry.
///
/// Events are a side effect of successful mutation, not a read path: exactly
/// one event per successful registration, none on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new record was created.
    FileRegistered {
        ordinal: u64,
        size: u64,
        uploader: AccountId,
    },
}

/// Destination for registry events.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: RegistryEvent);
}

/// Default sink: one structured log line per event.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn publish(&self, event: RegistryEvent) {
        match event {
            RegistryEvent::FileRegistered {
                ordinal,
                size,
                uploader,
            } => {
                tracing::info!(ordinal, size, uploader = %uploader, "file registered");
            }
        }
    }
}
