//! The three external services the notifier talks to, behind async traits
//! so the handler does not care whether it runs against AWS or in-memory
//! doubles.
//!
//! [`ContactStore`] resolves an account name into a contact identifier.
//! [`CredentialStore`] returns the shared temporary credential.
//! [`LogSink`] appends one entry to the notification log stream.

pub mod cloudwatch;
pub mod memory;
pub mod secrets;
pub mod ssm;

use crate::handler::LogEntry;
use lambda_runtime::Error;

pub use cloudwatch::CloudWatchLogSink;
pub use secrets::SecretsManagerCredentialStore;
pub use ssm::SsmContactStore;

/// Per-account contact lookup, keyed by account name.
/// A lookup miss is an error, not an empty result.
#[async_trait::async_trait]
pub trait ContactStore: Send + Sync {
    async fn contact(&self, account_name: &str) -> Result<String, Error>;
}

/// The shared credential generated once at deployment time.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    async fn credential(&self) -> Result<String, Error>;
}

/// Append-only notification log. Entries are never read back.
#[async_trait::async_trait]
pub trait LogSink: Send + Sync {
    async fn append(&self, entry: LogEntry) -> Result<(), Error>;
}

// lets the caller keep a handle to a sink after handing it to the notifier
#[async_trait::async_trait]
impl<T: LogSink + ?Sized> LogSink for std::sync::Arc<T> {
    async fn append(&self, entry: LogEntry) -> Result<(), Error> {
        (**self).append(entry).await
    }
}
