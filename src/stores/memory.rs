//! In-memory store implementations for tests and local runs.
//! They mimic the failure modes of the AWS-backed stores: a lookup miss or
//! a missing secret is an error, not an empty result.

use super::{ContactStore, CredentialStore, LogSink};
use crate::handler::LogEntry;
use lambda_runtime::Error;
use std::collections::HashMap;
use std::sync::Mutex;

/// Contact lookup over a fixed map of account name to contact identifier.
/// Accounts missing from the map fail the lookup, same as a missing
/// parameter would.
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: HashMap<String, String>,
}

impl MemoryContactStore {
    pub fn new(contacts: &[(&str, &str)]) -> Self {
        Self {
            contacts: contacts
                .iter()
                .map(|(name, contact)| (name.to_string(), contact.to_string()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl ContactStore for MemoryContactStore {
    async fn contact(&self, account_name: &str) -> Result<String, Error> {
        match self.contacts.get(account_name) {
            Some(v) => Ok(v.clone()),
            None => Err(Error::from("Failed to get contact parameter")),
        }
    }
}

/// A fixed credential value. Constructed with `missing()` it fails every
/// lookup, which stands in for a deleted or inaccessible secret.
#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: Option<String>,
}

impl MemoryCredentialStore {
    pub fn new(credential: &str) -> Self {
        Self {
            credential: Some(credential.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { credential: None }
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn credential(&self) -> Result<String, Error> {
        match &self.credential {
            Some(v) => Ok(v.clone()),
            None => Err(Error::from("Failed to get credential secret")),
        }
    }
}

/// Collects appended entries in memory so tests can assert on them.
#[derive(Default)]
pub struct MemoryLogSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything appended so far, in append order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("Poisoned entries lock. It's a bug.").clone()
    }
}

#[async_trait::async_trait]
impl LogSink for MemoryLogSink {
    async fn append(&self, entry: LogEntry) -> Result<(), Error> {
        self.entries
            .lock()
            .expect("Poisoned entries lock. It's a bug.")
            .push(entry);
        Ok(())
    }
}
