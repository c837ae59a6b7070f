use crate::event::AccountCreationDetail;
use crate::stores::{ContactStore, CredentialStore, LogSink};
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// One line of the notification log.
/// The timestamp travels in the log event envelope, the rest is serialized
/// into the message body.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Wall-clock time of the invocation in epoch milliseconds
    #[serde(skip)]
    pub timestamp: i64,
    pub account_name: String,
    pub contact_identifier: String,
    pub credential: String,
}

impl LogEntry {
    /// The message body for the log sink:
    /// `{"accountName":..,"contactIdentifier":..,"credential":..}`
    pub fn to_message(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The notification flow. Owns the three external stores so the same handler
/// runs against AWS in the lambda and against in-memory doubles in tests.
pub struct Notifier {
    contacts: Box<dyn ContactStore>,
    credentials: Box<dyn CredentialStore>,
    sink: Box<dyn LogSink>,
}

impl Notifier {
    pub fn new(
        contacts: Box<dyn ContactStore>,
        credentials: Box<dyn CredentialStore>,
        sink: Box<dyn LogSink>,
    ) -> Self {
        Self {
            contacts,
            credentials,
            sink,
        }
    }

    /// Handles one account-creation event:
    /// fetch the contact, fetch the credential, append one log entry.
    ///
    /// Events without a usable account name are ignored without an error.
    /// Any store failure fails the invocation with no log entry written and
    /// no retry - a redelivered event runs the whole sequence again and
    /// appends a duplicate entry.
    pub async fn handle(&self, event: LambdaEvent<EventBridgeEvent<AccountCreationDetail>>) -> Result<(), Error> {
        let (event, ctx) = event.into_parts();

        debug!("Event: {:?}", event);
        debug!("Context: {:?}", ctx);

        // events matched by the rule but missing the name carry nothing to notify about
        let account_name = match event.detail.account_name() {
            Some(v) => v.to_string(),
            None => {
                info!("No account name in the event - nothing to do");
                return Ok(());
            }
        };

        info!("Account created: {}", account_name);

        let contact_identifier = self.contacts.contact(&account_name).await?;
        let credential = self.credentials.credential().await?;

        let entry = LogEntry {
            timestamp: epoch_ms(),
            account_name,
            contact_identifier,
            credential,
        };

        self.sink.append(entry).await?;

        info!("Notification entry appended");

        Ok(())
    }
}

/// Current wall-clock time in epoch milliseconds
fn epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System clock is set before the UNIX epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_message_uses_camel_case_and_skips_timestamp() {
        let entry = LogEntry {
            timestamp: 1718071341165,
            account_name: "jane".to_string(),
            contact_identifier: "jane@example.com".to_string(),
            credential: "s3cr3t".to_string(),
        };

        let message = entry.to_message().unwrap();
        let value: serde_json::Value = serde_json::from_str(&message).unwrap();

        assert_eq!(value["accountName"], "jane");
        assert_eq!(value["contactIdentifier"], "jane@example.com");
        assert_eq!(value["credential"], "s3cr3t");
        assert!(value.get("timestamp").is_none());
    }
}
