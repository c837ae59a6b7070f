use super::LogSink;
use crate::handler::LogEntry;
use aws_sdk_cloudwatchlogs::types::InputLogEvent;
use aws_sdk_cloudwatchlogs::Client as LogsClient;
use lambda_runtime::Error;
use tracing::{debug, error};

/// Notification sink over CloudWatch Logs.
/// Appends one event per call to a fixed group / stream pair.
/// The stream must exist - a missing stream fails the invocation.
pub struct CloudWatchLogSink {
    client: LogsClient,
    log_group_name: String,
    log_stream_name: String,
}

impl CloudWatchLogSink {
    pub fn new(client: LogsClient, log_group_name: &str, log_stream_name: &str) -> Self {
        Self {
            client,
            log_group_name: log_group_name.to_string(),
            log_stream_name: log_stream_name.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LogSink for CloudWatchLogSink {
    async fn append(&self, entry: LogEntry) -> Result<(), Error> {
        let timestamp = entry.timestamp;
        let message = entry.to_message()?;

        debug!(
            "Appending to {}/{}: {}",
            self.log_group_name, self.log_stream_name, message
        );

        let log_event = InputLogEvent::builder()
            .set_timestamp(Some(timestamp))
            .set_message(Some(message))
            .build()?;

        match self
            .client
            .put_log_events()
            .set_log_group_name(Some(self.log_group_name.clone()))
            .set_log_stream_name(Some(self.log_stream_name.clone()))
            .log_events(log_event)
            .send()
            .await
        {
            Ok(v) => {
                // rejected events are skipped silently by the service, surface them
                if let Some(rejected) = v.rejected_log_events_info {
                    error!("Log event rejected: {:?}", rejected);
                    return Err(Error::from("Log event rejected"));
                }
                Ok(())
            }
            Err(e) => {
                error!(
                    "Failed to put log events into {}/{}: {:?}",
                    self.log_group_name, self.log_stream_name, e
                );
                Err(Error::from("Failed to append the notification log entry"))
            }
        }
    }
}
