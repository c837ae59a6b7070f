use std::env::var;

/// Deployment-time settings for the notifier.
/// All of these are owned by the deployment stack, not by this function.
pub struct Config {
    /// Namespace of the per-account contact parameters,
    /// e.g. `accounts` for parameters like `/accounts/jane/email`
    pub contact_namespace: String,
    /// Id or ARN of the shared credential secret
    pub credential_secret_id: String,
    /// E.g. /aws/lambda/account-notifier
    pub log_group_name: String,
    /// Fixed stream within the log group, e.g. `test`
    pub log_stream_name: String,
}

impl Config {
    /// Creates a new Config instance from the environment variables.
    /// Uses default values where possible.
    /// Panics if the required environment variables are not set.
    pub fn from_env() -> Self {
        let contact_namespace = var("CONTACT_NAMESPACE").expect("Missing CONTACT_NAMESPACE env var");
        let credential_secret_id = var("CREDENTIAL_SECRET_ID").expect("Missing CREDENTIAL_SECRET_ID env var");

        // the log group defaults to the function's own group
        // e.g. /aws/lambda/account-notifier
        let log_group_name = match var("LOG_GROUP_NAME") {
            Ok(v) => v,
            Err(_e) => {
                let function_name = var("AWS_LAMBDA_FUNCTION_NAME")
                    .expect("Missing both LOG_GROUP_NAME and AWS_LAMBDA_FUNCTION_NAME env vars");
                format!("/aws/lambda/{}", function_name)
            }
        };

        let log_stream_name = var("LOG_STREAM_NAME").unwrap_or_else(|_e| "test".to_string());

        Self {
            contact_namespace,
            credential_secret_id,
            log_group_name,
            log_stream_name,
        }
    }
}
