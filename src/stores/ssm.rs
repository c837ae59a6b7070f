use super::ContactStore;
use aws_sdk_ssm::Client as SsmClient;
use lambda_runtime::Error;
use tracing::{debug, error};

/// Contact lookup over SSM Parameter Store.
/// Reads `/<namespace>/<account name>/email` as a single string value.
pub struct SsmContactStore {
    client: SsmClient,
    namespace: String,
}

impl SsmContactStore {
    pub fn new(client: SsmClient, namespace: &str) -> Self {
        Self {
            client,
            // tolerate a namespace configured with or without the slashes
            namespace: namespace.trim_matches('/').to_string(),
        }
    }

    /// E.g. `/accounts/jane/email`
    fn parameter_path(&self, account_name: &str) -> String {
        format!("/{}/{}/email", self.namespace, account_name)
    }
}

#[async_trait::async_trait]
impl ContactStore for SsmContactStore {
    async fn contact(&self, account_name: &str) -> Result<String, Error> {
        let path = self.parameter_path(account_name);
        debug!("Fetching contact parameter: {}", path);

        let resp = match self
            .client
            .get_parameter()
            .set_name(Some(path.clone()))
            .set_with_decryption(Some(true))
            .send()
            .await
        {
            Ok(v) => v,
            Err(e) => {
                error!("Failed to get parameter {}: {:?}", path, e);
                return Err(Error::from("Failed to get contact parameter"));
            }
        };

        // the SDK models both the parameter and its value as optional
        match resp.parameter.and_then(|p| p.value) {
            Some(v) => Ok(v),
            None => {
                error!("Parameter {} has no value", path);
                Err(Error::from("Contact parameter has no value"))
            }
        }
    }
}
