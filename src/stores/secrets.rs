use super::CredentialStore;
use aws_sdk_secretsmanager::Client as SecretsClient;
use lambda_runtime::Error;
use tracing::{debug, error};

/// Credential lookup over Secrets Manager.
/// The secret id is fixed at deployment time and the value is never rotated
/// by this function.
pub struct SecretsManagerCredentialStore {
    client: SecretsClient,
    secret_id: String,
}

impl SecretsManagerCredentialStore {
    pub fn new(client: SecretsClient, secret_id: &str) -> Self {
        Self {
            client,
            secret_id: secret_id.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for SecretsManagerCredentialStore {
    async fn credential(&self) -> Result<String, Error> {
        debug!("Fetching credential secret: {}", self.secret_id);

        let resp = match self
            .client
            .get_secret_value()
            .set_secret_id(Some(self.secret_id.clone()))
            .send()
            .await
        {
            Ok(v) => v,
            Err(e) => {
                error!("Failed to get secret {}: {:?}", self.secret_id, e);
                return Err(Error::from("Failed to get credential secret"));
            }
        };

        // the secret was created as a string, a binary-only secret is a misconfiguration
        match resp.secret_string {
            Some(v) => Ok(v),
            None => {
                error!("Secret {} has no string value", self.secret_id);
                Err(Error::from("Credential secret has no string value"))
            }
        }
    }
}
