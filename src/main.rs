use account_notifier::stores::{CloudWatchLogSink, SecretsManagerCredentialStore, SsmContactStore};
use account_notifier::{Config, Notifier};
use lambda_runtime::{service_fn, Error};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .without_time()
        .compact()
        .init();

    let config = Config::from_env();

    // one shared SDK config for all three clients
    let sdk_config = aws_config::load_from_env().await;

    let notifier = Notifier::new(
        Box::new(SsmContactStore::new(
            aws_sdk_ssm::Client::new(&sdk_config),
            &config.contact_namespace,
        )),
        Box::new(SecretsManagerCredentialStore::new(
            aws_sdk_secretsmanager::Client::new(&sdk_config),
            &config.credential_secret_id,
        )),
        Box::new(CloudWatchLogSink::new(
            aws_sdk_cloudwatchlogs::Client::new(&sdk_config),
            &config.log_group_name,
            &config.log_stream_name,
        )),
    );

    if let Err(e) = lambda_runtime::run(service_fn(|event| notifier.handle(event))).await {
        debug!("Runtime error: {:?}", e);
        return Err(Error::from(e));
    }

    Ok(())
}
