use crate::common::error::PipelineError;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tracing::info;

/// Loads the default AWS credential chain and eagerly resolves
/// credentials, so a broken login fails the run before any stage
/// touches the network. The returned config is read-only for the rest
/// of the run.
pub async fn login(region: Option<&str>) -> Result<SdkConfig, PipelineError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    let sdk_config = loader.load().await;

    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| PipelineError::Auth("no credentials provider configured".into()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| PipelineError::Auth(Box::new(e)))?;

    info!("✅ Logged into AWS");
    Ok(sdk_config)
}
