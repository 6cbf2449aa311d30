use crate::common::error::PipelineError;
use crate::config::settings::AppConfig;
use crate::infrastructure::convert::mediaconvert::ConvertService;
use crate::infrastructure::credentials;
use crate::infrastructure::storage::s3::StorageService;
use crate::state::AppState;

/// Resolves credentials and wires up the service clients. A credential
/// failure is fatal before any pipeline stage runs.
pub async fn bootstrap(config: AppConfig) -> Result<AppState, PipelineError> {
    let sdk_config = credentials::login(config.region.as_deref()).await?;

    let storage = StorageService::new(&sdk_config, &config.source_bucket);
    let convert = ConvertService::new(&sdk_config);

    Ok(AppState::new(config, sdk_config, storage, convert))
}
