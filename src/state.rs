use crate::config::settings::AppConfig;
use crate::infrastructure::convert::mediaconvert::ConvertService;
use crate::infrastructure::storage::s3::StorageService;
use aws_config::SdkConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub sdk_config: SdkConfig,
    pub storage: StorageService,
    pub convert: ConvertService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        sdk_config: SdkConfig,
        storage: StorageService,
        convert: ConvertService,
    ) -> Self {
        Self {
            config,
            sdk_config,
            storage,
            convert,
        }
    }
}
