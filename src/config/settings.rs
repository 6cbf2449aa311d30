use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("source and output buckets must differ, both are '{0}'")]
    BucketCollision(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub source_bucket: String,
    pub output_bucket: String,
    pub role_arn: String,
    pub region: Option<String>,
    pub run_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, SettingsError> {
        let config = Self {
            source_bucket: env::get_or(EnvKey::SourceBucket, "transcription-job-original-files"),
            output_bucket: env::get_or(EnvKey::OutputBucket, "transcription-job-mp4-files"),
            role_arn: env::get(EnvKey::RoleArn)
                .map_err(|_| SettingsError::Missing(EnvKey::RoleArn.as_str()))?,
            region: env::get(EnvKey::Region).ok(),
            run_timeout_secs: env::get_parsed(EnvKey::RunTimeoutSecs, 180),
        };

        ensure_distinct_buckets(&config.source_bucket, &config.output_bucket)?;
        Ok(config)
    }
}

/// Input and output must never point at the same bucket, otherwise a
/// job could overwrite its own source.
pub fn ensure_distinct_buckets(source: &str, output: &str) -> Result<(), SettingsError> {
    if source == output {
        return Err(SettingsError::BucketCollision(source.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_buckets_are_accepted() {
        assert!(ensure_distinct_buckets("originals", "converted").is_ok());
    }

    #[test]
    fn colliding_buckets_are_rejected() {
        let err = ensure_distinct_buckets("media", "media").unwrap_err();
        assert!(matches!(err, SettingsError::BucketCollision(b) if b == "media"));
    }
}
