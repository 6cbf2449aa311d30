use crate::common::error::PipelineError;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::info;

#[derive(Clone)]
pub struct StorageService {
    pub client: Client,
    pub bucket: String,
}

impl StorageService {
    pub fn new(sdk_config: &SdkConfig, bucket: &str) -> Self {
        Self {
            client: Client::new(sdk_config),
            bucket: bucket.to_string(),
        }
    }

    /// Streams a local file into the bucket under `key`. Last write
    /// wins; there is no existence check and no versioning.
    pub async fn put_file(&self, key: &str, path: &Path) -> Result<(), PipelineError> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| PipelineError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        // The ByteStream owns the handle from here on, so it is closed
        // on every exit path.
        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| PipelineError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        let content_type = mime_guess::from_path(path).first_or_octet_stream();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type.as_ref())
            .body(body)
            .send()
            .await
            .map_err(|e| PipelineError::Upload {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                source: Box::new(aws_sdk_s3::Error::from(e)),
            })?;

        info!("✅ Uploaded s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
