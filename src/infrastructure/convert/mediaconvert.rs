use crate::common::error::PipelineError;
use aws_config::SdkConfig;
use aws_sdk_mediaconvert::Client;
use aws_sdk_mediaconvert::types::JobSettings;
use tracing::{debug, info, warn};
use url::Url;

/// The account/region-bound MediaConvert base URL. Endpoints rotate and
/// are account scoped, so one is discovered fresh for every run and
/// never cached.
#[derive(Clone, Debug)]
pub struct ServiceEndpoint(Url);

impl ServiceEndpoint {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Discovery-only client. Jobs cannot be submitted through this; call
/// `bind` to get a `BoundConvertClient` first.
#[derive(Clone)]
pub struct ConvertService {
    client: Client,
}

impl ConvertService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Calls DescribeEndpoints and returns the account endpoint. The
    /// service is expected to return exactly one; if it ever returns
    /// more, index 0 is taken deterministically.
    pub async fn discover_endpoint(&self) -> Result<ServiceEndpoint, PipelineError> {
        let resp = self
            .client
            .describe_endpoints()
            .send()
            .await
            .map_err(|e| PipelineError::Discovery(Box::new(aws_sdk_mediaconvert::Error::from(e))))?;

        let endpoints = resp.endpoints();
        if endpoints.len() > 1 {
            warn!("discovery returned {} endpoints, using the first", endpoints.len());
        }

        let first = endpoints.first().ok_or(PipelineError::NoEndpoint)?;
        let raw = first
            .url()
            .ok_or_else(|| PipelineError::Discovery("endpoint entry is missing its url".into()))?;
        let url = Url::parse(raw).map_err(|e| PipelineError::Discovery(Box::new(e)))?;

        info!("✅ Resolved conversion endpoint {url}");
        Ok(ServiceEndpoint(url))
    }

    /// Rebuilds the client against the discovered base URL. The
    /// returned value is the only type that can submit jobs, so a
    /// default-endpoint submission cannot happen by construction.
    pub fn bind(&self, sdk_config: &SdkConfig, endpoint: ServiceEndpoint) -> BoundConvertClient {
        let config = aws_sdk_mediaconvert::config::Builder::from(sdk_config)
            .endpoint_url(endpoint.as_str())
            .build();
        BoundConvertClient {
            client: Client::from_conf(config),
            endpoint,
        }
    }
}

pub struct BoundConvertClient {
    client: Client,
    endpoint: ServiceEndpoint,
}

impl BoundConvertClient {
    pub async fn create_job(
        &self,
        role_arn: &str,
        settings: JobSettings,
    ) -> Result<String, PipelineError> {
        debug!("submitting CreateJob to {}", self.endpoint.as_str());

        let resp = self
            .client
            .create_job()
            .role(role_arn)
            .settings(settings)
            .send()
            .await
            .map_err(|e| PipelineError::Submission(Box::new(aws_sdk_mediaconvert::Error::from(e))))?;

        resp.job()
            .and_then(|job| job.id())
            .map(str::to_string)
            .ok_or_else(|| PipelineError::Submission("service response contained no job id".into()))
    }
}
