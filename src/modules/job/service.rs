use super::model::{JobSpec, SubmittedJob};
use super::spec;
use crate::common::error::PipelineError;
use crate::infrastructure::convert::mediaconvert::BoundConvertClient;
use crate::modules::artifact::model::ArtifactRef;
use crate::state::AppState;
use tracing::{debug, info};

pub struct JobService;

impl JobService {
    /// Discovers the account endpoint and binds a submission client to
    /// it. Runs once per pipeline invocation; bindings are never
    /// reused across runs.
    pub async fn resolve_endpoint(state: &AppState) -> Result<BoundConvertClient, PipelineError> {
        let endpoint = state.convert.discover_endpoint().await?;
        Ok(state.convert.bind(&state.sdk_config, endpoint))
    }

    /// Sends the built spec to the bound endpoint and returns the
    /// service-issued job id.
    pub async fn submit(
        client: &BoundConvertClient,
        state: &AppState,
        job_spec: JobSpec,
        artifact: ArtifactRef,
    ) -> Result<SubmittedJob, PipelineError> {
        if let Ok(doc) = serde_json::to_string(&job_spec) {
            debug!("job spec: {doc}");
        }

        let settings = spec::to_job_settings(&job_spec);
        let job_id = client.create_job(&state.config.role_arn, settings).await?;

        info!("🎬 Conversion job created, id {job_id}");
        Ok(SubmittedJob { job_id, artifact })
    }
}
