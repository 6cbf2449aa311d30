use crate::common::error::{PipelineError, Stage};
use crate::modules::artifact::service::ArtifactService;
use crate::modules::job::model::{EncodeProfile, SubmittedJob};
use crate::modules::job::service::JobService;
use crate::modules::job::spec::build_spec;
use crate::state::AppState;
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

/// Runs the whole submission pipeline for one file. Stages run
/// strictly in order; the first failure short-circuits the rest.
/// One deadline bounds all network stages, and nothing is retried —
/// retries belong to whoever wraps this, not to any stage. An object
/// uploaded before a failed submission stays where it is.
pub async fn run(state: &AppState, path: &Path) -> Result<SubmittedJob, PipelineError> {
    let deadline = Instant::now() + Duration::from_secs(state.config.run_timeout_secs);

    let artifact = ArtifactService::validate(path)?;

    bounded(
        deadline,
        Stage::Upload,
        ArtifactService::upload(state, &artifact),
    )
    .await?;

    let client = bounded(
        deadline,
        Stage::ResolveEndpoint,
        JobService::resolve_endpoint(state),
    )
    .await?;

    let job_spec = build_spec(
        artifact.object_key(),
        &state.config.source_bucket,
        &state.config.output_bucket,
        EncodeProfile::standard_mp4(),
    );

    bounded(
        deadline,
        Stage::Submit,
        JobService::submit(&client, state, job_spec, artifact),
    )
    .await
}

async fn bounded<T>(
    deadline: Instant,
    stage: Stage,
    fut: impl Future<Output = Result<T, PipelineError>>,
) -> Result<T, PipelineError> {
    match timeout_at(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(PipelineError::Timeout { stage }),
    }
}
