use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Pipeline stages, in execution order. Used to attribute failures so
/// "your file is bad", "the service rejected it" and "the network timed
/// out" stay distinguishable for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Login,
    Validate,
    Upload,
    ResolveEndpoint,
    Submit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Login => "login",
            Stage::Validate => "validate",
            Stage::Upload => "upload",
            Stage::ResolveEndpoint => "resolve-endpoint",
            Stage::Submit => "submit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("input path is a directory, not a file: {}", .0.display())]
    InvalidKind(PathBuf),

    #[error("failed to resolve AWS credentials: {0}")]
    Auth(#[source] BoxError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to upload s3://{bucket}/{key}: {source}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("endpoint discovery failed: {0}")]
    Discovery(#[source] BoxError),

    #[error("conversion service returned no endpoints for this account")]
    NoEndpoint,

    #[error("job submission rejected: {0}")]
    Submission(#[source] BoxError),

    #[error("run deadline exceeded during the {stage} stage")]
    Timeout { stage: Stage },
}

impl PipelineError {
    /// The stage a failure belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::NotFound(_) | PipelineError::InvalidKind(_) => Stage::Validate,
            PipelineError::Auth(_) => Stage::Login,
            PipelineError::Io { .. } | PipelineError::Upload { .. } => Stage::Upload,
            PipelineError::Discovery(_) | PipelineError::NoEndpoint => Stage::ResolveEndpoint,
            PipelineError::Submission(_) => Stage::Submit,
            PipelineError::Timeout { stage } => *stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_attribute_their_stage() {
        assert_eq!(
            PipelineError::NotFound("clip.mov".into()).stage(),
            Stage::Validate
        );
        assert_eq!(PipelineError::NoEndpoint.stage(), Stage::ResolveEndpoint);
        assert_eq!(
            PipelineError::Timeout {
                stage: Stage::Upload
            }
            .stage(),
            Stage::Upload
        );
    }
}
