use super::model::ArtifactRef;
use crate::common::error::PipelineError;
use crate::state::AppState;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

pub struct ArtifactService;

impl ArtifactService {
    /// Checks that `path` is an existing regular file and derives the
    /// object key from its basename. Deliberately nothing more: no
    /// extension check, no size check.
    pub fn validate(path: &Path) -> Result<ArtifactRef, PipelineError> {
        let meta = match std::fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PipelineError::NotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(PipelineError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        if meta.is_dir() {
            return Err(PipelineError::InvalidKind(path.to_path_buf()));
        }

        let object_key = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| PipelineError::InvalidKind(path.to_path_buf()))?;

        info!("✅ Input file is valid: {}", path.display());
        Ok(ArtifactRef::new(path.to_path_buf(), object_key))
    }

    /// Streams the artifact into the source bucket under its object
    /// key.
    pub async fn upload(state: &AppState, artifact: &ArtifactRef) -> Result<(), PipelineError> {
        info!(
            "⬆️ Uploading {} to s3://{}/{}",
            artifact.local_path().display(),
            state.config.source_bucket,
            artifact.object_key()
        );
        state
            .storage
            .put_file(artifact.object_key(), artifact.local_path())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_found() {
        let err = ArtifactService::validate(Path::new("/definitely/not/here.mov")).unwrap_err();
        assert!(matches!(err, PipelineError::NotFound(_)));
    }

    #[test]
    fn directory_is_invalid_kind() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArtifactService::validate(dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidKind(_)));
    }

    #[test]
    fn object_key_is_the_basename() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let file = nested.join("video.mov");
        std::fs::write(&file, b"not really a video").unwrap();

        let artifact = ArtifactService::validate(&file).unwrap();
        assert_eq!(artifact.object_key(), "video.mov");
        assert_eq!(artifact.local_path(), file.as_path());
    }
}
