use std::path::{Path, PathBuf};

/// A validated local media file plus the object key its bytes will be
/// stored under. Immutable once created; lives for a single run.
#[derive(Clone, Debug)]
pub struct ArtifactRef {
    local_path: PathBuf,
    object_key: String,
}

impl ArtifactRef {
    pub(crate) fn new(local_path: PathBuf, object_key: String) -> Self {
        Self {
            local_path,
            object_key,
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }
}
