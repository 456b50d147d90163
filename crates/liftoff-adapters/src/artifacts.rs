//! Built artifact handling

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Result;

/// The kind of a built artifact, by filename suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Python wheel (.whl)
    Wheel,
    /// Executable zip application (.pyz)
    ZipApp,
    /// Source distribution archive (.tar.gz)
    Sdist,
}

impl ArtifactKind {
    /// Classify a file by its suffix; unknown suffixes get no kind
    pub fn for_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".whl") {
            Some(Self::Wheel)
        } else if name.ends_with(".pyz") {
            Some(Self::ZipApp)
        } else if name.ends_with(".tar.gz") {
            Some(Self::Sdist)
        } else {
            None
        }
    }

    /// Human-readable label used when uploading the asset
    pub fn label(self) -> &'static str {
        match self {
            Self::Wheel => "Wheel Binary",
            Self::ZipApp => "ZipApp",
            Self::Sdist => "Source Distribution",
        }
    }
}

/// A set of built artifacts sharing one output directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSet {
    /// Directory all artifacts live under
    pub dir: PathBuf,
    /// Artifact file paths in build order
    pub files: Vec<PathBuf>,
}

impl ArtifactSet {
    /// Create a new artifact set
    pub fn new(dir: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    /// Iterate artifacts with their classified kinds
    pub fn classified(&self) -> impl Iterator<Item = (&Path, Option<ArtifactKind>)> {
        self.files
            .iter()
            .map(|f| (f.as_path(), ArtifactKind::for_path(f)))
    }

    /// Remove the whole output directory
    pub fn delete(self) -> Result<()> {
        debug!(dir = %self.dir.display(), "removing artifact directory");
        std::fs::remove_dir_all(&self.dir)?;
        info!(dir = %self.dir.display(), "artifact directory removed");
        Ok(())
    }
}
