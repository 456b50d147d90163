//! Poetry (Python) project adapter

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use toml_edit::DocumentMut;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;
use which::which;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use liftoff_core::error::AdapterError;

use crate::artifacts::ArtifactSet;
use crate::traits::ProjectAdapter;
use crate::Result;

/// Python project adapter backed by Poetry
///
/// Builds a wheel and sdist with `poetry build`, assembles an executable
/// zipapp on top, and publishes through `poetry publish`.
pub struct PoetryAdapter;

impl PoetryAdapter {
    /// Create a new Poetry adapter
    pub fn new() -> Self {
        Self
    }

    /// Get the pyproject.toml path
    fn manifest_path(&self, path: &Path) -> PathBuf {
        path.join("pyproject.toml")
    }

    /// Load pyproject.toml
    fn load_manifest(&self, path: &Path) -> Result<DocumentMut> {
        let manifest = self.manifest_path(path);
        let content = std::fs::read_to_string(&manifest)
            .map_err(|_| AdapterError::ManifestNotFound(manifest))?;

        content
            .parse()
            .map_err(|e: toml_edit::TomlError| AdapterError::ManifestParseError(e.to_string()))
    }

    /// Read a string field from the [tool.poetry] table
    fn poetry_field(doc: &DocumentMut, field: &'static str) -> Option<String> {
        doc.get("tool")
            .and_then(|t| t.get("poetry"))
            .and_then(|p| p.get(field))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Resolve the poetry binary
    fn poetry_binary(&self) -> Result<PathBuf> {
        which("poetry").map_err(|_| AdapterError::ToolNotFound("poetry"))
    }

    /// Assemble an executable zipapp from the package module directory
    ///
    /// Mirrors what `python -m zipapp` produces: an optional interpreter
    /// shebang followed by a zip of the module contents.
    fn create_zipapp(&self, path: &Path, name: &str, dist: &Path) -> Result<PathBuf> {
        let module_dir = path.join(name.replace('-', "_"));
        if !module_dir.is_dir() {
            return Err(AdapterError::BuildFailed(format!(
                "package module directory not found: {}",
                module_dir.display()
            )));
        }

        let target = dist.join(format!("{}.pyz", name));
        let mut file = File::create(&target)?;

        if let Some(interpreter) = find_python_interpreter() {
            writeln!(file, "#!{}", interpreter.display())?;
        }

        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for entry in WalkDir::new(&module_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| AdapterError::BuildFailed(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&module_dir)
                .map_err(|e| AdapterError::BuildFailed(e.to_string()))?;
            writer
                .start_file(rel.to_string_lossy().into_owned(), options)
                .map_err(|e| AdapterError::BuildFailed(e.to_string()))?;
            let mut source = File::open(entry.path())?;
            std::io::copy(&mut source, &mut writer)?;
        }

        writer
            .finish()
            .map_err(|e| AdapterError::BuildFailed(e.to_string()))?;

        debug!(target = %target.display(), "assembled zipapp");
        Ok(target)
    }
}

impl Default for PoetryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectAdapter for PoetryAdapter {
    fn name(&self) -> &'static str {
        "poetry"
    }

    fn detect(&self, path: &Path) -> bool {
        if !self.manifest_path(path).exists() {
            debug!(adapter = "poetry", path = %path.display(), found = false, "detecting project");
            return false;
        }

        let found = self
            .load_manifest(path)
            .map(|doc| doc.get("tool").and_then(|t| t.get("poetry")).is_some())
            .unwrap_or(false);
        debug!(adapter = "poetry", path = %path.display(), found, "detecting project");
        found
    }

    fn manifest_names(&self) -> &[&str] {
        &["pyproject.toml"]
    }

    fn project_name(&self, path: &Path) -> Result<String> {
        let doc = self.load_manifest(path)?;
        Self::poetry_field(&doc, "name").ok_or(AdapterError::MissingField("tool.poetry.name"))
    }

    fn project_version(&self, path: &Path) -> Result<String> {
        let doc = self.load_manifest(path)?;
        Self::poetry_field(&doc, "version").ok_or(AdapterError::MissingField("tool.poetry.version"))
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn build(&self, path: &Path) -> Result<ArtifactSet> {
        let poetry = self.poetry_binary()?;
        let name = self.project_name(path)?;

        info!(project = %name, "building wheel and sdist");
        let output = Command::new(&poetry)
            .arg("build")
            .current_dir(path)
            .output()?;
        if !output.status.success() {
            return Err(AdapterError::BuildFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let dist = path.join("dist");
        self.create_zipapp(path, &name, &dist)?;

        let mut files: Vec<PathBuf> = std::fs::read_dir(&dist)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(AdapterError::NoArtifacts(dist));
        }

        info!(count = files.len(), dir = %dist.display(), "build finished");
        Ok(ArtifactSet::new(dist, files))
    }

    #[instrument(skip(self, username, password), fields(path = %path.display()))]
    fn publish(&self, path: &Path, username: &str, password: &str) -> Result<()> {
        let poetry = self.poetry_binary()?;

        info!("publishing to package index");
        let output = Command::new(&poetry)
            .args(["publish", "-u", username, "-p", password])
            .current_dir(path)
            .output()?;
        if !output.status.success() {
            return Err(AdapterError::PublishFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        info!("published to package index");
        Ok(())
    }
}

/// Find a python interpreter for the zipapp shebang
fn find_python_interpreter() -> Option<PathBuf> {
    ["python3", "python", "py3", "py"]
        .iter()
        .find_map(|name| which(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, name: &str, version: &str) {
        let content = format!(
            "[tool.poetry]\nname = \"{}\"\nversion = \"{}\"\n",
            name, version
        );
        std::fs::write(dir.join("pyproject.toml"), content).unwrap();
    }

    #[test]
    fn test_detect_poetry_project() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "demo", "0.1.0");

        let adapter = PoetryAdapter::new();
        assert!(adapter.detect(temp.path()));
    }

    #[test]
    fn test_detect_rejects_non_poetry_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pyproject.toml"),
            "[project]\nname = \"demo\"\n",
        )
        .unwrap();

        let adapter = PoetryAdapter::new();
        assert!(!adapter.detect(temp.path()));
    }

    #[test]
    fn test_detect_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let adapter = PoetryAdapter::new();
        assert!(!adapter.detect(temp.path()));
    }

    #[test]
    fn test_read_name_and_version() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "demo-tool", "1.2.3");

        let adapter = PoetryAdapter::new();
        assert_eq!(adapter.project_name(temp.path()).unwrap(), "demo-tool");
        assert_eq!(adapter.project_version(temp.path()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_missing_version_field() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pyproject.toml"),
            "[tool.poetry]\nname = \"demo\"\n",
        )
        .unwrap();

        let adapter = PoetryAdapter::new();
        assert!(matches!(
            adapter.project_version(temp.path()),
            Err(AdapterError::MissingField("tool.poetry.version"))
        ));
    }

    #[test]
    fn test_create_zipapp() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "demo-tool", "1.2.3");

        let module_dir = temp.path().join("demo_tool");
        std::fs::create_dir(&module_dir).unwrap();
        std::fs::write(module_dir.join("__main__.py"), "print('hi')\n").unwrap();

        let dist = temp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let adapter = PoetryAdapter::new();
        let target = adapter
            .create_zipapp(temp.path(), "demo-tool", &dist)
            .unwrap();

        assert_eq!(target, dist.join("demo-tool.pyz"));
        assert!(target.exists());
        assert!(std::fs::metadata(&target).unwrap().len() > 0);
    }

    #[test]
    fn test_zipapp_requires_module_dir() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let adapter = PoetryAdapter::new();
        let result = adapter.create_zipapp(temp.path(), "demo-tool", &dist);
        assert!(matches!(result, Err(AdapterError::BuildFailed(_))));
    }
}
