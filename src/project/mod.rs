//! Host project model
//!
//! The extension reads its input from the host build tool's project:
//! the build output directory and the per-plugin configuration trees
//! declared in the project manifest.

pub mod location;

pub use location::PluginConfigLocation;

use crate::error::{JibFlagsError, JibFlagsResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Manifest file name expected in a project directory.
pub const PROJECT_MANIFEST: &str = "project.toml";

/// A host project as seen by build-plan extensions.
#[derive(Debug, Clone)]
pub struct Project {
    build_dir: PathBuf,
    plugins: BTreeMap<String, toml::Value>,
}

/// On-disk manifest shape
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ProjectManifest {
    project: ProjectSection,
    plugins: BTreeMap<String, toml::Value>,
}

impl Default for ProjectManifest {
    fn default() -> Self {
        Self {
            project: ProjectSection::default(),
            plugins: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ProjectSection {
    build_dir: PathBuf,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("target"),
        }
    }
}

impl Project {
    /// Create an in-memory project with no plugin configuration.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            plugins: BTreeMap::new(),
        }
    }

    /// Attach a plugin's configuration tree.
    pub fn with_plugin(mut self, id: impl Into<String>, configuration: toml::Value) -> Self {
        self.plugins.insert(id.into(), configuration);
        self
    }

    /// Load a project from its manifest file.
    ///
    /// A relative `build_dir` resolves against the manifest's directory.
    pub async fn load(manifest_path: &Path) -> JibFlagsResult<Self> {
        let content = match fs::read_to_string(manifest_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(JibFlagsError::ConfigNotFound(manifest_path.to_path_buf()));
            }
            Err(e) => {
                return Err(JibFlagsError::io(
                    format!("reading project manifest {}", manifest_path.display()),
                    e,
                ));
            }
        };

        let manifest: ProjectManifest =
            toml::from_str(&content).map_err(|e| JibFlagsError::ConfigInvalid {
                path: manifest_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let build_dir = if manifest.project.build_dir.is_absolute() {
            manifest.project.build_dir
        } else {
            manifest_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(manifest.project.build_dir)
        };
        debug!("Loaded project manifest, build dir: {}", build_dir.display());

        Ok(Self {
            build_dir,
            plugins: manifest.plugins,
        })
    }

    /// Build output directory, where the flags cache file lives.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Configuration tree of the named plugin, if declared.
    pub fn plugin(&self, id: &str) -> Option<&toml::Value> {
        self.plugins.get(id)
    }
}
