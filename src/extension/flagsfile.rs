//! Flags file rendering and layer creation
//!
//! Joined flags are written to `<build_dir>/jib-cache/<filename>` with a
//! conservative write: when the file already holds exactly the new
//! content, nothing is touched, so the mtime stays stable and downstream
//! layer caching does not churn across builds.

use crate::buildplan::{AbsoluteUnixPath, FileEntriesLayer, FilePermissions};
use crate::error::{JibFlagsError, JibFlagsResult};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Name of the layer appended to the build plan.
pub const LAYER_JVM_FLAGS: &str = "jvm flags";

/// Default name of the rendered flags file.
pub const JIB_JVM_FLAGS_FILE: &str = "jib-jvm-flags-file";

/// Subdirectory of the build dir holding rendered files across builds.
pub const CACHE_DIRECTORY_NAME: &str = "jib-cache";

/// The pending flags-file output: where it renders, how the flags are
/// joined, and how the resulting file maps into the image.
#[derive(Debug, Clone)]
pub struct JvmFlagsLayerPlan {
    build_dir: PathBuf,
    jvm_flags: Vec<String>,
    separator: String,
    filename: String,
    mode: String,
}

impl JvmFlagsLayerPlan {
    /// Plan a flags file under `build_dir`. Duplicate flags carry no
    /// meaning in the rendered file; the first occurrence wins.
    pub fn new(build_dir: impl Into<PathBuf>, jvm_flags: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let jvm_flags = jvm_flags
            .into_iter()
            .filter(|flag| seen.insert(flag.clone()))
            .collect();

        Self {
            build_dir: build_dir.into(),
            jvm_flags,
            separator: " ".to_string(),
            filename: JIB_JVM_FLAGS_FILE.to_string(),
            mode: FilePermissions::DEFAULT_FILE.to_octal_string(),
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Render the flags file and package it as a layer placing the file
    /// under `directory_in_container`.
    pub async fn create(
        &self,
        directory_in_container: &AbsoluteUnixPath,
    ) -> JibFlagsResult<FileEntriesLayer> {
        debug!("Creating '{}' layer with {:?}", LAYER_JVM_FLAGS, self);
        let permissions = FilePermissions::from_octal_str(&self.mode)?;
        let source = self.render().await?;
        let destination = directory_in_container.resolve(&self.filename);
        info!("Adding layer containing '{}' file to the image", destination);

        Ok(FileEntriesLayer::builder()
            .name(LAYER_JVM_FLAGS)
            .add_entry(source, destination, permissions)
            .build())
    }

    /// Join the flags and write them to the cache file, returning its
    /// path. The file keeps its mtime when the content is unchanged.
    pub async fn render(&self) -> JibFlagsResult<PathBuf> {
        let content = self.jvm_flags.join(&self.separator);
        info!("JVM flags configured: [{}]", content);

        let path = self
            .build_dir
            .join(CACHE_DIRECTORY_NAME)
            .join(&self.filename);
        write_conservatively(&path, &content).await?;
        debug!("Flags file digest: sha256:{}", content_digest(&content));

        Ok(path)
    }
}

/// Whether a conservative write must touch the file: only when there is
/// no existing content or the existing content differs.
pub fn should_write(existing: Option<&str>, content: &str) -> bool {
    existing != Some(content)
}

/// Write `content` to `path` unless the file already holds exactly that
/// content. Parent directories are created as needed.
pub async fn write_conservatively(path: &Path, content: &str) -> JibFlagsResult<()> {
    let existing = match fs::read_to_string(path).await {
        Ok(current) => Some(current),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(JibFlagsError::io(
                format!("reading {}", path.display()),
                e,
            ));
        }
    };

    if !should_write(existing.as_deref(), content) {
        debug!("Flags file unchanged, skipping write: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            JibFlagsError::io(format!("creating directory {}", parent.display()), e)
        })?;
    }
    fs::write(path, content)
        .await
        .map_err(|e| JibFlagsError::io(format!("writing {}", path.display()), e))
}

/// Hex SHA256 of the rendered content.
pub fn content_digest(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
