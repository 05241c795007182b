//! Layer descriptors
//!
//! A layer is a named set of file entries mapping files on the build
//! host into paths inside the image.

use crate::buildplan::{AbsoluteUnixPath, FilePermissions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single file mapping within a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File on the build host
    pub source: PathBuf,

    /// Absolute destination inside the image
    pub destination: AbsoluteUnixPath,

    /// Permission bits applied at extraction
    pub permissions: FilePermissions,
}

/// A named, addressable set of file mappings added to a build plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntriesLayer {
    /// Layer name shown in build output
    pub name: String,

    /// File mappings in extraction order
    pub entries: Vec<FileEntry>,
}

impl FileEntriesLayer {
    pub fn builder() -> FileEntriesLayerBuilder {
        FileEntriesLayerBuilder::default()
    }
}

/// Consuming builder for [`FileEntriesLayer`]
#[derive(Debug, Default)]
pub struct FileEntriesLayerBuilder {
    name: String,
    entries: Vec<FileEntry>,
}

impl FileEntriesLayerBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_entry(
        mut self,
        source: impl Into<PathBuf>,
        destination: AbsoluteUnixPath,
        permissions: FilePermissions,
    ) -> Self {
        self.entries.push(FileEntry {
            source: source.into(),
            destination,
            permissions,
        });
        self
    }

    pub fn build(self) -> FileEntriesLayer {
        FileEntriesLayer {
            name: self.name,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_entries() {
        let layer = FileEntriesLayer::builder()
            .name("jvm flags")
            .add_entry(
                "/tmp/flags",
                AbsoluteUnixPath::parse("/app/flags").unwrap(),
                FilePermissions::DEFAULT_FILE,
            )
            .build();

        assert_eq!(layer.name, "jvm flags");
        assert_eq!(layer.entries.len(), 1);
        assert_eq!(layer.entries[0].source, PathBuf::from("/tmp/flags"));
        assert_eq!(layer.entries[0].destination.as_str(), "/app/flags");
        assert_eq!(layer.entries[0].permissions.to_octal_string(), "644");
    }
}
