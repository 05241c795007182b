//! Absolute Unix-style paths inside the image
//!
//! Container paths are `/`-joined regardless of the build host platform,
//! so they are kept as validated strings rather than `PathBuf`s.

use crate::error::{JibFlagsError, JibFlagsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An absolute Unix-style path inside the target image.
///
/// Always starts with `/`. Trailing slashes are normalized away, except
/// for the root path itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsoluteUnixPath(String);

impl AbsoluteUnixPath {
    /// Parse an absolute container path, rejecting relative ones.
    pub fn parse(path: impl Into<String>) -> JibFlagsResult<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(JibFlagsError::PathInvalid {
                path,
                reason: "container paths must be absolute".to_string(),
            });
        }
        let normalized = match path.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        Ok(Self(normalized))
    }

    /// Resolve a child component against this path.
    pub fn resolve(&self, name: &str) -> Self {
        if self.0 == "/" {
            Self(format!("/{name}"))
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbsoluteUnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AbsoluteUnixPath {
    type Error = JibFlagsError;

    fn try_from(value: String) -> JibFlagsResult<Self> {
        Self::parse(value)
    }
}

impl From<AbsoluteUnixPath> for String {
    fn from(path: AbsoluteUnixPath) -> Self {
        path.0
    }
}
