//! File permission modes for layer entries

use crate::error::{JibFlagsError, JibFlagsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix permission bits applied to a file entry when the layer is
/// extracted into the image.
///
/// Parsed from a three-octal-digit string such as `"644"` or `"755"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilePermissions(u32);

impl FilePermissions {
    /// Standard permissions for files placed in the image (rw-r--r--).
    pub const DEFAULT_FILE: Self = Self(0o644);

    /// Parse a three-octal-digit mode string.
    pub fn from_octal_str(mode: &str) -> JibFlagsResult<Self> {
        if mode.len() != 3 || !mode.bytes().all(|b| b.is_ascii_digit() && b < b'8') {
            return Err(JibFlagsError::ModeInvalid(mode.to_string()));
        }
        let bits = u32::from_str_radix(mode, 8)
            .map_err(|_| JibFlagsError::ModeInvalid(mode.to_string()))?;
        Ok(Self(bits))
    }

    pub fn to_octal_string(self) -> String {
        format!("{:03o}", self.0)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FilePermissions {
    fn default() -> Self {
        Self::DEFAULT_FILE
    }
}

impl fmt::Display for FilePermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_octal_string())
    }
}

impl TryFrom<String> for FilePermissions {
    type Error = JibFlagsError;

    fn try_from(value: String) -> JibFlagsResult<Self> {
        Self::from_octal_str(&value)
    }
}

impl From<FilePermissions> for String {
    fn from(permissions: FilePermissions) -> Self {
        permissions.to_octal_string()
    }
}
