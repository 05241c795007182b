//! Container build plan model
//!
//! An in-memory description of the image being assembled. Plans are
//! immutable; adding a layer produces a new plan through the builder.

pub mod layer;
pub mod path;
pub mod permissions;
pub mod plan;

pub use layer::{FileEntriesLayer, FileEntry};
pub use path::AbsoluteUnixPath;
pub use permissions::FilePermissions;
pub use plan::ContainerBuildPlan;
