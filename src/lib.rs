//! Jibflags - JVM flags file layer extension
//!
//! Reads JVM flags from a host project's plugin configuration, renders
//! them into a small flags file an entrypoint script can source, and
//! appends that file as a new layer to an in-memory container build plan.

pub mod buildplan;
pub mod cli;
pub mod error;
pub mod extension;
pub mod project;

pub use error::{JibFlagsError, JibFlagsResult};
