//! CLI argument definitions using clap derive

use crate::extension::properties::{
    PROPERTY_FILENAME, PROPERTY_MODE, PROPERTY_SEPARATOR, PROPERTY_SKIP_IF_EMPTY,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

/// Jibflags - JVM flags file layer extension
///
/// Renders JVM flags from the host project's plugin configuration into
/// a flags file and appends it as a layer to a container build plan.
#[derive(Parser, Debug)]
#[command(name = "jibflags")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project manifest path
    #[arg(short, long, global = true, env = "JIBFLAGS_PROJECT")]
    pub project: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the JVM flags configured on the project
    Flags,

    /// Render the flags file into the project's build directory
    Render(RenderArgs),

    /// Apply the extension to a container build plan
    Apply(ApplyArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub options: ExtensionOpts,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Build plan JSON to extend (defaults to an empty plan)
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Base image for the starting plan when no --plan is given
    #[arg(long, conflicts_with = "plan")]
    pub base_image: Option<String>,

    /// Write the extended plan here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: ExtensionOpts,
}

/// Extension options shared by render and apply, mirroring the
/// property map the host build tool would pass.
#[derive(Args, Debug, Default)]
pub struct ExtensionOpts {
    /// Skip when no flags are configured
    #[arg(long)]
    pub skip_if_empty: bool,

    /// Separator used to join flags
    #[arg(long)]
    pub separator: Option<String>,

    /// Name of the rendered flags file
    #[arg(long)]
    pub filename: Option<String>,

    /// Octal permission mode for the file inside the image
    #[arg(long)]
    pub mode: Option<String>,
}

impl ExtensionOpts {
    /// Translate the CLI options into the host-facing property map.
    pub fn to_properties(&self) -> HashMap<String, String> {
        let mut properties = HashMap::new();
        if self.skip_if_empty {
            properties.insert(PROPERTY_SKIP_IF_EMPTY.to_string(), "true".to_string());
        }
        if let Some(ref separator) = self.separator {
            properties.insert(PROPERTY_SEPARATOR.to_string(), separator.clone());
        }
        if let Some(ref filename) = self.filename {
            properties.insert(PROPERTY_FILENAME.to_string(), filename.clone());
        }
        if let Some(ref mode) = self.mode {
            properties.insert(PROPERTY_MODE.to_string(), mode.clone());
        }
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_properties_omits_unset_options() {
        let opts = ExtensionOpts::default();
        assert!(opts.to_properties().is_empty());
    }

    #[test]
    fn to_properties_maps_set_options() {
        let opts = ExtensionOpts {
            skip_if_empty: true,
            separator: Some(", ".to_string()),
            filename: Some("jvm.options".to_string()),
            mode: Some("755".to_string()),
        };

        let properties = opts.to_properties();
        assert_eq!(properties.get("skipIfEmpty").map(String::as_str), Some("true"));
        assert_eq!(properties.get("separator").map(String::as_str), Some(", "));
        assert_eq!(properties.get("filename").map(String::as_str), Some("jvm.options"));
        assert_eq!(properties.get("mode").map(String::as_str), Some("755"));
    }
}
