//! Render command - write the flags file without touching a build plan

use crate::cli::args::RenderArgs;
use crate::error::JibFlagsResult;
use crate::extension::{ExtensionProperties, JvmFlagsExtension, JvmFlagsLayerPlan};
use crate::project::Project;

/// Execute the render command
pub async fn execute(args: RenderArgs, project: &Project) -> JibFlagsResult<()> {
    let properties = ExtensionProperties::from_map(&args.options.to_properties());

    let jvm_flags = JvmFlagsExtension::jvm_flags(project);
    if jvm_flags.is_empty() && properties.skip_if_empty {
        println!("No JVM flags configured, nothing to render");
        return Ok(());
    }

    let mut layer_plan = JvmFlagsLayerPlan::new(project.build_dir(), jvm_flags);
    if let Some(separator) = properties.separator {
        layer_plan = layer_plan.separator(separator);
    }
    if let Some(filename) = properties.filename {
        layer_plan = layer_plan.filename(filename);
    }

    let path = layer_plan.render().await?;
    println!("{}", path.display());

    Ok(())
}
