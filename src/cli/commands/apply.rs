//! Apply command - run the extension against a build plan

use crate::buildplan::ContainerBuildPlan;
use crate::cli::args::ApplyArgs;
use crate::error::{JibFlagsError, JibFlagsResult};
use crate::extension::{BuildPlanExtension, JvmFlagsExtension};
use crate::project::Project;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Execute the apply command
pub async fn execute(args: ApplyArgs, project: &Project) -> JibFlagsResult<()> {
    let plan = match args.plan {
        Some(ref path) => read_plan(path).await?,
        None => {
            let mut builder = ContainerBuildPlan::default().to_builder();
            if let Some(image) = args.base_image {
                builder = builder.base_image(image);
            }
            builder.build()
        }
    };

    let properties = args.options.to_properties();
    let extended = JvmFlagsExtension.extend(plan, &properties, project).await?;

    let json = serde_json::to_string_pretty(&extended)?;
    match args.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n")).await.map_err(|e| {
                JibFlagsError::io(format!("writing build plan to {}", path.display()), e)
            })?;
            info!("Extended build plan written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

async fn read_plan(path: &Path) -> JibFlagsResult<ContainerBuildPlan> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        JibFlagsError::io(format!("reading build plan from {}", path.display()), e)
    })?;
    Ok(serde_json::from_str(&content)?)
}
