//! Flags command - print the configured JVM flags

use crate::error::JibFlagsResult;
use crate::extension::JvmFlagsExtension;
use crate::project::Project;

/// Execute the flags command
pub async fn execute(project: &Project) -> JibFlagsResult<()> {
    let flags = JvmFlagsExtension::jvm_flags(project);

    if flags.is_empty() {
        println!("No JVM flags configured");
        return Ok(());
    }

    for flag in flags {
        println!("{flag}");
    }

    Ok(())
}
