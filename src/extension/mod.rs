//! JVM flags build-plan extension
//!
//! Orchestrates the pipeline per build invocation: read the host
//! project's jib configuration, render the flags file, and append the
//! resulting layer to the build plan.

pub mod flagsfile;
pub mod properties;

pub use flagsfile::{JvmFlagsLayerPlan, CACHE_DIRECTORY_NAME, JIB_JVM_FLAGS_FILE, LAYER_JVM_FLAGS};
pub use properties::ExtensionProperties;

use crate::buildplan::{AbsoluteUnixPath, ContainerBuildPlan};
use crate::error::JibFlagsResult;
use crate::project::{PluginConfigLocation, Project};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

/// Plugin whose configuration carries the application root and flags.
pub const JIB_PLUGIN_ID: &str = "com.google.cloud.tools:jib-maven-plugin";

/// Application root used when the plugin configuration does not set one.
pub const DEFAULT_APP_ROOT: &str = "/app";

/// A build-plan extension invoked once per host build.
///
/// Implementations receive the current plan together with the host's
/// free-form string properties and project data, and return the plan
/// either unchanged or with additional layers appended.
#[async_trait]
pub trait BuildPlanExtension {
    async fn extend(
        &self,
        plan: ContainerBuildPlan,
        properties: &HashMap<String, String>,
        project: &Project,
    ) -> JibFlagsResult<ContainerBuildPlan>;
}

/// Extension that renders configured JVM flags into a file layer.
#[derive(Debug, Default)]
pub struct JvmFlagsExtension;

impl JvmFlagsExtension {
    fn app_root_location() -> PluginConfigLocation {
        PluginConfigLocation::new(JIB_PLUGIN_ID)
            .child("container")
            .child("appRoot")
    }

    fn jvm_flags_location() -> PluginConfigLocation {
        PluginConfigLocation::new(JIB_PLUGIN_ID)
            .child("container")
            .child("jvmFlags")
    }

    /// JVM flags configured on the host project, blank entries filtered.
    pub fn jvm_flags(project: &Project) -> Vec<String> {
        Self::jvm_flags_location().values(project)
    }

    /// Application root configured on the host project, or `/app`.
    pub fn app_root(project: &Project) -> JibFlagsResult<AbsoluteUnixPath> {
        let configured = Self::app_root_location()
            .value(project)
            .unwrap_or_else(|| DEFAULT_APP_ROOT.to_string());
        AbsoluteUnixPath::parse(configured)
    }
}

#[async_trait]
impl BuildPlanExtension for JvmFlagsExtension {
    async fn extend(
        &self,
        plan: ContainerBuildPlan,
        properties: &HashMap<String, String>,
        project: &Project,
    ) -> JibFlagsResult<ContainerBuildPlan> {
        info!("Running JVM flags extension");
        let properties = ExtensionProperties::from_map(properties);

        let jvm_flags = Self::jvm_flags(project);
        if jvm_flags.is_empty() && properties.skip_if_empty {
            info!("No JVM flags configured, skipping");
            return Ok(plan);
        }

        let mut layer_plan = JvmFlagsLayerPlan::new(project.build_dir(), jvm_flags);
        if let Some(separator) = properties.separator {
            layer_plan = layer_plan.separator(separator);
        }
        if let Some(filename) = properties.filename {
            layer_plan = layer_plan.filename(filename);
        }
        if let Some(mode) = properties.mode {
            layer_plan = layer_plan.mode(mode);
        }

        let layer = layer_plan.create(&Self::app_root(project)?).await?;
        Ok(plan.to_builder().add_layer(layer).build())
    }
}
