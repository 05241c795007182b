//! Container build plan

use crate::buildplan::FileEntriesLayer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An in-memory, immutable description of the target container image.
///
/// The host build tool owns the plan; extensions mutate it only by
/// producing a new copy with added layers via [`to_builder`].
///
/// [`to_builder`]: ContainerBuildPlan::to_builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerBuildPlan {
    /// Base image reference
    pub base_image: Option<String>,

    /// Environment baked into the image
    pub environment: BTreeMap<String, String>,

    /// Container entrypoint
    pub entrypoint: Option<Vec<String>>,

    /// Layers in application order
    pub layers: Vec<FileEntriesLayer>,
}

impl ContainerBuildPlan {
    /// Copy this plan into a builder for extension.
    pub fn to_builder(&self) -> ContainerBuildPlanBuilder {
        ContainerBuildPlanBuilder {
            plan: self.clone(),
        }
    }
}

/// Builder producing an extended copy of a [`ContainerBuildPlan`]
#[derive(Debug, Default)]
pub struct ContainerBuildPlanBuilder {
    plan: ContainerBuildPlan,
}

impl ContainerBuildPlanBuilder {
    pub fn base_image(mut self, image: impl Into<String>) -> Self {
        self.plan.base_image = Some(image.into());
        self
    }

    pub fn entrypoint(mut self, entrypoint: Vec<String>) -> Self {
        self.plan.entrypoint = Some(entrypoint);
        self
    }

    pub fn add_layer(mut self, layer: FileEntriesLayer) -> Self {
        self.plan.layers.push(layer);
        self
    }

    pub fn build(self) -> ContainerBuildPlan {
        self.plan
    }
}
