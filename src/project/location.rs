//! Plugin configuration lookup
//!
//! A [`PluginConfigLocation`] names a plugin id plus an ordered path of
//! nested keys under that plugin's configuration tree. Lookups walk the
//! tree one key at a time and resolve to absence instead of erroring
//! when the plugin, any intermediate node, or the leaf is missing.

use crate::project::Project;

/// Location of a configuration value inside a plugin's config tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfigLocation {
    plugin_id: String,
    path: Vec<String>,
}

impl PluginConfigLocation {
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            path: Vec::new(),
        }
    }

    /// Append a nested key to the lookup path.
    pub fn child(mut self, key: impl Into<String>) -> Self {
        self.path.push(key.into());
        self
    }

    /// Resolve to the configuration node, if present.
    pub fn node<'a>(&self, project: &'a Project) -> Option<&'a toml::Value> {
        let mut node = project.plugin(&self.plugin_id)?;
        for key in &self.path {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// Resolve to a scalar string value.
    pub fn value(&self, project: &Project) -> Option<String> {
        self.node(project)
            .and_then(toml::Value::as_str)
            .map(str::to_string)
    }

    /// Resolve to the list of string items, blank entries filtered.
    pub fn values(&self, project: &Project) -> Vec<String> {
        self.node(project)
            .and_then(toml::Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(toml::Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
