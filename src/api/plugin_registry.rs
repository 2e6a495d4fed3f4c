use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartDecorator, ChartPlugin};

use super::ChartRuntime;

impl ChartRuntime {
    /// Registers a plugin. Ids must be non-empty and unique.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|entry| entry.id() == plugin_id)
    }

    /// Registers a decorator. Decorators draw in registration order.
    pub fn register_decorator(&mut self, decorator: Box<dyn ChartDecorator>) -> ChartResult<()> {
        let decorator_id = decorator.id().to_owned();
        if decorator_id.is_empty() {
            return Err(ChartError::InvalidData(
                "decorator id must not be empty".to_owned(),
            ));
        }
        if self
            .decorators
            .iter()
            .any(|entry| entry.id() == decorator_id)
        {
            return Err(ChartError::InvalidData(format!(
                "decorator with id `{decorator_id}` is already registered"
            )));
        }
        self.decorators.push(decorator);
        Ok(())
    }

    /// Unregisters a decorator by id. Returns `true` when removed.
    pub fn unregister_decorator(&mut self, decorator_id: &str) -> bool {
        let before = self.decorators.len();
        self.decorators.retain(|entry| entry.id() != decorator_id);
        self.decorators.len() != before
    }

    #[must_use]
    pub fn decorator_count(&self) -> usize {
        self.decorators.len()
    }
}
