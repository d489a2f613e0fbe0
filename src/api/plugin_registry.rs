use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::TooltipPlugin;

use super::ChartStore;

impl ChartStore {
    /// Attaches a tooltip observer. It sees every action dispatched from now
    /// on, after the state has been updated.
    ///
    /// Observer ids are unique per store and must not be empty.
    pub fn register_plugin(&mut self, plugin: Box<dyn TooltipPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "tooltip plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "tooltip plugin `{plugin_id}` is already attached"
            )));
        }
        debug!(plugin_id, observers = self.plugins.len() + 1, "tooltip plugin attached");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the observer with `plugin_id`; later actions are not reported
    /// to it. Returns `false` when no such observer is attached.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        before != self.plugins.len()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }
}
