use crate::extensions::{TooltipPluginContext, TooltipPluginEvent};

use super::{ChartStore, resolve_active_index, resolve_is_active};

impl ChartStore {
    pub(super) fn plugin_context(&self) -> TooltipPluginContext {
        let event_type = self.config.tooltip_event_type;
        let trigger = self.config.trigger;
        let default_index = self.config.default_index.as_ref();
        TooltipPluginContext {
            event_type,
            trigger,
            active: resolve_is_active(&self.state, event_type, trigger, default_index),
            active_index: resolve_active_index(&self.state, event_type, trigger, default_index),
            payloads_len: self.state.payloads().len(),
            rows_len: self.state.chart_data().chart_data().len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: TooltipPluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, &context);
        }
    }
}
