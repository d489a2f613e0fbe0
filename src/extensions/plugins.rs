use serde::{Deserialize, Serialize};

use crate::core::{TooltipEventType, TooltipIndex, TooltipTrigger};
use crate::interaction::InteractionEventKind;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPluginContext {
    pub event_type: TooltipEventType,
    pub trigger: TooltipTrigger,
    pub active: bool,
    pub active_index: Option<TooltipIndex>,
    pub payloads_len: usize,
    pub rows_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipPluginEvent {
    InteractionApplied { kind: InteractionEventKind },
    PayloadsChanged { payloads_len: usize },
    ChartDataUpdated { rows_len: usize },
    WindowChanged { start: usize, end: usize },
    TooltipAxisChanged,
    PointerLayoutChanged,
    SearcherChanged,
}

/// Observer hook for tooltip state changes.
///
/// Plugins observe applied actions and read a context snapshot; they never
/// mutate the store directly.
pub trait TooltipPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TooltipPluginEvent, context: &TooltipPluginContext);
}
