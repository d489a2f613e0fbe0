use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{ArrayTooltipSearcher, DataKey, TooltipPayloadSearcher, slice_window};
use crate::interaction::{InteractionEvent, TooltipInteractionState};

use super::{PointerLayout, TooltipPayloadConfiguration, TooltipPayloadId, TooltipPayloadRegistry};

/// Chart data currently in view, with the inclusive brush window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataState {
    chart_data: Arc<[Value]>,
    data_start_index: usize,
    data_end_index: usize,
}

impl Default for ChartDataState {
    fn default() -> Self {
        Self {
            chart_data: Arc::from(Vec::new()),
            data_start_index: 0,
            data_end_index: 0,
        }
    }
}

impl ChartDataState {
    /// Data with a window spanning every row.
    #[must_use]
    pub fn new(chart_data: Vec<Value>) -> Self {
        let mut state = Self::default();
        state.replace_data(chart_data);
        state
    }

    #[must_use]
    pub fn with_window(mut self, start: usize, end: usize) -> Self {
        self.data_start_index = start;
        self.data_end_index = end;
        self
    }

    #[must_use]
    pub fn chart_data(&self) -> &[Value] {
        &self.chart_data
    }

    #[must_use]
    pub fn data_start_index(&self) -> usize {
        self.data_start_index
    }

    #[must_use]
    pub fn data_end_index(&self) -> usize {
        self.data_end_index
    }

    /// Rows inside the brush window.
    #[must_use]
    pub fn windowed(&self) -> &[Value] {
        slice_window(&self.chart_data, self.data_start_index, self.data_end_index)
    }

    fn replace_data(&mut self, chart_data: Vec<Value>) {
        if !chart_data.is_empty() {
            self.data_end_index = chart_data.len() - 1;
        }
        self.chart_data = Arc::from(chart_data);
    }
}

/// Settings of the axis tooltips are anchored to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipAxisSettings {
    pub data_key: Option<DataKey>,
}

/// Chart-level options that shape payload lookup and pointer projection.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub tooltip_axis: TooltipAxisSettings,
    pub pointer_layout: Option<PointerLayout>,
    pub searcher: Arc<dyn TooltipPayloadSearcher>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            tooltip_axis: TooltipAxisSettings::default(),
            pointer_layout: None,
            searcher: Arc::new(ArrayTooltipSearcher),
        }
    }
}

/// Every mutation the chart state accepts.
#[derive(Debug, Clone)]
pub enum ChartAction {
    Interaction(InteractionEvent),
    AddTooltipPayload {
        id: TooltipPayloadId,
        configuration: Arc<TooltipPayloadConfiguration>,
    },
    ReplaceTooltipPayload {
        id: TooltipPayloadId,
        configuration: Arc<TooltipPayloadConfiguration>,
    },
    RemoveTooltipPayload {
        id: TooltipPayloadId,
    },
    SetChartData(Vec<Value>),
    SetDataWindow {
        start: usize,
        end: usize,
    },
    SetTooltipAxis(TooltipAxisSettings),
    SetPointerLayout(Option<PointerLayout>),
    SetSearcher(Arc<dyn TooltipPayloadSearcher>),
}

impl ChartAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interaction(_) => "interaction",
            Self::AddTooltipPayload { .. } => "add_tooltip_payload",
            Self::ReplaceTooltipPayload { .. } => "replace_tooltip_payload",
            Self::RemoveTooltipPayload { .. } => "remove_tooltip_payload",
            Self::SetChartData(_) => "set_chart_data",
            Self::SetDataWindow { .. } => "set_data_window",
            Self::SetTooltipAxis(_) => "set_tooltip_axis",
            Self::SetPointerLayout(_) => "set_pointer_layout",
            Self::SetSearcher(_) => "set_searcher",
        }
    }
}

/// Immutable snapshot of one chart's tooltip-relevant state.
///
/// Slices are reference counted. [`ChartState::reduce`] replaces only the
/// slice an action touches, and keeps the previous allocation when the action
/// leaves the slice unchanged, so pointer identity of a slice tracks change.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    interaction: Arc<TooltipInteractionState>,
    payloads: Arc<TooltipPayloadRegistry>,
    chart_data: Arc<ChartDataState>,
    options: Arc<ChartOptions>,
}

impl ChartState {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options: Arc::new(options),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn interaction(&self) -> &TooltipInteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn payloads(&self) -> &TooltipPayloadRegistry {
        &self.payloads
    }

    #[must_use]
    pub fn chart_data(&self) -> &ChartDataState {
        &self.chart_data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn chart_data_arc(&self) -> &Arc<ChartDataState> {
        &self.chart_data
    }

    #[must_use]
    pub fn interaction_arc(&self) -> &Arc<TooltipInteractionState> {
        &self.interaction
    }

    #[must_use]
    pub fn options_arc(&self) -> &Arc<ChartOptions> {
        &self.options
    }

    #[must_use]
    pub fn searcher(&self) -> &Arc<dyn TooltipPayloadSearcher> {
        &self.options.searcher
    }

    /// Returns the state after `action`; `self` is left untouched.
    #[must_use]
    pub fn reduce(&self, action: ChartAction) -> Self {
        let mut next = self.clone();
        match action {
            ChartAction::Interaction(event) => {
                let mut interaction = (*self.interaction).clone();
                interaction.apply(&event);
                if interaction != *self.interaction {
                    next.interaction = Arc::new(interaction);
                }
            }
            ChartAction::AddTooltipPayload { id, configuration } => {
                let mut payloads = (*self.payloads).clone();
                payloads.upsert(id, configuration);
                next.payloads = Arc::new(payloads);
            }
            ChartAction::ReplaceTooltipPayload { id, configuration } => {
                let mut payloads = (*self.payloads).clone();
                if payloads.replace(id, configuration) {
                    next.payloads = Arc::new(payloads);
                }
            }
            ChartAction::RemoveTooltipPayload { id } => {
                let mut payloads = (*self.payloads).clone();
                if payloads.remove(id) {
                    next.payloads = Arc::new(payloads);
                }
            }
            ChartAction::SetChartData(rows) => {
                let mut chart_data = (*self.chart_data).clone();
                chart_data.replace_data(rows);
                next.chart_data = Arc::new(chart_data);
            }
            ChartAction::SetDataWindow { start, end } => {
                if self.chart_data.data_start_index != start
                    || self.chart_data.data_end_index != end
                {
                    let chart_data = (*self.chart_data).clone().with_window(start, end);
                    next.chart_data = Arc::new(chart_data);
                }
            }
            ChartAction::SetTooltipAxis(settings) => {
                if self.options.tooltip_axis != settings {
                    let mut options = (*self.options).clone();
                    options.tooltip_axis = settings;
                    next.options = Arc::new(options);
                }
            }
            ChartAction::SetPointerLayout(layout) => {
                if self.options.pointer_layout != layout {
                    let mut options = (*self.options).clone();
                    options.pointer_layout = layout;
                    next.options = Arc::new(options);
                }
            }
            ChartAction::SetSearcher(searcher) => {
                let mut options = (*self.options).clone();
                options.searcher = searcher;
                next.options = Arc::new(options);
            }
        }
        next
    }

    /// Applies a sequence of actions in order.
    #[must_use]
    pub fn reduce_all(&self, actions: impl IntoIterator<Item = ChartAction>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}
