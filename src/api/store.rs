use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::core::{
    ChartPointer, Coordinate, DataKey, TooltipEventType, TooltipIndex, TooltipPayloadSearcher,
    TooltipTrigger,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::TooltipPlugin;
use crate::interaction::{InteractionEvent, TooltipInteractionState};

use super::interaction_coordinator::InteractionCoordinator;
use super::pointer_projector::PointerProjection;
use super::selector_cache::TooltipSelectorStats;
use super::{
    ChartAction, ChartOptions, ChartState, ChartStoreConfig, PointerLayout, TooltipAxisSettings,
    TooltipPayload, TooltipPayloadConfiguration, TooltipPayloadConfigurations, TooltipPayloadId,
    TooltipSelectors, TooltipStateView, get_tooltip_state, resolve_active_coordinate,
    resolve_active_index, resolve_is_active,
};

/// Everything a tooltip renderer needs for the configured event type and trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTooltip {
    pub active: bool,
    pub active_index: Option<TooltipIndex>,
    pub coordinate: Option<Coordinate>,
    pub payload: Option<TooltipPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipStoreSnapshot<'a> {
    interaction: &'a TooltipInteractionState,
    tooltip_item_payloads: Vec<&'a TooltipPayloadConfiguration>,
    rows_len: usize,
    data_start_index: usize,
    data_end_index: usize,
}

/// Interaction store of one chart instance.
///
/// `ChartStore` owns the current [`ChartState`], applies every mutation
/// through [`ChartAction`]s, memoizes derived tooltip values and notifies
/// plugins. Reads through [`ChartStore::state`] see a consistent snapshot.
pub struct ChartStore {
    pub(super) state: ChartState,
    pub(super) selectors: TooltipSelectors,
    pub(super) config: ChartStoreConfig,
    pub(super) plugins: Vec<Box<dyn TooltipPlugin>>,
}

impl ChartStore {
    pub fn new(config: ChartStoreConfig) -> ChartResult<Self> {
        config.validate()?;
        let options = ChartOptions {
            tooltip_axis: config.tooltip_axis.clone(),
            pointer_layout: config.pointer_layout,
            searcher: config.searcher.searcher(),
        };
        Ok(Self {
            state: ChartState::new(options),
            selectors: TooltipSelectors::new(),
            config,
            plugins: Vec::new(),
        })
    }

    /// Replaces the built-in searcher with a custom strategy.
    #[must_use]
    pub fn with_searcher(mut self, searcher: Arc<dyn TooltipPayloadSearcher>) -> Self {
        self.set_searcher(searcher);
        self
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartStoreConfig {
        &self.config
    }

    #[must_use]
    pub fn selector_stats(&self) -> TooltipSelectorStats {
        self.selectors.stats()
    }

    /// Applies one action. Every state change goes through here.
    pub fn dispatch(&mut self, action: ChartAction) {
        InteractionCoordinator::dispatch(self, action);
    }

    /// Registers a series configuration at the end of the ordered set.
    pub fn register_tooltip_payload(
        &mut self,
        configuration: TooltipPayloadConfiguration,
    ) -> TooltipPayloadId {
        InteractionCoordinator::register_tooltip_payload(self, configuration)
    }

    /// Updates a registered configuration in place. Returns `false` for unknown ids.
    pub fn replace_tooltip_payload(
        &mut self,
        id: TooltipPayloadId,
        configuration: TooltipPayloadConfiguration,
    ) -> bool {
        InteractionCoordinator::replace_tooltip_payload(self, id, configuration)
    }

    /// Removes a configuration. Returns `false` for unknown ids.
    pub fn unregister_tooltip_payload(&mut self, id: TooltipPayloadId) -> bool {
        InteractionCoordinator::unregister_tooltip_payload(self, id)
    }

    pub fn axis_hover(
        &mut self,
        index: impl Into<TooltipIndex>,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    ) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::AxisHover {
            index: index.into(),
            coordinate,
            data_key,
        }));
    }

    pub fn axis_click(
        &mut self,
        index: impl Into<TooltipIndex>,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    ) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::AxisClick {
            index: index.into(),
            coordinate,
            data_key,
        }));
    }

    pub fn item_hover(
        &mut self,
        index: impl Into<TooltipIndex>,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    ) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::ItemHover {
            index: index.into(),
            coordinate,
            data_key,
        }));
    }

    pub fn item_click(
        &mut self,
        index: impl Into<TooltipIndex>,
        coordinate: Option<Coordinate>,
        data_key: Option<DataKey>,
    ) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::ItemClick {
            index: index.into(),
            coordinate,
            data_key,
        }));
    }

    pub fn leave_chart(&mut self) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::LeaveChart));
    }

    pub fn leave_item(&mut self) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::LeaveItem));
    }

    pub fn keyboard_focus(
        &mut self,
        index: impl Into<TooltipIndex>,
        coordinate: Option<Coordinate>,
    ) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::KeyboardFocus {
            index: index.into(),
            coordinate,
        }));
    }

    pub fn keyboard_blur(&mut self) {
        self.dispatch(ChartAction::Interaction(InteractionEvent::KeyboardBlur));
    }

    /// Replaces chart data; the window end follows the new last row.
    pub fn set_chart_data(&mut self, rows: Vec<Value>) {
        self.dispatch(ChartAction::SetChartData(rows));
    }

    /// Sets the inclusive brush window over chart data.
    pub fn set_window(&mut self, start: usize, end: usize) -> ChartResult<()> {
        if start > end {
            return Err(ChartError::InvalidData(format!(
                "data window start ({start}) must be <= end ({end})"
            )));
        }
        self.dispatch(ChartAction::SetDataWindow { start, end });
        Ok(())
    }

    pub fn set_tooltip_axis_data_key(&mut self, data_key: Option<DataKey>) {
        self.dispatch(ChartAction::SetTooltipAxis(TooltipAxisSettings { data_key }));
    }

    pub fn set_pointer_layout(&mut self, layout: Option<PointerLayout>) -> ChartResult<()> {
        if let Some(layout) = layout {
            layout.validate()?;
        }
        self.dispatch(ChartAction::SetPointerLayout(layout));
        Ok(())
    }

    pub fn set_searcher(&mut self, searcher: Arc<dyn TooltipPayloadSearcher>) {
        self.dispatch(ChartAction::SetSearcher(searcher));
    }

    /// Projects a page-space pointer and records it as an axis hover.
    ///
    /// A pointer that projects to no index (outside the plot area, no
    /// layout, empty axis) is recorded as leaving the chart.
    pub fn pointer_move(&mut self, page_x: f64, page_y: f64) -> Option<Arc<PointerProjection>> {
        InteractionCoordinator::pointer_move(self, ChartPointer::new(page_x, page_y))
    }

    pub fn pointer_leave(&mut self) {
        self.leave_chart();
    }

    /// Memoized projection of a pointer without recording any interaction.
    pub fn project_pointer(&mut self, pointer: ChartPointer) -> Option<Arc<PointerProjection>> {
        self.selectors.project_pointer(&self.state, pointer)
    }

    #[must_use]
    pub fn active_index(&self) -> Option<TooltipIndex> {
        resolve_active_index(
            &self.state,
            self.config.tooltip_event_type,
            self.config.trigger,
            self.config.default_index.as_ref(),
        )
    }

    #[must_use]
    pub fn active_coordinate(&self) -> Option<Coordinate> {
        resolve_active_coordinate(
            &self.state,
            self.config.tooltip_event_type,
            self.config.trigger,
        )
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        resolve_is_active(
            &self.state,
            self.config.tooltip_event_type,
            self.config.trigger,
            self.config.default_index.as_ref(),
        )
    }

    pub fn configurations(&mut self) -> TooltipPayloadConfigurations {
        self.selectors.configurations(
            &self.state,
            self.config.tooltip_event_type,
            self.config.trigger,
        )
    }

    pub fn payload(&mut self) -> Option<TooltipPayload> {
        self.payload_for(self.config.tooltip_event_type, self.config.trigger)
    }

    /// Payload for an explicit `(event_type, trigger)` pair, using the
    /// configured default index.
    pub fn payload_for(
        &mut self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
    ) -> Option<TooltipPayload> {
        self.selectors.tooltip_payload(
            &self.state,
            event_type,
            trigger,
            self.config.default_index.as_ref(),
        )
    }

    pub fn resolved_tooltip(&mut self) -> ResolvedTooltip {
        ResolvedTooltip {
            active: self.is_active(),
            active_index: self.active_index(),
            coordinate: self.active_coordinate(),
            payload: self.payload(),
        }
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipStateView {
        get_tooltip_state(&self.state)
    }

    /// Serializes the interaction slice and registered configurations.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let chart_data = self.state.chart_data();
        let snapshot = TooltipStoreSnapshot {
            interaction: self.state.interaction(),
            tooltip_item_payloads: self
                .state
                .payloads()
                .ordered()
                .iter()
                .map(|configuration| &**configuration)
                .collect(),
            rows_len: chart_data.chart_data().len(),
            data_start_index: chart_data.data_start_index(),
            data_end_index: chart_data.data_end_index(),
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
