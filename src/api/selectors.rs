use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde_json::Value;
use tracing::trace;

use crate::core::{
    ChartPointer, DataKey, TooltipEventType, TooltipIndex, TooltipPayloadSearcher, TooltipTrigger,
};

use super::configuration_aggregator::{active_item_data_key, filter_by_data_key};
use super::payload_combiner::{PayloadInputs, combine_payload, resolve_active_label};
use super::pointer_projector::{PointerProjection, project_pointer};
use super::selector_cache::{SameArc, SelectorCache, TooltipSelectorStats};
use super::{
    ChartDataState, ChartOptions, ChartState, TooltipAxisSettings, TooltipPayloadConfiguration,
    TooltipPayloadConfigurations, TooltipPayloadEntry, resolve_active_index,
};

/// Shared, immutable tooltip payload.
pub type TooltipPayload = Arc<[TooltipPayloadEntry]>;

/// Owned inputs of a memoized payload computation.
///
/// Shared inputs (`configurations`, `chart_data`, `searcher`) are compared by
/// allocation, the rest by value.
#[derive(Debug, Clone)]
pub struct PayloadRequest {
    pub configurations: TooltipPayloadConfigurations,
    pub active_index: Option<TooltipIndex>,
    pub chart_data: Arc<ChartDataState>,
    pub axis_settings: Option<TooltipAxisSettings>,
    pub active_label: Option<Value>,
    pub searcher: Arc<dyn TooltipPayloadSearcher>,
    pub event_type: TooltipEventType,
}

impl PayloadRequest {
    fn key(&self) -> PayloadKey {
        PayloadKey {
            configurations: SameArc(Arc::clone(&self.configurations)),
            active_index: self.active_index.clone(),
            chart_data: SameArc(Arc::clone(&self.chart_data)),
            axis_settings: self.axis_settings.clone(),
            active_label: self.active_label.clone(),
            searcher: SameArc(Arc::clone(&self.searcher)),
            event_type: self.event_type,
        }
    }

    fn inputs(&self) -> PayloadInputs<'_> {
        PayloadInputs {
            configurations: &self.configurations,
            active_index: self.active_index.as_ref(),
            chart_data: &self.chart_data,
            axis_settings: self.axis_settings.as_ref(),
            active_label: self.active_label.as_ref(),
            searcher: self.searcher.as_ref(),
            event_type: self.event_type,
        }
    }
}

#[derive(Debug, PartialEq)]
struct ConfigurationsKey {
    registered: SameArc<[Arc<TooltipPayloadConfiguration>]>,
    data_key: Option<DataKey>,
}

#[derive(Debug, PartialEq)]
struct PayloadKey {
    configurations: SameArc<[Arc<TooltipPayloadConfiguration>]>,
    active_index: Option<TooltipIndex>,
    chart_data: SameArc<ChartDataState>,
    axis_settings: Option<TooltipAxisSettings>,
    active_label: Option<Value>,
    searcher: SameArc<dyn TooltipPayloadSearcher>,
    event_type: TooltipEventType,
}

#[derive(Debug, PartialEq)]
struct ProjectionKey {
    options: SameArc<ChartOptions>,
    chart_data: SameArc<ChartDataState>,
    page_x: OrderedFloat<f64>,
    page_y: OrderedFloat<f64>,
}

/// Memoized tooltip selectors.
///
/// Repeated calls with unchanged inputs return the same `Arc`, so consumers
/// can gate re-rendering on pointer identity.
#[derive(Debug, Default)]
pub struct TooltipSelectors {
    configurations: SelectorCache<ConfigurationsKey, TooltipPayloadConfigurations>,
    payloads: SelectorCache<PayloadKey, Option<TooltipPayload>>,
    projections: SelectorCache<ProjectionKey, Option<Arc<PointerProjection>>>,
}

impl TooltipSelectors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized [`super::select_configurations`].
    pub fn configurations(
        &mut self,
        state: &ChartState,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
    ) -> TooltipPayloadConfigurations {
        let registered = state.payloads().ordered();
        if event_type == TooltipEventType::Axis {
            return Arc::clone(registered);
        }

        let data_key = active_item_data_key(state, trigger);
        let key = ConfigurationsKey {
            registered: SameArc(Arc::clone(registered)),
            data_key: data_key.cloned(),
        };
        self.configurations.get_or_insert_with(key, || {
            trace!(?trigger, "item configurations cache miss");
            filter_by_data_key(registered, data_key)
        })
    }

    /// Memoized [`super::combine_payload`].
    pub fn combine_payload(&mut self, request: PayloadRequest) -> Option<TooltipPayload> {
        let key = request.key();
        self.payloads.get_or_insert_with(key, || {
            trace!(
                configurations = request.configurations.len(),
                active_index = ?request.active_index,
                "payload cache miss"
            );
            combine_payload(&request.inputs()).map(TooltipPayload::from)
        })
    }

    /// Payload for `(event_type, trigger)`: filtered configurations joined
    /// with the resolved active index.
    pub fn tooltip_payload(
        &mut self,
        state: &ChartState,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
        default_index: Option<&TooltipIndex>,
    ) -> Option<TooltipPayload> {
        let configurations = self.configurations(state, event_type, trigger);
        let active_index = resolve_active_index(state, event_type, trigger, default_index);
        let active_label = active_index
            .as_ref()
            .and_then(|index| resolve_active_label(state, index));

        self.combine_payload(PayloadRequest {
            configurations,
            active_index,
            chart_data: Arc::clone(state.chart_data_arc()),
            axis_settings: Some(state.options().tooltip_axis.clone()),
            active_label,
            searcher: Arc::clone(state.searcher()),
            event_type,
        })
    }

    /// Memoized [`super::project_pointer`].
    pub fn project_pointer(
        &mut self,
        state: &ChartState,
        pointer: ChartPointer,
    ) -> Option<Arc<PointerProjection>> {
        let key = ProjectionKey {
            options: SameArc(Arc::clone(state.options_arc())),
            chart_data: SameArc(Arc::clone(state.chart_data_arc())),
            page_x: OrderedFloat(pointer.page_x),
            page_y: OrderedFloat(pointer.page_y),
        };
        self.projections.get_or_insert_with(key, || {
            trace!(
                page_x = pointer.page_x,
                page_y = pointer.page_y,
                "pointer projection cache miss"
            );
            project_pointer(state, pointer).map(Arc::new)
        })
    }

    #[must_use]
    pub fn stats(&self) -> TooltipSelectorStats {
        TooltipSelectorStats {
            configurations: self.configurations.stats(),
            payloads: self.payloads.stats(),
            projections: self.projections.stats(),
        }
    }

    /// Drops memoized results; later calls recompute and allocate anew.
    pub fn clear(&mut self) {
        self.configurations.clear();
        self.payloads.clear();
        self.projections.clear();
    }
}
