use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::ChartPointer;
use crate::extensions::TooltipPluginEvent;
use crate::interaction::{InteractionEvent, InteractionEventKind};

use super::pointer_projector::PointerProjection;
use super::{ChartAction, ChartStore, TooltipPayloadConfiguration, TooltipPayloadId};

/// Plugin event an action maps to, resolved after the action is applied.
#[derive(Debug, Clone, Copy)]
enum AppliedAction {
    Interaction(InteractionEventKind),
    Payloads,
    ChartData,
    Window,
    TooltipAxis,
    PointerLayout,
    Searcher,
}

impl AppliedAction {
    fn of(action: &ChartAction) -> Self {
        match action {
            ChartAction::Interaction(event) => Self::Interaction(event.kind()),
            ChartAction::AddTooltipPayload { .. }
            | ChartAction::ReplaceTooltipPayload { .. }
            | ChartAction::RemoveTooltipPayload { .. } => Self::Payloads,
            ChartAction::SetChartData(_) => Self::ChartData,
            ChartAction::SetDataWindow { .. } => Self::Window,
            ChartAction::SetTooltipAxis(_) => Self::TooltipAxis,
            ChartAction::SetPointerLayout(_) => Self::PointerLayout,
            ChartAction::SetSearcher(_) => Self::Searcher,
        }
    }
}

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    pub(super) fn dispatch(store: &mut ChartStore, action: ChartAction) {
        let applied = AppliedAction::of(&action);
        trace!(action = action.name(), "dispatch chart action");
        store.state = store.state.reduce(action);

        let state = &store.state;
        let event = match applied {
            AppliedAction::Interaction(kind) => TooltipPluginEvent::InteractionApplied { kind },
            AppliedAction::Payloads => TooltipPluginEvent::PayloadsChanged {
                payloads_len: state.payloads().len(),
            },
            AppliedAction::ChartData => {
                let rows_len = state.chart_data().chart_data().len();
                debug!(rows_len, "set chart data");
                TooltipPluginEvent::ChartDataUpdated { rows_len }
            }
            AppliedAction::Window => {
                let start = state.chart_data().data_start_index();
                let end = state.chart_data().data_end_index();
                debug!(start, end, "set data window");
                TooltipPluginEvent::WindowChanged { start, end }
            }
            AppliedAction::TooltipAxis => TooltipPluginEvent::TooltipAxisChanged,
            AppliedAction::PointerLayout => TooltipPluginEvent::PointerLayoutChanged,
            AppliedAction::Searcher => TooltipPluginEvent::SearcherChanged,
        };
        store.emit_plugin_event(event);
    }

    pub(super) fn register_tooltip_payload(
        store: &mut ChartStore,
        configuration: TooltipPayloadConfiguration,
    ) -> TooltipPayloadId {
        let id = TooltipPayloadId::next();
        Self::dispatch(
            store,
            ChartAction::AddTooltipPayload {
                id,
                configuration: Arc::new(configuration),
            },
        );
        debug!(
            id = id.get(),
            payloads_len = store.state.payloads().len(),
            "registered tooltip payload"
        );
        id
    }

    pub(super) fn replace_tooltip_payload(
        store: &mut ChartStore,
        id: TooltipPayloadId,
        configuration: TooltipPayloadConfiguration,
    ) -> bool {
        if !store.state.payloads().contains(id) {
            warn!(id = id.get(), "ignoring replacement of unknown tooltip payload");
            return false;
        }
        Self::dispatch(
            store,
            ChartAction::ReplaceTooltipPayload {
                id,
                configuration: Arc::new(configuration),
            },
        );
        debug!(id = id.get(), "replaced tooltip payload");
        true
    }

    pub(super) fn unregister_tooltip_payload(store: &mut ChartStore, id: TooltipPayloadId) -> bool {
        if !store.state.payloads().contains(id) {
            warn!(id = id.get(), "ignoring removal of unknown tooltip payload");
            return false;
        }
        Self::dispatch(store, ChartAction::RemoveTooltipPayload { id });
        debug!(
            id = id.get(),
            payloads_len = store.state.payloads().len(),
            "unregistered tooltip payload"
        );
        true
    }

    pub(super) fn pointer_move(
        store: &mut ChartStore,
        pointer: ChartPointer,
    ) -> Option<Arc<PointerProjection>> {
        if !pointer.page_x.is_finite() || !pointer.page_y.is_finite() {
            warn!(
                page_x = pointer.page_x,
                page_y = pointer.page_y,
                "ignoring non-finite pointer"
            );
            return None;
        }

        let projection = store.selectors.project_pointer(&store.state, pointer);
        let event = match &projection {
            Some(projection) => InteractionEvent::AxisHover {
                index: projection.active_index.clone(),
                coordinate: Some(projection.active_coordinate),
                data_key: store.state.options().tooltip_axis.data_key.clone(),
            },
            None => InteractionEvent::LeaveChart,
        };
        Self::dispatch(store, ChartAction::Interaction(event));
        projection
    }
}
