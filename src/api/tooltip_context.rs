use crate::core::{ChartPointer, Coordinate, TooltipEventType, TooltipIndex, TooltipTrigger};

use super::payload_combiner::{PayloadInputs, combine_payload, resolve_active_label};
use super::pointer_projector::{PointerProjection, project_pointer};
use super::{
    ChartState, TooltipPayloadConfigurations, TooltipPayloadEntry, TooltipStateView,
    get_tooltip_state, resolve_active_coordinate, resolve_active_index, resolve_is_active,
    select_configurations,
};

/// Selector entry point for components that may render outside any chart.
///
/// Every query answers "nothing" (`None`, `false`) when no state is attached,
/// so callers need no separate branch for the detached case.
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipContext<'a> {
    state: Option<&'a ChartState>,
}

impl<'a> TooltipContext<'a> {
    #[must_use]
    pub fn new(state: Option<&'a ChartState>) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn attached(state: &'a ChartState) -> Self {
        Self { state: Some(state) }
    }

    #[must_use]
    pub fn detached() -> Self {
        Self { state: None }
    }

    #[must_use]
    pub fn state(self) -> Option<&'a ChartState> {
        self.state
    }

    #[must_use]
    pub fn active_index(
        self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
        default_index: Option<&TooltipIndex>,
    ) -> Option<TooltipIndex> {
        self.state
            .and_then(|state| resolve_active_index(state, event_type, trigger, default_index))
    }

    #[must_use]
    pub fn active_coordinate(
        self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
    ) -> Option<Coordinate> {
        self.state
            .and_then(|state| resolve_active_coordinate(state, event_type, trigger))
    }

    #[must_use]
    pub fn is_active(
        self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
        default_index: Option<&TooltipIndex>,
    ) -> bool {
        self.state
            .is_some_and(|state| resolve_is_active(state, event_type, trigger, default_index))
    }

    #[must_use]
    pub fn configurations(
        self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
    ) -> Option<TooltipPayloadConfigurations> {
        self.state
            .map(|state| select_configurations(state, event_type, trigger))
    }

    #[must_use]
    pub fn tooltip_state(self) -> Option<TooltipStateView> {
        self.state.map(get_tooltip_state)
    }

    /// Unmemoized payload; see [`super::TooltipSelectors`] for the cached form.
    #[must_use]
    pub fn payload(
        self,
        event_type: TooltipEventType,
        trigger: TooltipTrigger,
        default_index: Option<&TooltipIndex>,
    ) -> Option<Vec<TooltipPayloadEntry>> {
        let state = self.state?;
        let configurations = select_configurations(state, event_type, trigger);
        let active_index = resolve_active_index(state, event_type, trigger, default_index);
        let active_label = active_index
            .as_ref()
            .and_then(|index| resolve_active_label(state, index));

        combine_payload(&PayloadInputs {
            configurations: &configurations,
            active_index: active_index.as_ref(),
            chart_data: state.chart_data(),
            axis_settings: Some(&state.options().tooltip_axis),
            active_label: active_label.as_ref(),
            searcher: state.searcher().as_ref(),
            event_type,
        })
    }

    #[must_use]
    pub fn project_pointer(self, pointer: ChartPointer) -> Option<PointerProjection> {
        self.state.and_then(|state| project_pointer(state, pointer))
    }
}
