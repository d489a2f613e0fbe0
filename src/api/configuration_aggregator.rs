use std::sync::Arc;

use crate::core::{DataKey, TooltipEventType, TooltipTrigger};

use super::{ChartState, TooltipPayloadConfigurations};

/// Read-only view of the registered tooltip configurations.
#[derive(Debug, Clone)]
pub struct TooltipStateView {
    pub tooltip_item_payloads: TooltipPayloadConfigurations,
}

#[must_use]
pub fn get_tooltip_state(state: &ChartState) -> TooltipStateView {
    TooltipStateView {
        tooltip_item_payloads: Arc::clone(state.payloads().ordered()),
    }
}

/// Data key an item tooltip filters configurations by, if an item
/// interaction of the matching trigger happened.
#[must_use]
pub fn active_item_data_key(state: &ChartState, trigger: TooltipTrigger) -> Option<&DataKey> {
    state
        .interaction()
        .channel(TooltipEventType::Item, trigger)
        .data_key
}

/// Configurations relevant to `(event_type, trigger)`.
///
/// Axis tooltips show every series; the registry's shared list is returned
/// as-is. Item tooltips keep only series whose data key matches the active
/// item data key of the same trigger, and nothing when there is none.
#[must_use]
pub fn select_configurations(
    state: &ChartState,
    event_type: TooltipEventType,
    trigger: TooltipTrigger,
) -> TooltipPayloadConfigurations {
    match event_type {
        TooltipEventType::Axis => Arc::clone(state.payloads().ordered()),
        TooltipEventType::Item => {
            filter_by_data_key(state.payloads().ordered(), active_item_data_key(state, trigger))
        }
    }
}

pub(super) fn filter_by_data_key(
    configurations: &TooltipPayloadConfigurations,
    data_key: Option<&DataKey>,
) -> TooltipPayloadConfigurations {
    let Some(data_key) = data_key else {
        return Arc::from(Vec::new());
    };
    configurations
        .iter()
        .filter(|configuration| configuration.data_key() == Some(data_key))
        .cloned()
        .collect()
}
