use crate::core::{TooltipEventType, TooltipIndex, TooltipTrigger};

use super::ChartState;

/// Resolves the data index the tooltip treats as active.
///
/// Precedence: the matching `(event_type, trigger)` channel, then an active
/// keyboard selection, then `default_index`. Axis answers never read item
/// state, so hovering an item leaves axis queries on their own channel.
#[must_use]
pub fn resolve_active_index(
    state: &ChartState,
    event_type: TooltipEventType,
    trigger: TooltipTrigger,
    default_index: Option<&TooltipIndex>,
) -> Option<TooltipIndex> {
    let interaction = state.interaction();
    interaction
        .channel(event_type, trigger)
        .index
        .or_else(|| interaction.keyboard().active_index())
        .or(default_index)
        .cloned()
}
