use crate::core::{TooltipEventType, TooltipIndex, TooltipTrigger};

use super::ChartState;

/// Whether the tooltip should render for `(event_type, trigger)`.
///
/// - item + hover: while an item is hovered.
/// - item + click, axis + click: latched by the first click, never released.
/// - axis + hover: while the axis or any item is hovered.
///
/// Keyboard focus also activates the tooltip. A supplied `default_index`
/// does so only until the queried channel records its first interaction.
#[must_use]
pub fn resolve_is_active(
    state: &ChartState,
    event_type: TooltipEventType,
    trigger: TooltipTrigger,
    default_index: Option<&TooltipIndex>,
) -> bool {
    let interaction = state.interaction();
    let (axis, item, keyboard) = (
        interaction.axis(),
        interaction.item(),
        interaction.keyboard(),
    );
    let (pointer_active, used_before) = match (event_type, trigger) {
        (TooltipEventType::Item, TooltipTrigger::Hover) => (
            item.active_mouse_over_index().is_some(),
            item.has_been_active_previously(),
        ),
        (TooltipEventType::Item, TooltipTrigger::Click) => {
            let clicked = item.active_click_index().is_some();
            (clicked, clicked)
        }
        (TooltipEventType::Axis, TooltipTrigger::Hover) => (
            axis.active_mouse_over_axis_index().is_some()
                || item.active_mouse_over_index().is_some(),
            axis.has_been_active_previously() || item.has_been_active_previously(),
        ),
        (TooltipEventType::Axis, TooltipTrigger::Click) => {
            let clicked = axis.active_click_axis_index().is_some();
            (clicked, clicked)
        }
    };
    let untouched = !used_before && !keyboard.has_been_active_previously();

    pointer_active || keyboard.is_active() || (untouched && default_index.is_some())
}
