use crate::core::{Coordinate, TooltipEventType, TooltipTrigger};

use super::ChartState;

/// Coordinate recorded with the last event of the matching channel.
///
/// Leave events do not clear coordinates; consumers keep the last known
/// position while the tooltip animates out. A keyboard selection supplies the
/// coordinate only when the pointer channel never recorded one.
#[must_use]
pub fn resolve_active_coordinate(
    state: &ChartState,
    event_type: TooltipEventType,
    trigger: TooltipTrigger,
) -> Option<Coordinate> {
    let interaction = state.interaction();
    interaction
        .channel(event_type, trigger)
        .coordinate
        .or_else(|| {
            let keyboard = interaction.keyboard();
            if keyboard.is_active() {
                keyboard.coordinate()
            } else {
                None
            }
        })
}
