use chart_tooltip::api::{
    ChartAction, ChartState, PlotArea, PointerLayout, project_pointer, resolve_active_index,
    resolve_is_active,
};
use chart_tooltip::core::{
    ChartPointer, Coordinate, TooltipEventType, TooltipIndex, TooltipTrigger, slice_window,
};
use chart_tooltip::interaction::{AxisInteraction, InteractionEvent, TooltipInteractionState};
use proptest::prelude::*;
use serde_json::json;

fn interaction_event(kind: u8, index: usize) -> InteractionEvent {
    let index = TooltipIndex::from(index);
    let coordinate = Some(Coordinate::new(index_x(&index), 10.0));
    match kind % 8 {
        0 => InteractionEvent::AxisHover {
            index,
            coordinate,
            data_key: None,
        },
        1 => InteractionEvent::AxisClick {
            index,
            coordinate,
            data_key: None,
        },
        2 => InteractionEvent::ItemHover {
            index,
            coordinate,
            data_key: Some("uv".into()),
        },
        3 => InteractionEvent::ItemClick {
            index,
            coordinate,
            data_key: Some("uv".into()),
        },
        4 => InteractionEvent::LeaveChart,
        5 => InteractionEvent::LeaveItem,
        6 => InteractionEvent::KeyboardFocus { index, coordinate },
        _ => InteractionEvent::KeyboardBlur,
    }
}

fn index_x(index: &TooltipIndex) -> f64 {
    index.as_position().unwrap_or_default() as f64 * 10.0
}

fn apply_all(events: &[(u8, usize)]) -> ChartState {
    ChartState::default().reduce_all(
        events
            .iter()
            .map(|(kind, index)| ChartAction::Interaction(interaction_event(*kind, *index))),
    )
}

proptest! {
    #[test]
    fn click_channels_latch_once_set(
        prefix in prop::collection::vec((0u8..8, 0usize..20), 0..20),
        suffix in prop::collection::vec((0u8..8, 0usize..20), 0..20),
        click_index in 0usize..20
    ) {
        let mut events = prefix;
        events.push((3, click_index));
        events.push((1, click_index));
        events.extend(suffix);

        let state = apply_all(&events);
        prop_assert!(resolve_is_active(
            &state,
            TooltipEventType::Item,
            TooltipTrigger::Click,
            None
        ));
        prop_assert!(resolve_is_active(
            &state,
            TooltipEventType::Axis,
            TooltipTrigger::Click,
            None
        ));
    }

    #[test]
    fn item_events_never_write_axis_state(
        events in prop::collection::vec(
            (prop_oneof![Just(2u8), Just(3u8), Just(5u8)], 0usize..20),
            0..30
        )
    ) {
        let mut interaction = TooltipInteractionState::default();
        for (kind, index) in events {
            interaction.apply(&interaction_event(kind, index));
        }
        prop_assert_eq!(interaction.axis(), &AxisInteraction::default());
    }

    #[test]
    fn default_index_is_reported_on_untouched_state(index in "[a-z0-9]{1,8}") {
        let state = ChartState::default();
        let default_index = TooltipIndex::from(index.as_str());
        for event_type in TooltipEventType::ALL {
            for trigger in TooltipTrigger::ALL {
                prop_assert_eq!(
                    resolve_active_index(&state, event_type, trigger, Some(&default_index)),
                    Some(default_index.clone())
                );
                prop_assert!(resolve_is_active(&state, event_type, trigger, Some(&default_index)));
            }
        }
    }

    #[test]
    fn active_index_comes_from_last_matching_event_or_nothing(
        events in prop::collection::vec((0u8..6, 0usize..20), 1..30)
    ) {
        let state = apply_all(&events);
        let last_axis_hover = events.iter().rev().find_map(|(kind, index)| match kind % 8 {
            0 => Some(Some(TooltipIndex::from(*index))),
            4 => Some(None),
            _ => None,
        }).flatten();
        prop_assert_eq!(
            resolve_active_index(&state, TooltipEventType::Axis, TooltipTrigger::Hover, None),
            last_axis_hover
        );
    }

    #[test]
    fn window_never_exceeds_bounds(
        len in 0usize..50,
        start in 0usize..60,
        end in 0usize..60
    ) {
        let data: Vec<usize> = (0..len).collect();
        let window = slice_window(&data, start, end);
        prop_assert!(window.len() <= len);
        if len > 0 && (start, end) != (0, 0) && start <= end && end < len {
            prop_assert_eq!(window.len(), end - start + 1);
            prop_assert_eq!(window.first().copied(), Some(start));
        }
    }

    #[test]
    fn band_projection_lands_in_pointer_slot(
        rows in 1usize..60,
        fraction in 0.0f64..1.0
    ) {
        let width = 600.0;
        let layout = PointerLayout::horizontal_band(PlotArea::new(0.0, 0.0, width, 100.0));
        let data = (0..rows).map(|i| json!({ "i": i })).collect();
        let state = ChartState::default().reduce_all([
            ChartAction::SetChartData(data),
            ChartAction::SetPointerLayout(Some(layout)),
        ]);

        let pointer_x = fraction * width;
        let projection = project_pointer(&state, ChartPointer::new(pointer_x, 50.0))
            .expect("projection inside plot area");
        let position = projection.active_index.as_position().expect("flat index");
        let step = width / rows as f64;

        prop_assert!(position < rows);
        prop_assert!((projection.active_coordinate.x - pointer_x).abs() <= step * 0.5 + 1e-9);
    }
}
