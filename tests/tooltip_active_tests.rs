use chart_tooltip::api::{resolve_active_index, resolve_is_active};
use chart_tooltip::core::{TooltipEventType, TooltipIndex, TooltipTrigger};
use chart_tooltip::{ChartStore, ChartStoreConfig};

fn store() -> ChartStore {
    ChartStore::new(ChartStoreConfig::default()).expect("store init")
}

fn active(store: &ChartStore, event_type: TooltipEventType, trigger: TooltipTrigger) -> bool {
    resolve_is_active(store.state(), event_type, trigger, None)
}

#[test]
fn item_click_latches_forever() {
    let mut store = store();
    store.item_click("1", None, Some("uv".into()));
    assert!(active(&store, TooltipEventType::Item, TooltipTrigger::Click));

    store.leave_item();
    store.leave_chart();
    store.item_hover("2", None, Some("pv".into()));
    store.axis_hover("3", None, None);
    store.leave_item();
    store.keyboard_blur();

    assert!(active(&store, TooltipEventType::Item, TooltipTrigger::Click));
}

#[test]
fn axis_click_latches_forever() {
    let mut store = store();
    store.axis_click("0", None, None);
    store.leave_chart();
    store.leave_item();
    store.axis_hover("4", None, None);
    store.leave_chart();

    assert!(active(&store, TooltipEventType::Axis, TooltipTrigger::Click));
}

#[test]
fn item_hover_tracks_pointer_presence_only() {
    let mut store = store();
    store.axis_hover("1", None, None);
    assert!(!active(&store, TooltipEventType::Item, TooltipTrigger::Hover));

    store.item_hover("1", None, Some("uv".into()));
    assert!(active(&store, TooltipEventType::Item, TooltipTrigger::Hover));

    store.leave_chart();
    assert!(active(&store, TooltipEventType::Item, TooltipTrigger::Hover));

    store.leave_item();
    assert!(!active(&store, TooltipEventType::Item, TooltipTrigger::Hover));
}

#[test]
fn axis_hover_is_a_superset_of_item_hover() {
    let mut store = store();
    store.item_hover("2", None, Some("uv".into()));
    assert!(active(&store, TooltipEventType::Axis, TooltipTrigger::Hover));

    store.leave_item();
    assert!(!active(&store, TooltipEventType::Axis, TooltipTrigger::Hover));

    store.axis_hover("2", None, None);
    assert!(active(&store, TooltipEventType::Axis, TooltipTrigger::Hover));

    store.leave_chart();
    assert!(!active(&store, TooltipEventType::Axis, TooltipTrigger::Hover));
}

#[test]
fn hover_never_activates_click_channels() {
    let mut store = store();
    store.axis_hover("2", None, None);
    store.item_hover("2", None, Some("uv".into()));

    assert!(!active(&store, TooltipEventType::Axis, TooltipTrigger::Click));
    assert!(!active(&store, TooltipEventType::Item, TooltipTrigger::Click));
}

#[test]
fn keyboard_focus_activates_until_blur() {
    let mut store = store();
    store.keyboard_focus("1", None);
    for event_type in TooltipEventType::ALL {
        for trigger in TooltipTrigger::ALL {
            assert!(active(&store, event_type, trigger));
        }
    }

    store.keyboard_blur();
    for event_type in TooltipEventType::ALL {
        for trigger in TooltipTrigger::ALL {
            assert!(!active(&store, event_type, trigger));
        }
    }
}

#[test]
fn default_index_activates_only_until_first_interaction() {
    let default_index = TooltipIndex::from(3usize);
    let mut store = store();
    for event_type in TooltipEventType::ALL {
        for trigger in TooltipTrigger::ALL {
            assert!(resolve_is_active(
                store.state(),
                event_type,
                trigger,
                Some(&default_index)
            ));
        }
    }

    store.item_hover("1", None, Some("uv".into()));
    store.leave_item();
    assert!(!resolve_is_active(
        store.state(),
        TooltipEventType::Item,
        TooltipTrigger::Hover,
        Some(&default_index)
    ));
    assert!(!resolve_is_active(
        store.state(),
        TooltipEventType::Axis,
        TooltipTrigger::Hover,
        Some(&default_index)
    ));
    assert!(resolve_is_active(
        store.state(),
        TooltipEventType::Item,
        TooltipTrigger::Click,
        Some(&default_index)
    ));
}

#[test]
fn axis_hover_then_leave_ignores_default_index() {
    let default_index = TooltipIndex::from(3usize);
    let mut store = store();
    store.axis_hover("1", None, None);
    assert!(resolve_is_active(
        store.state(),
        TooltipEventType::Axis,
        TooltipTrigger::Hover,
        Some(&default_index)
    ));

    store.leave_chart();
    assert!(!resolve_is_active(
        store.state(),
        TooltipEventType::Axis,
        TooltipTrigger::Hover,
        Some(&default_index)
    ));
    assert_eq!(
        resolve_active_index(
            store.state(),
            TooltipEventType::Axis,
            TooltipTrigger::Hover,
            Some(&default_index)
        ),
        Some(default_index.clone())
    );
}

#[test]
fn keyboard_focus_retires_default_index() {
    let default_index = TooltipIndex::from(0usize);
    let mut store = store();
    store.keyboard_focus("2", None);
    store.keyboard_blur();

    for event_type in TooltipEventType::ALL {
        for trigger in TooltipTrigger::ALL {
            assert!(!resolve_is_active(
                store.state(),
                event_type,
                trigger,
                Some(&default_index)
            ));
        }
    }
}
