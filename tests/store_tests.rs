use std::sync::Arc;

use chart_tooltip::api::{
    ChartAction, ChartState, PlotArea, PointerLayout, TooltipEntrySettings,
    TooltipPayloadConfiguration, TooltipContext,
};
use chart_tooltip::core::{
    Coordinate, SearcherKind, TooltipEventType, TooltipIndex, TooltipTrigger,
};
use chart_tooltip::interaction::InteractionEvent;
use chart_tooltip::{ChartError, ChartStore, ChartStoreConfig};
use serde_json::{Value, json};

#[test]
fn config_json_round_trip() {
    let layout = PointerLayout::horizontal_band(PlotArea::new(10.0, 20.0, 400.0, 300.0));
    let config = ChartStoreConfig::new()
        .with_event_type(TooltipEventType::Item)
        .with_trigger(TooltipTrigger::Click)
        .with_default_index(2usize)
        .with_tooltip_axis_data_key("month")
        .with_pointer_layout(layout)
        .with_searcher(SearcherKind::Tree);

    let json = config.to_json_pretty().expect("serialize config");
    let restored = ChartStoreConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let empty = ChartStoreConfig::from_json_str("{}").expect("parse empty config");
    assert_eq!(empty, ChartStoreConfig::default());

    let partial = ChartStoreConfig::from_json_str(
        r#"{ "tooltip_event_type": "item", "default_index": "3", "searcher": "tree" }"#,
    )
    .expect("parse partial config");
    assert_eq!(partial.tooltip_event_type, TooltipEventType::Item);
    assert_eq!(partial.trigger, TooltipTrigger::Hover);
    assert_eq!(partial.default_index, Some(TooltipIndex::from("3")));
    assert_eq!(partial.searcher, SearcherKind::Tree);
}

#[test]
fn malformed_config_json_is_rejected() {
    assert!(matches!(
        ChartStoreConfig::from_json_str("{ not json"),
        Err(ChartError::InvalidData(_))
    ));
    assert!(ChartStoreConfig::from_json_str(r#"{ "trigger": "doubleclick" }"#).is_err());
}

#[test]
fn invalid_config_is_rejected_at_store_creation() {
    let empty_index = ChartStoreConfig::new().with_default_index("  ");
    assert!(matches!(
        ChartStore::new(empty_index),
        Err(ChartError::InvalidConfig(_))
    ));

    let empty_axis_key = ChartStoreConfig::new().with_tooltip_axis_data_key("");
    assert!(ChartStore::new(empty_axis_key).is_err());

    let flat_layout = ChartStoreConfig::new()
        .with_pointer_layout(PointerLayout::horizontal_band(PlotArea::new(0.0, 0.0, 10.0, 0.0)));
    assert!(matches!(
        ChartStore::new(flat_layout),
        Err(ChartError::InvalidGeometry { .. })
    ));
}

#[test]
fn inverted_window_is_rejected_without_state_change() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!(1), json!(2), json!(3)]);
    let before = Arc::clone(store.state().chart_data_arc());

    assert!(store.set_window(2, 1).is_err());
    assert!(Arc::ptr_eq(&before, store.state().chart_data_arc()));
}

#[test]
fn new_chart_data_resets_window_end() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!(0); 5]);
    store.set_window(1, 2).expect("set window");
    store.set_chart_data(vec![json!(0); 4]);

    let chart_data = store.state().chart_data();
    assert_eq!(chart_data.data_start_index(), 1);
    assert_eq!(chart_data.data_end_index(), 3);
    assert_eq!(chart_data.windowed().len(), 3);
}

#[test]
fn reduce_keeps_untouched_slices_shared() {
    let state = ChartState::default();
    let next = state.reduce(ChartAction::Interaction(InteractionEvent::LeaveChart));
    assert!(Arc::ptr_eq(state.interaction_arc(), next.interaction_arc()));

    let hovered = state.reduce(ChartAction::Interaction(InteractionEvent::AxisHover {
        index: TooltipIndex::from("1"),
        coordinate: None,
        data_key: None,
    }));
    assert!(!Arc::ptr_eq(state.interaction_arc(), hovered.interaction_arc()));
    assert!(Arc::ptr_eq(state.chart_data_arc(), hovered.chart_data_arc()));
    assert!(Arc::ptr_eq(state.options_arc(), hovered.options_arc()));
    assert!(state.interaction().axis().active_mouse_over_axis_index().is_none());
}

#[test]
fn resolved_tooltip_bundles_every_answer() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!({ "uv": 1 }), json!({ "uv": 2 })]);
    store.register_tooltip_payload(TooltipPayloadConfiguration::new(
        TooltipEntrySettings::with_data_key("uv"),
    ));

    let idle = store.resolved_tooltip();
    assert!(!idle.active);
    assert!(idle.active_index.is_none());
    assert!(idle.payload.is_none());

    store.axis_hover("1", Some(Coordinate::new(4.0, 5.0)), None);
    let resolved = store.resolved_tooltip();
    assert!(resolved.active);
    assert_eq!(resolved.active_index, Some(TooltipIndex::from("1")));
    assert_eq!(resolved.coordinate, Some(Coordinate::new(4.0, 5.0)));
    let payload = resolved.payload.expect("payload");
    assert_eq!(payload[0].value, Some(json!(2)));
}

#[test]
fn payload_for_answers_other_channels() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!({ "uv": 1 }), json!({ "uv": 2 })]);
    store.register_tooltip_payload(TooltipPayloadConfiguration::new(
        TooltipEntrySettings::with_data_key("uv"),
    ));
    store.item_click("0", None, Some("uv".into()));

    assert!(store.payload().is_none());
    let clicked = store
        .payload_for(TooltipEventType::Item, TooltipTrigger::Click)
        .expect("click payload");
    assert_eq!(clicked[0].value, Some(json!(1)));
}

#[test]
fn snapshot_json_exposes_interaction_and_registry() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!({ "uv": 1 }), json!({ "uv": 2 }), json!({ "uv": 3 })]);
    store.register_tooltip_payload(TooltipPayloadConfiguration::new(
        TooltipEntrySettings::with_data_key("uv"),
    ));
    store.axis_hover("2", Some(Coordinate::new(1.5, 2.5)), None);

    let snapshot: Value =
        serde_json::from_str(&store.snapshot_json_pretty().expect("snapshot")).expect("parse");
    let axis = &snapshot["interaction"]["axisInteraction"];
    assert_eq!(axis["activeMouseOverAxisIndex"], json!("2"));
    assert_eq!(axis["activeMouseOverAxisCoordinate"], json!({ "x": 1.5, "y": 2.5 }));
    assert_eq!(snapshot["rowsLen"], json!(3));
    assert_eq!(snapshot["dataEndIndex"], json!(2));
    assert_eq!(
        snapshot["tooltipItemPayloads"][0]["settings"]["dataKey"],
        json!("uv")
    );
}

#[test]
fn tooltip_context_over_store_state_matches_store_answers() {
    let mut store = ChartStore::new(ChartStoreConfig::default()).expect("store init");
    store.set_chart_data(vec![json!({ "uv": 1 }), json!({ "uv": 2 })]);
    store.register_tooltip_payload(TooltipPayloadConfiguration::new(
        TooltipEntrySettings::with_data_key("uv"),
    ));
    store.axis_hover("1", None, None);

    let expected = store.payload().expect("store payload");
    let context = TooltipContext::attached(store.state());
    let payload = context
        .payload(TooltipEventType::Axis, TooltipTrigger::Hover, None)
        .expect("context payload");
    assert_eq!(payload.as_slice(), &expected[..]);
    assert!(context.is_active(TooltipEventType::Axis, TooltipTrigger::Hover, None));
    assert_eq!(
        context.active_index(TooltipEventType::Axis, TooltipTrigger::Hover, None),
        Some(TooltipIndex::from("1"))
    );
    assert_eq!(
        context
            .tooltip_state()
            .expect("tooltip state")
            .tooltip_item_payloads
            .len(),
        1
    );

    let detached = TooltipContext::new(None);
    assert!(detached
        .payload(TooltipEventType::Axis, TooltipTrigger::Hover, None)
        .is_none());
}
