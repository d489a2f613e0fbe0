use std::sync::Arc;

use serde_json::Value;

use crate::core::{
    DataKey, TooltipEventType, TooltipIndex, TooltipPayloadSearcher, display_text, slice_window,
};

use super::{
    ChartDataState, ChartState, DataDefinedOnItem, PreparedTooltipItem, TooltipAxisSettings,
    TooltipEntrySettings, TooltipPayloadConfiguration, TooltipPayloadEntry,
};

/// Inputs of one payload computation.
#[derive(Debug, Clone, Copy)]
pub struct PayloadInputs<'a> {
    pub configurations: &'a [Arc<TooltipPayloadConfiguration>],
    pub active_index: Option<&'a TooltipIndex>,
    pub chart_data: &'a ChartDataState,
    pub axis_settings: Option<&'a TooltipAxisSettings>,
    pub active_label: Option<&'a Value>,
    pub searcher: &'a dyn TooltipPayloadSearcher,
    pub event_type: TooltipEventType,
}

/// Builds the ordered tooltip payload for the active index.
///
/// Returns `None` without an active index. Otherwise each configuration, in
/// registration order, contributes its entries; a configuration without
/// settings contributes one entry with every field absent, so positions line
/// up with the configuration list. All lookups read the brush-windowed rows.
#[must_use]
pub fn combine_payload(inputs: &PayloadInputs<'_>) -> Option<Vec<TooltipPayloadEntry>> {
    let active_index = inputs.active_index?;
    let axis_data_key = inputs
        .axis_settings
        .and_then(|settings| settings.data_key.as_ref());
    let start = inputs.chart_data.data_start_index();
    let end = inputs.chart_data.data_end_index();

    let mut entries = Vec::with_capacity(inputs.configurations.len());
    for configuration in inputs.configurations {
        let Some(settings) = configuration.settings.as_ref() else {
            entries.push(TooltipPayloadEntry::default());
            continue;
        };
        let data_key = settings.data_key.as_ref().or(axis_data_key);

        match &configuration.data_defined_on_item {
            Some(DataDefinedOnItem::PreBuiltEntries(per_index)) => {
                let window = slice_window(per_index, start, end);
                let items = inputs
                    .searcher
                    .position(active_index)
                    .and_then(|position| window.get(position));
                match items {
                    Some(items) => {
                        entries.extend(items.iter().map(|item| prepared_entry(settings, item)));
                    }
                    None => entries.push(record_entry(settings, data_key, None)),
                }
            }
            Some(DataDefinedOnItem::RawValues(rows)) => {
                let window = slice_window(rows, start, end);
                let row = find_row(inputs, window, active_index, axis_data_key);
                entries.push(record_entry(settings, data_key, row));
            }
            None => {
                let window = inputs.chart_data.windowed();
                let row = find_row(inputs, window, active_index, axis_data_key);
                entries.push(record_entry(settings, data_key, row));
            }
        }
    }
    Some(entries)
}

/// Tooltip-axis value of the windowed row at `index`.
///
/// Axis payloads use it to align series that carry their own data by
/// category instead of by position.
#[must_use]
pub fn resolve_active_label(state: &ChartState, index: &TooltipIndex) -> Option<Value> {
    let axis_key = state.options().tooltip_axis.data_key.as_ref()?;
    state
        .searcher()
        .search_value(state.chart_data().windowed(), index, Some(axis_key))
        .cloned()
}

/// Locates the row for the active index.
///
/// Axis tooltips with a known axis data key and label match rows by label, so
/// series carrying their own data line up by category rather than position.
fn find_row<'a>(
    inputs: &PayloadInputs<'_>,
    rows: &'a [Value],
    active_index: &TooltipIndex,
    axis_data_key: Option<&DataKey>,
) -> Option<&'a Value> {
    if inputs.event_type == TooltipEventType::Axis {
        if let (Some(axis_key), Some(label)) = (axis_data_key, inputs.active_label) {
            if rows.first().is_some_and(|row| !row.is_array()) {
                return find_row_by_label(rows, axis_key, label);
            }
        }
    }
    inputs.searcher.search(rows, active_index)
}

/// First row whose axis value equals `label`.
fn find_row_by_label<'a>(
    rows: &'a [Value],
    axis_key: &DataKey,
    label: &Value,
) -> Option<&'a Value> {
    rows.iter().find(|row| axis_key.value_in(row) == Some(label))
}

fn record_entry(
    settings: &TooltipEntrySettings,
    data_key: Option<&DataKey>,
    row: Option<&Value>,
) -> TooltipPayloadEntry {
    let value = row.and_then(|row| match data_key {
        Some(key) => key.value_in(row).cloned(),
        None if !row.is_object() && !row.is_array() && !row.is_null() => Some(row.clone()),
        None => None,
    });
    let name_key = settings.name_key.as_ref();
    let name = row
        .zip(name_key)
        .and_then(|(row, key)| key.value_in(row))
        .and_then(display_text)
        .or_else(|| settings.name.clone());

    TooltipPayloadEntry {
        data_key: data_key.cloned(),
        name,
        value,
        unit: settings.unit.clone(),
        color: settings.color.clone(),
        fill: settings.fill.clone(),
        stroke: settings.stroke.clone(),
        payload: row.cloned(),
        name_key: name_key.cloned(),
        hide: settings.hide,
    }
}

/// Entry for an item a series shaped itself. Name and unit come from the
/// item; color and fill are left to the renderer.
fn prepared_entry(
    settings: &TooltipEntrySettings,
    item: &PreparedTooltipItem,
) -> TooltipPayloadEntry {
    let value = item
        .payload
        .as_ref()
        .zip(item.data_key.as_ref())
        .and_then(|(payload, key)| key.value_in(payload))
        .or(item.value.as_ref())
        .cloned();

    TooltipPayloadEntry {
        data_key: item.data_key.clone(),
        name: item.name.clone(),
        value,
        unit: item.unit.clone(),
        color: None,
        fill: None,
        stroke: settings.stroke.clone(),
        payload: item.payload.clone(),
        name_key: settings.name_key.clone(),
        hide: settings.hide,
    }
}
