use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::core::{ChartPointer, Coordinate, DataKey, LinearScale, TooltipIndex};

use super::{AxisScale, ChartState, LayoutOrientation, TooltipAxisGeometry};

/// Active index and coordinate a synthetic hover at the pointer would produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerProjection {
    pub active_index: TooltipIndex,
    pub active_coordinate: Coordinate,
}

/// Maps a page-space pointer onto the nearest tooltip-axis slot.
///
/// Returns `None` without a pointer layout, for non-finite pointers, for
/// pointers outside the plot area, and when the axis has no slots.
#[must_use]
pub fn project_pointer(state: &ChartState, pointer: ChartPointer) -> Option<PointerProjection> {
    let layout = state.options().pointer_layout?;
    if !pointer.page_x.is_finite() || !pointer.page_y.is_finite() {
        return None;
    }

    let chart_x = (pointer.page_x - layout.container.left) / layout.container.scale;
    let chart_y = (pointer.page_y - layout.container.top) / layout.container.scale;
    if !layout.plot_area.contains(chart_x, chart_y) {
        trace!(chart_x, chart_y, "pointer outside plot area");
        return None;
    }

    let primary = match layout.orientation {
        LayoutOrientation::Horizontal => chart_x,
        LayoutOrientation::Vertical => chart_y,
    };
    let ticks = axis_ticks(
        &layout.axis,
        state.chart_data().windowed(),
        state.options().tooltip_axis.data_key.as_ref(),
    );
    let (index, tick) = ticks
        .into_iter()
        .min_by_key(|(_, coordinate)| OrderedFloat((coordinate - primary).abs()))?;

    let active_coordinate = match layout.orientation {
        LayoutOrientation::Horizontal => Coordinate::new(tick, chart_y),
        LayoutOrientation::Vertical => Coordinate::new(chart_x, tick),
    };
    Some(PointerProjection {
        active_index: TooltipIndex::from(index),
        active_coordinate,
    })
}

/// Pixel position of every windowed row along the tooltip axis.
///
/// Rows a linear axis cannot place (missing or non-numeric axis value) are
/// skipped but keep their index.
#[must_use]
pub fn axis_ticks(
    axis: &TooltipAxisGeometry,
    rows: &[Value],
    axis_data_key: Option<&DataKey>,
) -> Vec<(usize, f64)> {
    match axis.scale {
        AxisScale::Band {
            padding_inner,
            padding_outer,
        } => band_centers(rows.len(), axis.range, padding_inner, padding_outer),
        AxisScale::Point { padding } => band_centers(rows.len(), axis.range, 1.0, padding),
        AxisScale::Linear {
            domain_start,
            domain_end,
        } => {
            let (Ok(scale), Some(key)) = (LinearScale::new(domain_start, domain_end), axis_data_key)
            else {
                return Vec::new();
            };
            rows.iter()
                .enumerate()
                .filter_map(|(index, row)| {
                    let value = key.value_in(row)?.as_f64()?;
                    let pixel = scale.domain_to_range(value, axis.range).ok()?;
                    Some((index, pixel))
                })
                .collect()
        }
    }
}

/// Band centers laid out like a band scale with centered alignment.
///
/// A point scale is the degenerate band with `padding_inner = 1`.
fn band_centers(
    count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
) -> Vec<(usize, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let slots = count as f64;
    let span = range.1 - range.0;
    let step = span / (slots - padding_inner + 2.0 * padding_outer).max(1.0);
    let start = range.0 + (span - step * (slots - padding_inner)) * 0.5;
    let bandwidth = step * (1.0 - padding_inner);

    (0..count)
        .map(|index| (index, start + step * index as f64 + bandwidth * 0.5))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::band_centers;

    fn coordinates(ticks: Vec<(usize, f64)>) -> Vec<f64> {
        ticks.into_iter().map(|(_, coordinate)| coordinate).collect()
    }

    #[test]
    fn band_centers_split_range_evenly_without_padding() {
        assert_eq!(
            coordinates(band_centers(2, (0.0, 100.0), 0.0, 0.0)),
            vec![25.0, 75.0]
        );
    }

    #[test]
    fn point_layout_reaches_both_range_ends() {
        assert_eq!(
            coordinates(band_centers(3, (0.0, 100.0), 1.0, 0.0)),
            vec![0.0, 50.0, 100.0]
        );
    }

    #[test]
    fn single_point_is_centered() {
        assert_eq!(
            coordinates(band_centers(1, (10.0, 30.0), 1.0, 0.0)),
            vec![20.0]
        );
    }

    #[test]
    fn reversed_range_keeps_index_order() {
        assert_eq!(
            coordinates(band_centers(2, (100.0, 0.0), 0.0, 0.0)),
            vec![75.0, 25.0]
        );
    }

    #[test]
    fn empty_axis_has_no_ticks() {
        assert!(band_centers(0, (0.0, 100.0), 0.0, 0.0).is_empty());
    }
}
