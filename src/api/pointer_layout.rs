use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::scale::validate_range;
use crate::error::{ChartError, ChartResult};

/// Direction categories run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutOrientation {
    /// Categories along x, values along y.
    #[default]
    Horizontal,
    /// Categories along y, values along x.
    Vertical,
}

/// Plot rectangle in chart-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// Page-space position of the chart container and its CSS scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerOffset {
    pub left: f64,
    pub top: f64,
    #[serde(default = "default_container_scale")]
    pub scale: f64,
}

impl Default for ContainerOffset {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scale: default_container_scale(),
        }
    }
}

fn default_container_scale() -> f64 {
    1.0
}

/// Scale of the tooltip (category) axis.
///
/// Band and point scales place one slot per windowed data row. The linear
/// scale positions each row by the numeric value of the tooltip axis data key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisScale {
    Band {
        #[serde(default)]
        padding_inner: f64,
        #[serde(default)]
        padding_outer: f64,
    },
    Point {
        #[serde(default)]
        padding: f64,
    },
    Linear {
        domain_start: f64,
        domain_end: f64,
    },
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::Band {
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }
}

/// Geometry of the tooltip axis: its scale and pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAxisGeometry {
    pub scale: AxisScale,
    pub range: (f64, f64),
}

/// Everything needed to turn a page-space pointer into an active index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerLayout {
    #[serde(default)]
    pub orientation: LayoutOrientation,
    pub plot_area: PlotArea,
    #[serde(default)]
    pub container: ContainerOffset,
    pub axis: TooltipAxisGeometry,
}

impl PointerLayout {
    /// Horizontal band layout whose axis spans the plot area width.
    #[must_use]
    pub fn horizontal_band(plot_area: PlotArea) -> Self {
        Self {
            orientation: LayoutOrientation::Horizontal,
            plot_area,
            container: ContainerOffset::default(),
            axis: TooltipAxisGeometry {
                scale: AxisScale::default(),
                range: (plot_area.left, plot_area.left + plot_area.width),
            },
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: LayoutOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerOffset) -> Self {
        self.container = container;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: TooltipAxisGeometry) -> Self {
        self.axis = axis;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        let area = self.plot_area;
        if !area.left.is_finite() || !area.top.is_finite() {
            return Err(ChartError::InvalidConfig(
                "plot area origin must be finite".to_owned(),
            ));
        }
        if !area.width.is_finite()
            || !area.height.is_finite()
            || area.width <= 0.0
            || area.height <= 0.0
        {
            return Err(ChartError::InvalidGeometry {
                width: area.width,
                height: area.height,
            });
        }

        let container = self.container;
        if !container.left.is_finite() || !container.top.is_finite() {
            return Err(ChartError::InvalidConfig(
                "container offset must be finite".to_owned(),
            ));
        }
        if !container.scale.is_finite() || container.scale <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "container scale must be finite and > 0".to_owned(),
            ));
        }

        validate_range(self.axis.range)?;
        match self.axis.scale {
            AxisScale::Band {
                padding_inner,
                padding_outer,
            } => {
                validate_padding(padding_inner, "band inner padding")?;
                validate_padding(padding_outer, "band outer padding")?;
            }
            AxisScale::Point { padding } => validate_padding(padding, "point padding")?,
            AxisScale::Linear {
                domain_start,
                domain_end,
            } => {
                LinearScale::new(domain_start, domain_end)?;
            }
        }
        Ok(self)
    }
}

fn validate_padding(padding: f64, label: &str) -> ChartResult<()> {
    if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
        return Err(ChartError::InvalidConfig(format!(
            "{label} must be finite and within [0, 1]"
        )));
    }
    Ok(())
}
