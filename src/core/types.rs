use std::fmt;

use serde::{Deserialize, Serialize};

/// Data-row position considered active for tooltip purposes.
///
/// Indices are textual so tree-shaped data can address nested records with
/// paths such as `"children[0]children[2]"`; flat data uses decimal positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TooltipIndex(String);

impl TooltipIndex {
    #[must_use]
    pub fn new(index: impl Into<String>) -> Self {
        Self(index.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the flat row position when the index is a plain decimal.
    #[must_use]
    pub fn as_position(&self) -> Option<usize> {
        self.0.trim().parse().ok()
    }
}

impl From<usize> for TooltipIndex {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for TooltipIndex {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TooltipIndex {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TooltipIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chart-local pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Raw pointer position in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPointer {
    pub page_x: f64,
    pub page_y: f64,
}

impl ChartPointer {
    #[must_use]
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Tooltip scope: every series at a column, or one series only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipEventType {
    #[default]
    Axis,
    Item,
}

/// Input channel category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    #[default]
    Hover,
    Click,
}

impl TooltipEventType {
    pub const ALL: [Self; 2] = [Self::Axis, Self::Item];
}

impl TooltipTrigger {
    pub const ALL: [Self; 2] = [Self::Hover, Self::Click];
}
