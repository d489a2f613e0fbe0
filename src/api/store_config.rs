use serde::{Deserialize, Serialize};

use crate::core::{DataKey, SearcherKind, TooltipEventType, TooltipIndex, TooltipTrigger};
use crate::error::{ChartError, ChartResult};

use super::{PointerLayout, TooltipAxisSettings};

/// Public store bootstrap configuration.
///
/// This type is serializable so host applications can persist/load tooltip
/// setup without inventing their own ad-hoc format. Custom searchers are not
/// serializable and are injected with [`super::ChartStore::with_searcher`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartStoreConfig {
    #[serde(default)]
    pub tooltip_event_type: TooltipEventType,
    #[serde(default)]
    pub trigger: TooltipTrigger,
    #[serde(default)]
    pub default_index: Option<TooltipIndex>,
    #[serde(default)]
    pub tooltip_axis: TooltipAxisSettings,
    #[serde(default)]
    pub pointer_layout: Option<PointerLayout>,
    #[serde(default)]
    pub searcher: SearcherKind,
}

impl ChartStoreConfig {
    /// Axis tooltip on hover, array searcher, no pointer layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_event_type(mut self, event_type: TooltipEventType) -> Self {
        self.tooltip_event_type = event_type;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Index the tooltip opens at before any interaction.
    #[must_use]
    pub fn with_default_index(mut self, index: impl Into<TooltipIndex>) -> Self {
        self.default_index = Some(index.into());
        self
    }

    #[must_use]
    pub fn with_tooltip_axis_data_key(mut self, data_key: impl Into<DataKey>) -> Self {
        self.tooltip_axis.data_key = Some(data_key.into());
        self
    }

    #[must_use]
    pub fn with_pointer_layout(mut self, layout: PointerLayout) -> Self {
        self.pointer_layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_searcher(mut self, searcher: SearcherKind) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .default_index
            .as_ref()
            .is_some_and(|index| index.as_str().trim().is_empty())
        {
            return Err(ChartError::InvalidConfig(
                "default index must not be empty".to_owned(),
            ));
        }
        if self
            .tooltip_axis
            .data_key
            .as_ref()
            .is_some_and(|key| key.as_str().is_empty())
        {
            return Err(ChartError::InvalidConfig(
                "tooltip axis data key must not be empty".to_owned(),
            ));
        }
        if let Some(layout) = self.pointer_layout {
            layout.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
