use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::DataKey;

/// How a series wants its tooltip value, name and color extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipEntrySettings {
    pub data_key: Option<DataKey>,
    pub name_key: Option<DataKey>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub hide: bool,
}

impl TooltipEntrySettings {
    #[must_use]
    pub fn with_data_key(data_key: impl Into<DataKey>) -> Self {
        Self {
            data_key: Some(data_key.into()),
            ..Self::default()
        }
    }
}

/// Entry a series prepared for itself, e.g. one axis of a scatter point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreparedTooltipItem {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub data_key: Option<DataKey>,
    pub payload: Option<Value>,
    pub value: Option<Value>,
}

/// Per-index data a series carries instead of reading global chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum DataDefinedOnItem {
    /// One raw record (or scalar) per index.
    RawValues(Vec<Value>),
    /// Already-shaped entries per index; each index may yield several entries.
    PreBuiltEntries(Vec<Vec<PreparedTooltipItem>>),
}

/// One registered graphical series as seen by the tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipPayloadConfiguration {
    pub settings: Option<TooltipEntrySettings>,
    pub data_defined_on_item: Option<DataDefinedOnItem>,
}

impl TooltipPayloadConfiguration {
    #[must_use]
    pub fn new(settings: TooltipEntrySettings) -> Self {
        Self {
            settings: Some(settings),
            data_defined_on_item: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: DataDefinedOnItem) -> Self {
        self.data_defined_on_item = Some(data);
        self
    }

    #[must_use]
    pub fn data_key(&self) -> Option<&DataKey> {
        self.settings.as_ref()?.data_key.as_ref()
    }
}

/// Display-ready tooltip row for one series at one index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipPayloadEntry {
    pub data_key: Option<DataKey>,
    pub name: Option<String>,
    pub value: Option<Value>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub payload: Option<Value>,
    pub name_key: Option<DataKey>,
    pub hide: bool,
}

/// Registration identity. Equal configurations registered twice get two ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TooltipPayloadId(u64);

static NEXT_PAYLOAD_ID: AtomicU64 = AtomicU64::new(1);

impl TooltipPayloadId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_PAYLOAD_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Ordered configuration list shared between selectors and consumers.
pub type TooltipPayloadConfigurations = Arc<[Arc<TooltipPayloadConfiguration>]>;

/// Insertion-ordered set of registered configurations, keyed by identity.
#[derive(Debug, Clone)]
pub struct TooltipPayloadRegistry {
    entries: IndexMap<TooltipPayloadId, Arc<TooltipPayloadConfiguration>>,
    ordered: TooltipPayloadConfigurations,
}

impl Default for TooltipPayloadRegistry {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            ordered: Arc::from(Vec::new()),
        }
    }
}

impl TooltipPayloadRegistry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: TooltipPayloadId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: TooltipPayloadId) -> Option<&Arc<TooltipPayloadConfiguration>> {
        self.entries.get(&id)
    }

    /// Configurations in registration order.
    #[must_use]
    pub fn ordered(&self) -> &TooltipPayloadConfigurations {
        &self.ordered
    }

    pub fn ids(&self) -> impl Iterator<Item = TooltipPayloadId> + '_ {
        self.entries.keys().copied()
    }

    /// Appends a configuration, or replaces it in place when `id` is known.
    pub(crate) fn upsert(
        &mut self,
        id: TooltipPayloadId,
        configuration: Arc<TooltipPayloadConfiguration>,
    ) {
        self.entries.insert(id, configuration);
        self.rebuild();
    }

    /// Replaces a known configuration in place. Returns `false` for unknown ids.
    pub(crate) fn replace(
        &mut self,
        id: TooltipPayloadId,
        configuration: Arc<TooltipPayloadConfiguration>,
    ) -> bool {
        let Some(slot) = self.entries.get_mut(&id) else {
            return false;
        };
        *slot = configuration;
        self.rebuild();
        true
    }

    /// Removes a configuration, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: TooltipPayloadId) -> bool {
        if self.entries.shift_remove(&id).is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        self.ordered = self.entries.values().cloned().collect();
    }
}
