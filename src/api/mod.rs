mod active_coordinate_resolver;
mod active_index_resolver;
mod chart_state;
mod configuration_aggregator;
mod interaction_coordinator;
mod payload_combiner;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_layout;
mod pointer_projector;
mod selector_cache;
mod selectors;
mod store;
mod store_config;
mod tooltip_active_resolver;
mod tooltip_context;
mod tooltip_payload;

pub use active_coordinate_resolver::resolve_active_coordinate;
pub use active_index_resolver::resolve_active_index;
pub use chart_state::{
    ChartAction, ChartDataState, ChartOptions, ChartState, TooltipAxisSettings,
};
pub use configuration_aggregator::{
    TooltipStateView, active_item_data_key, get_tooltip_state, select_configurations,
};
pub use payload_combiner::{PayloadInputs, combine_payload, resolve_active_label};
pub use pointer_layout::{
    AxisScale, ContainerOffset, LayoutOrientation, PlotArea, PointerLayout, TooltipAxisGeometry,
};
pub use pointer_projector::{PointerProjection, axis_ticks, project_pointer};
pub use selector_cache::{SelectorCacheStats, TooltipSelectorStats};
pub use selectors::{PayloadRequest, TooltipPayload, TooltipSelectors};
pub use store::{ChartStore, ResolvedTooltip};
pub use store_config::ChartStoreConfig;
pub use tooltip_active_resolver::resolve_is_active;
pub use tooltip_context::TooltipContext;
pub use tooltip_payload::{
    DataDefinedOnItem, PreparedTooltipItem, TooltipEntrySettings, TooltipPayloadConfiguration,
    TooltipPayloadConfigurations, TooltipPayloadEntry, TooltipPayloadId, TooltipPayloadRegistry,
};
