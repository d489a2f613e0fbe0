//! chart-tooltip: tooltip and interaction state derivation for declarative charts.
//!
//! The crate keeps a normalized, serializable interaction store and derives
//! from it, through pure resolvers and memoized selectors, what a chart's
//! tooltip should display: which data index is active, at which coordinate,
//! whether the tooltip is visible, and the ordered per-series payload.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartState, ChartStore, ChartStoreConfig, TooltipSelectors};
pub use error::{ChartError, ChartResult};
