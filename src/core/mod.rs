pub mod data_key;
pub mod scale;
pub mod searcher;
pub mod types;
pub mod windowing;

pub use data_key::{DataKey, display_text};
pub use scale::LinearScale;
pub use searcher::{ArrayTooltipSearcher, SearcherKind, TooltipPayloadSearcher, TreeTooltipSearcher};
pub use types::{ChartPointer, Coordinate, TooltipEventType, TooltipIndex, TooltipTrigger};
pub use windowing::slice_window;
