//! Optional feature modules live here.
//!
//! Extensions observe the store; they are not consulted by any resolver.

pub mod plugins;

pub use plugins::{TooltipPlugin, TooltipPluginContext, TooltipPluginEvent};
