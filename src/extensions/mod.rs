//! Observer plugins and drawing decorators.
//!
//! Extensions see chart state through read-only contexts and never reach into
//! chart internals.

pub mod decorators;
pub mod plugins;

pub use decorators::{
    ChartDecorator, DecorationContext, ReferenceLine, ValueAxisMapping, ValueAxisOrientation,
};
pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
