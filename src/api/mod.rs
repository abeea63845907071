mod scroll_controller;
mod scroll_controller_config;
mod scroll_event;
mod viewport_registry;

pub use scroll_controller::{ScrollController, ScrollOutcome, SkipReason};
pub use scroll_controller_config::ScrollControllerConfig;
pub use scroll_event::{ElementId, ScrollEvent, ViewportResolver};
pub use viewport_registry::ViewportRegistry;
