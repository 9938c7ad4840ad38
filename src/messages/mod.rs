//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Loader layers.

pub mod ui_events;
pub mod loader;
pub mod render;

pub use ui_events::UiEvent;
pub use loader::{LoadKind, LoaderCommand, LoaderResponse};
pub use render::RenderState;
