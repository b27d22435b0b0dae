//! Controller layer: UI actions, tab state transitions, and link dispatch.

pub mod events;
pub mod links;
pub mod tabs;
