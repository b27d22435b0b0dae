//! UI layer: application shell, widgets, theme, and texture cache.

pub mod app;
pub mod textures;
pub mod theme;
pub mod widgets;

pub use app::{HeaderPhoto, ResumeApp};
