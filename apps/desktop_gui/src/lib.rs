//! Curriculum Vitae desktop viewer: asset loading, panel building, tab and
//! link controllers, and the `eframe` application shell.

pub mod assets;
pub mod config;
pub mod controller;
pub mod panels;
pub mod ui;
