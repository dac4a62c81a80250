//! Terminal front-end: page chrome, the search box widgets and the event loop.

pub mod app;
pub mod components;
pub mod config;
pub mod input;
pub mod theme;

pub use app::{App, AppOptions, run};
pub use config::UiLabels;
pub use theme::Theme;
