//! Account search box for a short-video site, rendered in the terminal.
//!
//! The headless pieces ([`search::SearchBox`], [`image::FallbackImage`] and the
//! [`api`] clients) carry all of the behavior; [`tui`] draws them and feeds
//! them terminal events.

pub mod account;
pub mod api;
pub mod app_dirs;
pub mod image;
pub mod logging;
pub mod outcome;
pub mod search;
pub mod tui;

pub use account::Account;
pub use api::{AccountSearch, FixtureSearch, HttpSearchClient, ResultKind, SearchError};
pub use outcome::SearchOutcome;
pub use tui::theme::{Theme, builtin_themes, default_theme};
pub use tui::{App, AppOptions, UiLabels, run};
