//! Interactive page hosting the account search box.
//!
//! [`App`] ties the pure [`SearchBox`](crate::search::SearchBox) state to a
//! terminal: key and mouse events become search events, fetch requests go to
//! the background [`SearchRuntime`](crate::search::SearchRuntime), and every
//! frame is drawn from the current state. Input handling, rendering and the
//! event loop live in their own modules.

mod actions;
mod render;
mod runtime;
mod state;

pub use runtime::run;
pub use state::{App, AppOptions};
