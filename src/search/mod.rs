//! Search box behavior and the background worker that performs lookups.
//!
//! Keystrokes flow into [`SearchBox`], which debounces them and asks for a
//! fetch once the query settles. The host forwards that request to a
//! [`SearchRuntime`], whose worker thread calls the configured
//! [`AccountSearch`](crate::api::AccountSearch) client and sends the answer
//! back tagged with its request id.

pub mod debounce;
mod runtime;
mod state;
mod worker;

pub use debounce::Debounced;
pub use runtime::SearchRuntime;
pub use state::{
	RequestId, SearchBox, SearchEffect, SearchEvent, SearchPhase, is_acceptable_query,
};
pub use worker::{SearchCommand, SearchResult};
