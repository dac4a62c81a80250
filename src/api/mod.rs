//! Clients for the remote account search endpoint.
//!
//! The rest of the crate only sees the [`AccountSearch`] trait. The HTTP
//! client talks to the real service; the fixture client answers from a local
//! JSON file so the interface can be driven offline and in tests.

mod error;
mod fixture;
mod http;

pub use error::SearchError;
pub use fixture::FixtureSearch;
pub use http::{HttpSearchClient, ResultKind, endpoint_for};

use crate::account::Account;

/// Anything that can turn a query into a list of matching accounts.
///
/// Implementations are called from the background search worker and may
/// block.
pub trait AccountSearch: Send + Sync {
	/// Look up accounts matching `query`.
	fn search(&self, query: &str) -> Result<Vec<Account>, SearchError>;
}
