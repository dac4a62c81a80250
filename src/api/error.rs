use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by an [`AccountSearch`](super::AccountSearch) client.
#[derive(Debug, Error)]
pub enum SearchError {
	/// The request did not complete within the configured timeout.
	#[error("search request timed out")]
	Timeout,

	/// The request could not be sent or the connection failed.
	#[error("search request failed: {0}")]
	Network(#[source] reqwest::Error),

	/// The service answered with a non-success status code.
	#[error("search service answered with status {status}")]
	Status { status: u16 },

	/// The response body was not the expected JSON shape.
	#[error("failed to decode search response: {0}")]
	Decode(String),

	/// The configured base URL cannot be used to build request URLs.
	#[error("invalid search endpoint '{url}': {source}")]
	InvalidBaseUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	/// The offline fixture could not be read.
	#[error("failed to read fixture {}: {source}", .path.display())]
	FixtureIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The offline fixture is not a list of accounts.
	#[error("fixture {} is not valid account JSON: {source}", .path.display())]
	FixtureFormat {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl From<reqwest::Error> for SearchError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout
		} else if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err)
		}
	}
}
