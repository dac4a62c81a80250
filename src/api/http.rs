use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use super::{AccountSearch, SearchError};
use crate::account::Account;

const SEARCH_PATH: &str = "users/search";

/// How much detail the service should return per account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
	/// Short result list used by the search popover.
	#[default]
	Less,
	/// Full result list used by dedicated result pages.
	More,
}

impl ResultKind {
	/// Value sent in the `type` query parameter.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Less => "less",
			Self::More => "more",
		}
	}

	/// Parse a kind from its parameter value, ignoring case.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"less" => Some(Self::Less),
			"more" => Some(Self::More),
			_ => None,
		}
	}
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default)]
	data: Vec<Account>,
}

/// Blocking HTTP client for `GET {base}/users/search?q=..&type=..`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: Client,
	endpoint: Url,
	kind: ResultKind,
}

impl HttpSearchClient {
	/// Build a client for the service rooted at `base_url`. Every request is
	/// bounded by `timeout`.
	pub fn new(base_url: &str, timeout: Duration, kind: ResultKind) -> Result<Self, SearchError> {
		let endpoint = endpoint_for(base_url)?;
		let http = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("tikseek/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self {
			http,
			endpoint,
			kind,
		})
	}

	/// Full request URL for `query`.
	#[must_use]
	pub fn request_url(&self, query: &str) -> Url {
		let mut url = self.endpoint.clone();
		url.query_pairs_mut()
			.append_pair("q", query)
			.append_pair("type", self.kind.as_str());
		url
	}
}

impl AccountSearch for HttpSearchClient {
	fn search(&self, query: &str) -> Result<Vec<Account>, SearchError> {
		let url = self.request_url(query);
		tracing::debug!(%url, "sending account search request");

		let response = self.http.get(url).send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::Status {
				status: status.as_u16(),
			});
		}

		let body: SearchResponse = response.json()?;
		Ok(body.data)
	}
}

/// Resolve the search endpoint below `base_url`, keeping any path prefix the
/// base already carries.
pub fn endpoint_for(base_url: &str) -> Result<Url, SearchError> {
	let invalid = |source| SearchError::InvalidBaseUrl {
		url: base_url.to_string(),
		source,
	};

	let mut base = base_url.trim().trim_end_matches('/').to_string();
	base.push('/');
	let base = Url::parse(&base).map_err(invalid)?;
	if base.cannot_be_a_base() {
		return Err(invalid(url::ParseError::RelativeUrlWithoutBase));
	}
	base.join(SEARCH_PATH).map_err(invalid)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn result_kind_names_round_trip() {
		assert_eq!(ResultKind::from_name(" More "), Some(ResultKind::More));
		assert_eq!(ResultKind::from_name("less"), Some(ResultKind::Less));
		assert_eq!(ResultKind::from_name("all"), None);
	}

	#[test]
	fn endpoint_keeps_base_path_prefix() {
		let url = endpoint_for("https://api.example.com/api/").expect("endpoint");
		assert_eq!(url.as_str(), "https://api.example.com/api/users/search");

		let url = endpoint_for("https://api.example.com/api").expect("endpoint");
		assert_eq!(url.as_str(), "https://api.example.com/api/users/search");
	}

	#[test]
	fn endpoint_rejects_relative_urls() {
		let err = endpoint_for("not a url").unwrap_err();
		assert!(matches!(err, SearchError::InvalidBaseUrl { .. }));
		assert!(err.to_string().contains("not a url"));
	}

	#[test]
	fn request_url_encodes_query_and_kind() {
		let client = HttpSearchClient::new(
			"https://api.example.com/api",
			Duration::from_secs(1),
			ResultKind::Less,
		)
		.expect("client");

		let url = client.request_url("hoa & ha");
		assert_eq!(
			url.as_str(),
			"https://api.example.com/api/users/search?q=hoa+%26+ha&type=less"
		);
	}

	#[test]
	fn response_without_data_decodes_as_empty() {
		let body: SearchResponse = serde_json::from_str("{}").expect("decode");
		assert!(body.data.is_empty());
	}
}
