use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::state::RequestId;
use crate::account::Account;
use crate::api::{AccountSearch, SearchError};

/// Instructions accepted by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Look up `query` and answer with `id`.
	Query { id: RequestId, query: String },
	/// Stop the worker thread.
	Shutdown,
}

/// Answer produced for a [`SearchCommand::Query`].
#[derive(Debug)]
pub struct SearchResult {
	pub id: RequestId,
	pub query: String,
	pub outcome: Result<Vec<Account>, SearchError>,
}

/// Launch the background search worker thread and return its channels.
///
/// The returned counter holds the id of the newest query. Queries that were
/// superseded before the worker picked them up are skipped without touching
/// the network.
pub fn spawn(
	client: Arc<dyn AccountSearch>,
) -> (Sender<SearchCommand>, Receiver<SearchResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(client.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	client: &dyn AccountSearch,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, &result_tx, latest_query_id, command) {
			break;
		}
	}
	tracing::debug!("search worker stopped");
}

fn handle_command(
	client: &dyn AccountSearch,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if latest_query_id.load(Ordering::Acquire) != id {
				tracing::trace!(id, "skipping superseded query");
				return true;
			}
			let outcome = client.search(&query);
			result_tx.send(SearchResult { id, query, outcome }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use super::*;
	use crate::api::FixtureSearch;

	struct RecordingSearch {
		seen: Mutex<Vec<String>>,
	}

	impl AccountSearch for RecordingSearch {
		fn search(&self, query: &str) -> Result<Vec<Account>, SearchError> {
			self.seen
				.lock()
				.expect("lock")
				.push(query.to_string());
			Ok(Vec::new())
		}
	}

	#[test]
	fn worker_answers_queries_with_their_id() {
		let client = FixtureSearch::new(vec![Account::new(1, "Hoa", "hoa", true, "")]);
		let (tx, rx, latest) = spawn(Arc::new(client));

		latest.store(7, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 7,
			query: "ho".into(),
		})
		.expect("send");

		let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
		assert_eq!(result.id, 7);
		assert_eq!(result.query, "ho");
		let accounts = result.outcome.expect("fixture search succeeds");
		assert_eq!(accounts.len(), 1);

		tx.send(SearchCommand::Shutdown).expect("shutdown");
	}

	#[test]
	fn superseded_queries_never_reach_the_client() {
		let client = Arc::new(RecordingSearch {
			seen: Mutex::new(Vec::new()),
		});
		let (tx, rx, latest) = spawn(client.clone());

		latest.store(2, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: "old".into(),
		})
		.expect("send");
		tx.send(SearchCommand::Query {
			id: 2,
			query: "new".into(),
		})
		.expect("send");

		let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
		assert_eq!(result.id, 2);
		assert_eq!(*client.seen.lock().expect("lock"), vec!["new".to_string()]);
		tx.send(SearchCommand::Shutdown).expect("shutdown");
	}
}
