use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::state::RequestId;
use super::worker::{self, SearchCommand, SearchResult};
use crate::api::AccountSearch;

/// Handle on the background search worker.
///
/// Publishes the newest request id before sending so the worker can skip
/// queries that were overtaken while queued.
pub struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
}

impl SearchRuntime {
	/// Spawn a worker that answers queries with `client`.
	pub fn spawn(client: Arc<dyn AccountSearch>) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(client);
		Self {
			tx,
			rx,
			latest_query_id,
		}
	}

	/// Hand `query` to the worker under `id`.
	pub fn issue(&mut self, id: RequestId, query: String) {
		self.latest_query_id.store(id, Ordering::Release);
		if self.tx.send(SearchCommand::Query { id, query }).is_err() {
			tracing::error!(id, "search worker is gone, query dropped");
		}
	}

	/// Next finished search, if one is waiting.
	pub fn try_recv(&self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}

	/// Ask the worker thread to exit.
	pub fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

impl Drop for SearchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
