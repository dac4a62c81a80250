//! Delay a changing value until it has been stable for a fixed window.
//!
//! Time is passed in by the caller so the event loop stays the only owner of
//! the clock and tests never sleep.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// A value that follows its input only after the input stops changing.
///
/// Every [`push`](Debounced::push) restarts the wait. Intermediate values are
/// overwritten, never queued, so [`poll`](Debounced::poll) only ever surfaces
/// the last value pushed before the window elapsed.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
	delay: Duration,
	settled: T,
	pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debounced<T> {
	/// Start from `initial` with nothing pending.
	pub fn new(initial: T, delay: Duration) -> Self {
		Self {
			delay,
			settled: initial,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// The value downstream consumers currently see.
	pub fn settled(&self) -> &T {
		&self.settled
	}

	/// Record a new input value observed at `now`, restarting the wait.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Settle the pending value if its window has elapsed by `now`.
	///
	/// Returns the new settled value only when it differs from the previous
	/// one; a value that settles back to what consumers already have is not a
	/// change.
	pub fn poll(&mut self, now: Instant) -> Option<&T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.deadline <= now);
		if !due {
			return None;
		}

		let pending = self.pending.take()?;
		if pending.value == self.settled {
			return None;
		}
		self.settled = pending.value;
		Some(&self.settled)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending value will settle, if any.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Drop the pending value without settling it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Settle on `value` right away.
	///
	/// A pending value that differs from `value` stays pending and still
	/// settles once its window elapses.
	pub fn settle(&mut self, value: T) {
		if self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.value == value)
		{
			self.pending = None;
		}
		self.settled = value;
	}

	/// Jump straight to `value`, dropping anything pending.
	pub fn reset(&mut self, value: T) {
		self.pending = None;
		self.settled = value;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(500);

	#[test]
	fn value_settles_only_after_the_window() {
		let start = Instant::now();
		let mut debounced = Debounced::new(String::new(), DELAY);

		debounced.push("a".to_string(), start);
		assert_eq!(debounced.poll(start + Duration::from_millis(499)), None);
		assert_eq!(
			debounced.poll(start + DELAY).map(String::as_str),
			Some("a")
		);
		assert_eq!(debounced.settled(), "a");
		assert!(!debounced.is_pending());
	}

	#[test]
	fn rapid_changes_surface_only_the_last_value() {
		let start = Instant::now();
		let mut debounced = Debounced::new(String::new(), DELAY);

		let mut surfaced = Vec::new();
		for (offset, text) in ["h", "ho", "hoa"].iter().enumerate() {
			let at = start + Duration::from_millis(offset as u64 * 100);
			debounced.push((*text).to_string(), at);
			if let Some(value) = debounced.poll(at) {
				surfaced.push(value.clone());
			}
		}

		let last_push = start + Duration::from_millis(200);
		assert_eq!(debounced.deadline(), Some(last_push + DELAY));
		assert_eq!(debounced.poll(start + DELAY), None, "wait restarts on every push");
		if let Some(value) = debounced.poll(last_push + DELAY) {
			surfaced.push(value.clone());
		}
		assert_eq!(surfaced, vec!["hoa".to_string()]);
	}

	#[test]
	fn settling_to_the_same_value_is_not_a_change() {
		let start = Instant::now();
		let mut debounced = Debounced::new("a".to_string(), DELAY);
		debounced.push("ab".to_string(), start);
		debounced.push("a".to_string(), start + Duration::from_millis(10));
		assert_eq!(debounced.poll(start + Duration::from_secs(5)), None);
		assert!(!debounced.is_pending());
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debounced = Debounced::new(0_u32, DELAY);
		debounced.push(3, start);
		debounced.cancel();
		assert_eq!(debounced.poll(start + Duration::from_secs(1)), None);
		assert_eq!(*debounced.settled(), 0);
	}

	#[test]
	fn settle_keeps_a_newer_pending_value() {
		let start = Instant::now();
		let mut debounced = Debounced::new(String::new(), DELAY);
		debounced.push("ab".to_string(), start);

		debounced.settle("a".to_string());
		assert_eq!(debounced.settled(), "a");
		assert!(debounced.is_pending());
		assert_eq!(
			debounced.poll(start + DELAY).map(String::as_str),
			Some("ab")
		);

		debounced.push("abc".to_string(), start);
		debounced.settle("abc".to_string());
		assert!(!debounced.is_pending());
	}

	#[test]
	fn zero_delay_settles_immediately() {
		let now = Instant::now();
		let mut debounced = Debounced::new(0_u32, Duration::ZERO);
		debounced.push(9, now);
		assert_eq!(debounced.poll(now), Some(&9));
	}
}
