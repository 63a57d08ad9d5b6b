// ---------------------------------------------------------------------------
// Disclosure state — independent expand/collapse per FAQ item
// ---------------------------------------------------------------------------

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Open/closed state for a page's disclosure blocks. Items are independent:
/// toggling one never closes another (no accordion exclusivity), and every
/// item starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureState {
	open: HashSet<String>,
}

impl DisclosureState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Flip one item's open state.
	pub fn toggle(&mut self, item_id: &str) {
		if !self.open.remove(item_id) {
			self.open.insert(item_id.to_string());
		}
	}

	pub fn is_open(&self, item_id: &str) -> bool {
		self.open.contains(item_id)
	}

	pub fn open_count(&self) -> usize {
		self.open.len()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
