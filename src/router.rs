// ---------------------------------------------------------------------------
// Path router — route table, session history, and dispatch
// ---------------------------------------------------------------------------
//
// The route table is injected at startup and maps each known path to exactly
// one top-level page. The router owns the session history: `navigate` pushes
// an entry (dropping any forward entries first), the pop operations move the
// cursor without pushing, so back/forward never corrupts the history. Every
// transition requests a scroll reset; a full document reload does not exist
// in this model.
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PageKind
// ---------------------------------------------------------------------------

/// The top-level pages of the site. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
	Home,
	Services,
	AiReadiness,
	Approach,
	CaseStudies,
	Insights,
	Resources,
	Company,
}

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

/// Ordered path -> page mapping with a fallback for anything unrecognized.
/// Unknown paths are not errors: they resolve to the fallback page, logged so
/// broken links stay observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
	routes: Vec<(String, PageKind)>,
	fallback: PageKind,
}

impl RouteTable {
	pub fn new(fallback: PageKind) -> Self {
		Self {
			routes: Vec::new(),
			fallback,
		}
	}

	pub fn route(mut self, path: &str, page: PageKind) -> Self {
		self.routes.push((path.to_string(), page));
		self
	}

	pub fn is_known(&self, path: &str) -> bool {
		self.routes.iter().any(|(p, _)| p == path)
	}

	/// Resolve a path to its page. Total: unknown paths yield the fallback.
	pub fn resolve(&self, path: &str) -> PageKind {
		match self.routes.iter().find(|(p, _)| p == path) {
			Some((_, page)) => *page,
			None => {
				tracing::warn!(
					"unrecognized path {:?}, falling back to {:?}",
					path,
					self.fallback
				);
				self.fallback
			}
		}
	}

	pub fn paths(&self) -> Vec<&str> {
		self.routes.iter().map(|(p, _)| p.as_str()).collect()
	}
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// The dispatch contract: each navigation event selects exactly one page and
/// asks the presentation layer to reset scroll to the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
	pub path: String,
	pub page: PageKind,
	#[serde(rename = "scrollToTop")]
	pub scroll_to_top: bool,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Session router: current path plus the history entries around it. Runs for
/// the lifetime of the page session; there is no terminal state.
#[derive(Debug, Clone)]
pub struct Router {
	table: RouteTable,
	entries: Vec<String>,
	cursor: usize,
}

impl Router {
	/// Start a session at the environment's current location.
	pub fn new(table: RouteTable, initial_path: &str) -> Self {
		Self {
			table,
			entries: vec![initial_path.to_string()],
			cursor: 0,
		}
	}

	pub fn current_path(&self) -> &str {
		&self.entries[self.cursor]
	}

	pub fn current_page(&self) -> PageKind {
		self.table.resolve(self.current_path())
	}

	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Number of history entries in the session.
	pub fn history_len(&self) -> usize {
		self.entries.len()
	}

	/// In-app navigation: push `path` onto the history (discarding any
	/// forward entries) and dispatch to its page.
	pub fn navigate(&mut self, path: &str) -> Transition {
		self.entries.truncate(self.cursor + 1);
		self.entries.push(path.to_string());
		self.cursor += 1;
		self.transition()
	}

	/// Back navigation reported by the environment. Moves the cursor without
	/// pushing; `None` when already at the oldest entry.
	pub fn pop_back(&mut self) -> Option<Transition> {
		if self.cursor == 0 {
			return None;
		}
		self.cursor -= 1;
		Some(self.transition())
	}

	/// Forward navigation reported by the environment. Moves the cursor
	/// without pushing; `None` when already at the newest entry.
	pub fn pop_forward(&mut self) -> Option<Transition> {
		if self.cursor + 1 >= self.entries.len() {
			return None;
		}
		self.cursor += 1;
		Some(self.transition())
	}

	/// Re-sync to a path the environment reports that this session did not
	/// produce (e.g. a restored entry). Replaces the current entry in place,
	/// never pushes.
	pub fn handle_pop(&mut self, path: &str) -> Transition {
		self.entries[self.cursor] = path.to_string();
		self.transition()
	}

	fn transition(&self) -> Transition {
		let path = self.current_path().to_string();
		let page = self.table.resolve(&path);
		Transition {
			path,
			page,
			scroll_to_top: true,
		}
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn table() -> RouteTable {
		RouteTable::new(PageKind::Home)
			.route("/", PageKind::Home)
			.route("/services", PageKind::Services)
			.route("/services/ai-readiness", PageKind::AiReadiness)
			.route("/case-studies", PageKind::CaseStudies)
	}

	#[test]
	fn resolve_known_path() {
		assert_eq!(table().resolve("/services"), PageKind::Services);
		assert_eq!(
			table().resolve("/services/ai-readiness"),
			PageKind::AiReadiness
		);
	}

	#[test]
	fn resolve_unknown_path_falls_back() {
		let table = table();
		assert!(!table.is_known("/pricing"));
		assert_eq!(table.resolve("/pricing"), PageKind::Home);
	}

	#[test]
	fn initial_state_reads_starting_location() {
		let router = Router::new(table(), "/case-studies");
		assert_eq!(router.current_path(), "/case-studies");
		assert_eq!(router.current_page(), PageKind::CaseStudies);
		assert_eq!(router.history_len(), 1);
	}

	#[test]
	fn navigate_pushes_and_dispatches() {
		let mut router = Router::new(table(), "/");
		let t = router.navigate("/services");
		assert_eq!(t.page, PageKind::Services);
		assert!(t.scroll_to_top);
		assert_eq!(router.history_len(), 2);
		assert_eq!(router.current_path(), "/services");
	}

	#[test]
	fn back_returns_to_prior_path_without_duplicating_history() {
		let mut router = Router::new(table(), "/services");
		router.navigate("/services/ai-readiness");

		let t = router.pop_back().unwrap();
		assert_eq!(t.path, "/services");
		assert_eq!(t.page, PageKind::Services);
		// No new entry was pushed; the forward entry is intact.
		assert_eq!(router.history_len(), 2);
		let fwd = router.pop_forward().unwrap();
		assert_eq!(fwd.path, "/services/ai-readiness");
		assert_eq!(router.history_len(), 2);
	}

	#[test]
	fn back_at_oldest_entry_is_none() {
		let mut router = Router::new(table(), "/");
		assert!(router.pop_back().is_none());
	}

	#[test]
	fn forward_at_newest_entry_is_none() {
		let mut router = Router::new(table(), "/");
		router.navigate("/services");
		assert!(router.pop_forward().is_none());
	}

	#[test]
	fn navigate_after_back_discards_forward_entries() {
		let mut router = Router::new(table(), "/");
		router.navigate("/services");
		router.navigate("/case-studies");
		router.pop_back();
		router.pop_back();
		router.navigate("/services/ai-readiness");
		assert_eq!(router.history_len(), 2);
		assert!(router.pop_forward().is_none());
		assert_eq!(router.current_path(), "/services/ai-readiness");
	}

	#[test]
	fn unknown_navigation_dispatches_fallback() {
		let mut router = Router::new(table(), "/");
		let t = router.navigate("/pricing");
		assert_eq!(t.page, PageKind::Home);
		assert_eq!(router.current_path(), "/pricing");
	}

	#[test]
	fn handle_pop_resyncs_without_pushing() {
		let mut router = Router::new(table(), "/");
		router.navigate("/services");
		let t = router.handle_pop("/case-studies");
		assert_eq!(t.page, PageKind::CaseStudies);
		assert_eq!(router.history_len(), 2);
		assert_eq!(router.current_path(), "/case-studies");
	}
}
