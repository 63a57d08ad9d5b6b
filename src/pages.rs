// ---------------------------------------------------------------------------
// Pages — per-mount page state and the site session
// ---------------------------------------------------------------------------
//
// The router decides which page is mounted; the page owns everything that
// page needs (its catalog, its FAQ disclosure state, its scroll state),
// created fresh on mount and dropped on navigation away. Nothing is shared
// between page instances; the only process-wide state is the router.
// ---------------------------------------------------------------------------

use crate::catalog::Catalog;
use crate::dataset;
use crate::disclosure::DisclosureState;
use crate::error::EngineError;
use crate::router::{PageKind, RouteTable, Router, Transition};
use crate::scroll::ScrollState;

// ---------------------------------------------------------------------------
// Navigation surface
// ---------------------------------------------------------------------------

/// Header navigation entries: label and the exact path consumers must use.
pub const NAV_ITEMS: &[(&str, &str)] = &[
	("Services", "/services"),
	("Approach", "/approach"),
	("Case Studies", "/case-studies"),
	("Insights", "/insights"),
	("Resources", "/resources"),
	("Company", "/company"),
];

/// The closed set of supported paths. Anything else resolves to home.
pub fn route_table() -> RouteTable {
	RouteTable::new(PageKind::Home)
		.route("/", PageKind::Home)
		.route("/approach", PageKind::Approach)
		.route("/company", PageKind::Company)
		.route("/services", PageKind::Services)
		.route("/services/ai-readiness", PageKind::AiReadiness)
		.route("/case-studies", PageKind::CaseStudies)
		.route("/insights", PageKind::Insights)
		.route("/resources", PageKind::Resources)
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One mounted page: its catalog (for the four catalog pages), FAQ
/// disclosure state, and scroll state.
#[derive(Debug, Clone)]
pub struct Page {
	kind: PageKind,
	catalog: Option<Catalog>,
	faq: DisclosureState,
	scroll: ScrollState,
}

impl Page {
	/// Build fresh state for a page. Catalog pages mount their dataset;
	/// every page starts with all FAQ items closed and scroll at the top.
	pub fn mount(kind: PageKind) -> Result<Self, EngineError> {
		let catalog = match kind {
			PageKind::Services => Some(dataset::services()?),
			PageKind::CaseStudies => Some(dataset::case_studies()?),
			PageKind::Insights => Some(dataset::insights()?),
			PageKind::Resources => Some(dataset::resources()?),
			_ => None,
		};
		Ok(Self {
			kind,
			catalog,
			faq: DisclosureState::new(),
			scroll: ScrollState::default(),
		})
	}

	pub fn kind(&self) -> PageKind {
		self.kind
	}

	pub fn catalog(&self) -> Option<&Catalog> {
		self.catalog.as_ref()
	}

	pub fn catalog_mut(&mut self) -> Option<&mut Catalog> {
		self.catalog.as_mut()
	}

	pub fn faq(&self) -> &DisclosureState {
		&self.faq
	}

	pub fn faq_mut(&mut self) -> &mut DisclosureState {
		&mut self.faq
	}

	pub fn scroll(&self) -> &ScrollState {
		&self.scroll
	}

	pub fn scroll_mut(&mut self) -> &mut ScrollState {
		&mut self.scroll
	}
}

// ---------------------------------------------------------------------------
// Site
// ---------------------------------------------------------------------------

/// The running session: router plus the currently mounted page. Each
/// navigation replaces the page wholesale, so per-page state never leaks
/// across navigations.
#[derive(Debug, Clone)]
pub struct Site {
	router: Router,
	page: Page,
}

impl Site {
	/// Start a session from the environment's current location.
	pub fn new(initial_path: &str) -> Result<Self, EngineError> {
		let router = Router::new(route_table(), initial_path);
		let page = Page::mount(router.current_page())?;
		Ok(Self { router, page })
	}

	pub fn current_path(&self) -> &str {
		self.router.current_path()
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn page(&self) -> &Page {
		&self.page
	}

	pub fn page_mut(&mut self) -> &mut Page {
		&mut self.page
	}

	/// In-app navigation: push, dispatch, re-mount.
	pub fn navigate(&mut self, path: &str) -> Result<Transition, EngineError> {
		let transition = self.router.navigate(path);
		self.page = Page::mount(transition.page)?;
		Ok(transition)
	}

	/// Environment back navigation. `None` at the oldest entry.
	pub fn back(&mut self) -> Result<Option<Transition>, EngineError> {
		match self.router.pop_back() {
			Some(transition) => {
				self.page = Page::mount(transition.page)?;
				Ok(Some(transition))
			}
			None => Ok(None),
		}
	}

	/// Environment forward navigation. `None` at the newest entry.
	pub fn forward(&mut self) -> Result<Option<Transition>, EngineError> {
		match self.router.pop_forward() {
			Some(transition) => {
				self.page = Page::mount(transition.page)?;
				Ok(Some(transition))
			}
			None => Ok(None),
		}
	}

	/// Re-sync to an environment-reported path without pushing.
	pub fn handle_pop(&mut self, path: &str) -> Result<Transition, EngineError> {
		let transition = self.router.handle_pop(path);
		self.page = Page::mount(transition.page)?;
		Ok(transition)
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn route_table_covers_all_pages() {
		let table = route_table();
		assert_eq!(table.paths().len(), 8);
		assert_eq!(table.resolve("/insights"), PageKind::Insights);
		assert_eq!(table.resolve("/anything-else"), PageKind::Home);
	}

	#[test]
	fn nav_items_use_known_paths() {
		let table = route_table();
		for (_, path) in NAV_ITEMS {
			assert!(table.is_known(path), "nav item {} not routed", path);
		}
	}

	#[test]
	fn catalog_pages_mount_their_dataset() {
		let page = Page::mount(PageKind::CaseStudies).unwrap();
		assert_eq!(page.catalog().unwrap().records().len(), 9);
		let page = Page::mount(PageKind::Approach).unwrap();
		assert!(page.catalog().is_none());
	}

	#[test]
	fn mounted_page_starts_clean() {
		let page = Page::mount(PageKind::Insights).unwrap();
		assert!(!page.catalog().unwrap().selection().is_active());
		assert_eq!(page.faq().open_count(), 0);
		assert_eq!(page.scroll().offset(), 0.0);
	}

	#[test]
	fn navigation_discards_page_state() {
		let mut site = Site::new("/resources").unwrap();
		site.page_mut()
			.catalog_mut()
			.unwrap()
			.toggle_filter("Phase", "Assess");
		site.page_mut().faq_mut().toggle("pricing");
		site.navigate("/insights").unwrap();
		site.back().unwrap();

		// The resources page is a fresh mount, not the old instance.
		assert_eq!(site.page().kind(), PageKind::Resources);
		assert!(!site.page().catalog().unwrap().selection().is_active());
		assert!(!site.page().faq().is_open("pricing"));
	}

	#[test]
	fn unknown_initial_path_mounts_home() {
		let site = Site::new("/totally/unknown").unwrap();
		assert_eq!(site.page().kind(), PageKind::Home);
		assert_eq!(site.current_path(), "/totally/unknown");
	}
}
