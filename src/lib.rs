// ---------------------------------------------------------------------------
// fieldsignal-engine — catalog filtering and navigation core
// ---------------------------------------------------------------------------
//
// The headless core of the FieldSignal site: typed catalog records with
// facet schemas, a pure filter engine, per-page selection and disclosure
// state, a path router with session history, and scroll-derived UI flags.
// Everything is synchronous and single-threaded; state transitions are
// reactions to discrete UI events. Rendering is out of scope.
// ---------------------------------------------------------------------------

pub mod catalog;
pub mod dataset;
pub mod disclosure;
pub mod error;
pub mod filter;
pub mod pages;
pub mod router;
pub mod schema;
pub mod scroll;
pub mod selection;
pub mod types;

pub use catalog::{Catalog, CatalogView};
pub use disclosure::DisclosureState;
pub use error::EngineError;
pub use pages::{Page, Site};
pub use router::{PageKind, RouteTable, Router, Transition};
pub use schema::{CategorySpec, FacetSchema};
pub use scroll::{ScrollState, ScrollThresholds, ScrollView, SectionBounds};
pub use selection::SelectionState;
pub use types::{FacetBadge, FacetValue, Record, RecordCard, RecordId};
