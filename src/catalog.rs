// ---------------------------------------------------------------------------
// Catalog — records + schema + selection, one module for every catalog page
// ---------------------------------------------------------------------------
//
// The case-studies, insights, resources, and services pages are the same
// machine with different data: an immutable record collection, a facet
// schema, and one page-local selection. `view()` recomputes the visible
// cards from scratch on every call.
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::filter::{featured_records, filter_records};
use crate::schema::FacetSchema;
use crate::selection::SelectionState;
use crate::types::{FacetBadge, Record, RecordCard};

// ---------------------------------------------------------------------------
// CatalogView
// ---------------------------------------------------------------------------

/// The rendered projection of a catalog under its current selection.
///
/// `cards` empty with `filter_active` true is the explicit empty state the
/// page must render ("no results match your filters"); `filter_active` false
/// means the full collection is showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
	pub cards: Vec<RecordCard>,
	/// Size of the unfiltered collection.
	pub total: usize,
	#[serde(rename = "filterActive")]
	pub filter_active: bool,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
	records: Vec<Record>,
	schema: FacetSchema,
	selection: SelectionState,
}

impl Catalog {
	/// Build a catalog over an authored record collection. The records are
	/// immutable for the catalog's lifetime; only the selection changes.
	pub fn new(records: Vec<Record>, schema: FacetSchema) -> Self {
		let selection = SelectionState::new(&schema);
		Self {
			records,
			schema,
			selection,
		}
	}

	/// Ingestion seam for authored content: records as a JSON array.
	pub fn from_json(records_json: &str, schema: FacetSchema) -> Result<Self, EngineError> {
		let records: Vec<Record> = serde_json::from_str(records_json)?;
		Ok(Self::new(records, schema))
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn schema(&self) -> &FacetSchema {
		&self.schema
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn set_query(&mut self, query: &str) {
		self.selection.set_query(query);
	}

	pub fn toggle_filter(&mut self, category: &str, value: &str) {
		self.selection.toggle(&self.schema, category, value);
	}

	pub fn clear_filters(&mut self) {
		self.selection.clear_all();
	}

	/// Recompute the visible cards for the current query and selection.
	pub fn view(&self) -> CatalogView {
		let cards = filter_records(&self.records, &self.selection, &self.schema)
			.into_iter()
			.map(|r| self.card(r))
			.collect();
		CatalogView {
			cards,
			total: self.records.len(),
			filter_active: self.selection.is_active(),
		}
	}

	/// The featured rail: independent of the current query and selection.
	pub fn featured(&self) -> Vec<RecordCard> {
		featured_records(&self.records)
			.into_iter()
			.map(|r| self.card(r))
			.collect()
	}

	/// Project one record into its card, badges in schema category order.
	fn card(&self, record: &Record) -> RecordCard {
		let mut badges = Vec::new();
		for spec in self.schema.categories() {
			if let Some(value) = record.facet_value(&spec.name) {
				for v in value.values() {
					badges.push(FacetBadge {
						category: spec.name.clone(),
						value: v.to_string(),
					});
				}
			}
		}
		RecordCard {
			id: record.id.clone(),
			title: record.title.clone(),
			teaser: record.teaser.clone(),
			badges,
			featured: record.featured,
		}
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Catalog {
		let schema = FacetSchema::builder()
			.category("Phase", &["Assess", "Deploy", "Maintain"])
			.category("Topic", &["Agents", "Governance"])
			.build()
			.unwrap();
		let records = vec![
			Record::new(1, "Pilot governance", "Setting the rules first.")
				.facet("Phase", "Assess")
				.facet("Topic", "Governance")
				.featured(),
			Record::new(2, "Agent rollout", "Deploying scoped assistants.")
				.facet("Phase", vec!["Deploy", "Maintain"])
				.facet("Topic", "Agents"),
		];
		Catalog::new(records, schema)
	}

	#[test]
	fn unfiltered_view_shows_everything() {
		let catalog = catalog();
		let view = catalog.view();
		assert_eq!(view.cards.len(), 2);
		assert_eq!(view.total, 2);
		assert!(!view.filter_active);
	}

	#[test]
	fn empty_result_is_distinct_from_unfiltered() {
		let mut catalog = catalog();
		catalog.set_query("nothing matches this");
		let view = catalog.view();
		assert!(view.cards.is_empty());
		assert!(view.filter_active);
		assert_eq!(view.total, 2);
	}

	#[test]
	fn badges_follow_schema_order_and_expand_multi_values() {
		let catalog = catalog();
		let view = catalog.view();
		let badges: Vec<(&str, &str)> = view.cards[1]
			.badges
			.iter()
			.map(|b| (b.category.as_str(), b.value.as_str()))
			.collect();
		assert_eq!(
			badges,
			vec![
				("Phase", "Deploy"),
				("Phase", "Maintain"),
				("Topic", "Agents")
			]
		);
	}

	#[test]
	fn featured_ignores_current_filters() {
		let mut catalog = catalog();
		catalog.toggle_filter("Topic", "Agents");
		assert!(catalog.view().cards.iter().all(|c| c.id == 2.into()));
		let featured = catalog.featured();
		assert_eq!(featured.len(), 1);
		assert_eq!(featured[0].id, 1.into());
	}

	#[test]
	fn clear_filters_restores_full_view() {
		let mut catalog = catalog();
		catalog.set_query("pilot");
		catalog.toggle_filter("Phase", "Assess");
		catalog.clear_filters();
		let view = catalog.view();
		assert_eq!(view.cards.len(), 2);
		assert!(!view.filter_active);
	}

	#[test]
	fn from_json_ingests_authored_records() {
		let schema = FacetSchema::builder()
			.category("Phase", &["Assess"])
			.build()
			.unwrap();
		let json = r#"[
			{"id": 1, "title": "A", "teaser": "a", "facets": {"Phase": "Assess"}, "featured": true},
			{"id": "slug-b", "title": "B", "teaser": "b", "facets": {"Phase": ["Assess"]}}
		]"#;
		let catalog = Catalog::from_json(json, schema).unwrap();
		assert_eq!(catalog.records().len(), 2);
		assert_eq!(catalog.featured().len(), 1);
	}

	#[test]
	fn from_json_rejects_malformed_input() {
		let schema = FacetSchema::builder()
			.category("Phase", &["Assess"])
			.build()
			.unwrap();
		let err = Catalog::from_json("{not json", schema).unwrap_err();
		assert!(matches!(err, EngineError::Ingestion(_)));
	}
}
