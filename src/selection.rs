// ---------------------------------------------------------------------------
// Selection state — free-text query + single-select-per-category facet map
// ---------------------------------------------------------------------------
//
// One instance per mounted catalog page. Every category starts unselected;
// selecting a value already selected clears it (toggle-off), selecting a
// different value replaces it. Out-of-domain inputs are contract violations
// by the caller and degrade to a logged no-op.
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::FacetSchema;

// ---------------------------------------------------------------------------
// SelectionState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
	pub query: String,
	/// category -> currently selected option, `None` when the category
	/// imposes no constraint.
	selected: BTreeMap<String, Option<String>>,
}

impl SelectionState {
	/// Fresh state for a page: empty query, nothing selected.
	pub fn new(schema: &FacetSchema) -> Self {
		let selected = schema
			.categories()
			.iter()
			.map(|c| (c.name.clone(), None))
			.collect();
		Self {
			query: String::new(),
			selected,
		}
	}

	pub fn set_query(&mut self, query: &str) {
		self.query = query.to_string();
	}

	/// Toggle a facet selection.
	///
	/// Same value again clears the category; a different value replaces it.
	/// Unknown categories or values not declared as options of the category
	/// are no-ops (logged — the filter controls only emit declared values).
	pub fn toggle(&mut self, schema: &FacetSchema, category: &str, value: &str) {
		let Some(spec) = schema.category(category) else {
			tracing::warn!("toggle on unknown category {:?} ignored", category);
			return;
		};
		if !spec.is_option(value) {
			tracing::warn!(
				"toggle with undeclared value {:?} for category {:?} ignored",
				value,
				category
			);
			return;
		}

		let slot = self
			.selected
			.entry(category.to_string())
			.or_insert(None);
		if slot.as_deref() == Some(value) {
			*slot = None;
		} else {
			*slot = Some(value.to_string());
		}
	}

	/// Reset query and every selection in one transition. Idempotent.
	pub fn clear_all(&mut self) {
		self.query.clear();
		for slot in self.selected.values_mut() {
			*slot = None;
		}
	}

	/// The selected option for a category, if any.
	pub fn selected(&self, category: &str) -> Option<&str> {
		self.selected.get(category).and_then(|s| s.as_deref())
	}

	/// All active (category, value) selections.
	pub fn active(&self) -> Vec<(&str, &str)> {
		self.selected
			.iter()
			.filter_map(|(c, s)| s.as_deref().map(|v| (c.as_str(), v)))
			.collect()
	}

	/// Whether any constraint is in force. Distinguishes "no results under
	/// these filters" from "nothing filtered yet".
	pub fn is_active(&self) -> bool {
		!self.query.is_empty() || self.selected.values().any(Option::is_some)
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
