// ---------------------------------------------------------------------------
// Filter engine — pure predicates over a record collection
// ---------------------------------------------------------------------------
//
// A record survives when it matches the free-text query AND every active
// facet selection. Filtering is a stable pass over the source collection,
// recomputed from scratch on every change; at catalog sizes of a few dozen
// records there is nothing to cache.
// ---------------------------------------------------------------------------

use crate::schema::{CategorySpec, FacetSchema};
use crate::selection::SelectionState;
use crate::types::Record;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Case-insensitive substring test.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
	haystack.to_lowercase().contains(needle_lower)
}

/// Whether a record matches the free-text query.
///
/// Empty query matches everything. Otherwise the query must appear (case
/// insensitively) in the title, the teaser, or any record value of a
/// category the schema marks searchable.
pub fn text_matches(record: &Record, query: &str, schema: &FacetSchema) -> bool {
	if query.is_empty() {
		return true;
	}
	let needle = query.to_lowercase();

	if contains_ci(&record.title, &needle) || contains_ci(&record.teaser, &needle) {
		return true;
	}

	schema
		.categories()
		.iter()
		.filter(|c| c.searchable)
		.filter_map(|c| record.facet_value(&c.name))
		.any(|fv| fv.values().iter().any(|v| contains_ci(v, &needle)))
}

/// Whether a record passes one active facet selection.
///
/// Equality for single-valued facets, membership for multi-valued ones, plus
/// any alias target declared for the selected option. A record not tagged
/// with the category at all does not pass.
pub fn facet_matches(record: &Record, spec: &CategorySpec, selected: &str) -> bool {
	let Some(value) = record.facet_value(&spec.name) else {
		return false;
	};
	if value.contains(selected) {
		return true;
	}
	spec.alias_targets(selected)
		.iter()
		.any(|target| value.contains(target))
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Narrow `records` to those satisfying the query and every active
/// selection. Output order is source order (stable filter, no re-sorting).
pub fn filter_records<'a>(
	records: &'a [Record],
	selection: &SelectionState,
	schema: &FacetSchema,
) -> Vec<&'a Record> {
	let active = selection.active();
	records
		.iter()
		.filter(|r| text_matches(r, &selection.query, schema))
		.filter(|r| {
			active.iter().all(|(category, value)| {
				schema
					.category(category)
					.is_some_and(|spec| facet_matches(r, spec, value))
			})
		})
		.collect()
}

/// The featured subset, in source order. Independent of any query or
/// selection: the featured rail never changes while the grid is filtered.
pub fn featured_records(records: &[Record]) -> Vec<&Record> {
	records.iter().filter(|r| r.featured).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
