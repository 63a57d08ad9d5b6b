// ---------------------------------------------------------------------------
// Core types — catalog records and view-models
// ---------------------------------------------------------------------------
//
// A Record is one catalog entry (case study, insight, resource, or service
// listing). Records are defined once at startup and never mutated; every
// filter pass reads the same collection.
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RecordId
// ---------------------------------------------------------------------------

/// Stable record identifier. The authored data uses integers for editorial
/// content and string slugs for service listings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
	Num(u64),
	Slug(String),
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Num(n) => write!(f, "{}", n),
			Self::Slug(s) => write!(f, "{}", s),
		}
	}
}

impl From<u64> for RecordId {
	fn from(n: u64) -> Self {
		Self::Num(n)
	}
}

impl From<i32> for RecordId {
	fn from(n: i32) -> Self {
		Self::Num(n as u64)
	}
}

impl From<&str> for RecordId {
	fn from(s: &str) -> Self {
		Self::Slug(s.to_string())
	}
}

// ---------------------------------------------------------------------------
// FacetValue
// ---------------------------------------------------------------------------

/// A record's value for one facet category.
///
/// Some categories hold exactly one value per record (a case study has one
/// industry), others hold several (a resource can span multiple phases).
/// The distinction matters: selections match `One` by equality and `Many` by
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
	One(String),
	Many(Vec<String>),
}

impl FacetValue {
	/// Whether `value` is the single value or one of the set.
	pub fn contains(&self, value: &str) -> bool {
		match self {
			Self::One(v) => v == value,
			Self::Many(vs) => vs.iter().any(|v| v == value),
		}
	}

	/// All values, in authored order.
	pub fn values(&self) -> Vec<&str> {
		match self {
			Self::One(v) => vec![v.as_str()],
			Self::Many(vs) => vs.iter().map(String::as_str).collect(),
		}
	}
}

impl From<&str> for FacetValue {
	fn from(v: &str) -> Self {
		Self::One(v.to_string())
	}
}

impl From<Vec<&str>> for FacetValue {
	fn from(vs: Vec<&str>) -> Self {
		Self::Many(vs.into_iter().map(str::to_string).collect())
	}
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One catalog entry. `title` and `teaser` are opaque display text; the
/// filter engine only inspects them for substring search. Facets are keyed by
/// category name and carry the single/multi distinction in [`FacetValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
	pub id: RecordId,
	pub title: String,
	pub teaser: String,
	#[serde(default)]
	pub facets: BTreeMap<String, FacetValue>,
	#[serde(default)]
	pub featured: bool,
}

impl Record {
	pub fn new(id: impl Into<RecordId>, title: &str, teaser: &str) -> Self {
		Self {
			id: id.into(),
			title: title.to_string(),
			teaser: teaser.to_string(),
			facets: BTreeMap::new(),
			featured: false,
		}
	}

	/// Tag the record with a facet value for `category`.
	pub fn facet(mut self, category: &str, value: impl Into<FacetValue>) -> Self {
		self.facets.insert(category.to_string(), value.into());
		self
	}

	/// Mark the record for the featured display area. Featured status never
	/// affects filter eligibility.
	pub fn featured(mut self) -> Self {
		self.featured = true;
		self
	}

	/// The record's value for a category, if tagged.
	pub fn facet_value(&self, category: &str) -> Option<&FacetValue> {
		self.facets.get(category)
	}
}

// ---------------------------------------------------------------------------
// View-models
// ---------------------------------------------------------------------------

/// One facet badge on a rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBadge {
	pub category: String,
	pub value: String,
}

/// Presentation-ready projection of a record: what the card grids consume.
/// Badges appear in schema category order, multi-valued facets expanded in
/// authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCard {
	pub id: RecordId,
	pub title: String,
	pub teaser: String,
	pub badges: Vec<FacetBadge>,
	pub featured: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn facet_value_contains_single() {
		let v = FacetValue::from("Technology");
		assert!(v.contains("Technology"));
		assert!(!v.contains("Finance"));
	}

	#[test]
	fn facet_value_contains_multi() {
		let v = FacetValue::from(vec!["Assess", "Deploy"]);
		assert!(v.contains("Assess"));
		assert!(v.contains("Deploy"));
		assert!(!v.contains("Maintain"));
	}

	#[test]
	fn record_builder_tags_facets() {
		let r = Record::new(1, "Title", "Teaser")
			.facet("Industry", "Technology")
			.facet("Service", vec!["Agents", "Governance"])
			.featured();
		assert!(r.featured);
		assert_eq!(
			r.facet_value("Industry"),
			Some(&FacetValue::One("Technology".to_string()))
		);
		assert!(r.facet_value("Service").unwrap().contains("Governance"));
		assert_eq!(r.facet_value("Outcome"), None);
	}

	#[test]
	fn record_id_deserializes_untagged() {
		let num: RecordId = serde_json::from_str("7").unwrap();
		assert_eq!(num, RecordId::Num(7));
		let slug: RecordId = serde_json::from_str("\"readiness\"").unwrap();
		assert_eq!(slug, RecordId::Slug("readiness".to_string()));
	}

	#[test]
	fn facet_value_deserializes_untagged() {
		let one: FacetValue = serde_json::from_str("\"Assess\"").unwrap();
		assert_eq!(one, FacetValue::One("Assess".to_string()));
		let many: FacetValue = serde_json::from_str("[\"Assess\", \"Deploy\"]").unwrap();
		assert!(many.contains("Deploy"));
	}
}
