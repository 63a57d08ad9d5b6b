// ---------------------------------------------------------------------------
// Facet schema — declared categories, options, and value aliases
// ---------------------------------------------------------------------------
//
// The schema is the seam where content authoring plugs in: each catalog page
// declares its categories, the options its filter controls offer, and any
// explicit aliases ("Services" on the filter rail also matches records tagged
// "Professional Services"). Aliases are reviewable data here, never string
// comparisons buried in the filter engine.
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// CategorySpec
// ---------------------------------------------------------------------------

/// One facet category as declared by a catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
	pub name: String,
	/// Option values in display order. Selections are drawn from this list;
	/// record values are not required to appear in it (the filter rail can
	/// offer a curated subset of what the data contains).
	pub options: Vec<String>,
	/// Whether this category's record values participate in free-text search
	/// (the case-studies page searches the industry field).
	#[serde(default)]
	pub searchable: bool,
	/// selected option -> additional record values it also matches.
	#[serde(default)]
	pub aliases: BTreeMap<String, Vec<String>>,
}

impl CategorySpec {
	/// Whether `value` is one of the declared filter options.
	pub fn is_option(&self, value: &str) -> bool {
		self.options.iter().any(|o| o == value)
	}

	/// Additional record values a selection of `value` should match.
	pub fn alias_targets(&self, value: &str) -> &[String] {
		self.aliases.get(value).map(Vec::as_slice).unwrap_or(&[])
	}
}

// ---------------------------------------------------------------------------
// FacetSchema
// ---------------------------------------------------------------------------

/// Ordered set of facet categories for one catalog. Category order is
/// display order and drives badge order on view-models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSchema {
	categories: Vec<CategorySpec>,
}

impl FacetSchema {
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder {
			categories: Vec::new(),
		}
	}

	pub fn categories(&self) -> &[CategorySpec] {
		&self.categories
	}

	pub fn category(&self, name: &str) -> Option<&CategorySpec> {
		self.categories.iter().find(|c| c.name == name)
	}

	pub fn category_names(&self) -> Vec<&str> {
		self.categories.iter().map(|c| c.name.as_str()).collect()
	}
}

// ---------------------------------------------------------------------------
// SchemaBuilder
// ---------------------------------------------------------------------------

/// Builds a [`FacetSchema`], validating on `build`:
/// category names unique, option values unique per category, and every alias
/// keyed by a declared option.
pub struct SchemaBuilder {
	categories: Vec<CategorySpec>,
}

impl SchemaBuilder {
	/// Add a category with its option list.
	pub fn category(mut self, name: &str, options: &[&str]) -> Self {
		self.categories.push(CategorySpec {
			name: name.to_string(),
			options: options.iter().map(|o| o.to_string()).collect(),
			searchable: false,
			aliases: BTreeMap::new(),
		});
		self
	}

	/// Mark the most recently added category as searchable.
	pub fn searchable(mut self) -> Self {
		if let Some(last) = self.categories.last_mut() {
			last.searchable = true;
		}
		self
	}

	/// Declare that selecting `option` on the most recently added category
	/// also matches records tagged `target`.
	pub fn alias(mut self, option: &str, target: &str) -> Self {
		if let Some(last) = self.categories.last_mut() {
			last.aliases
				.entry(option.to_string())
				.or_default()
				.push(target.to_string());
		}
		self
	}

	pub fn build(self) -> Result<FacetSchema, EngineError> {
		if self.categories.is_empty() {
			return Err(EngineError::EmptySchema);
		}

		for (i, cat) in self.categories.iter().enumerate() {
			if self.categories[..i].iter().any(|c| c.name == cat.name) {
				return Err(EngineError::DuplicateCategory(cat.name.clone()));
			}
			for (j, opt) in cat.options.iter().enumerate() {
				if cat.options[..j].contains(opt) {
					return Err(EngineError::DuplicateOption {
						category: cat.name.clone(),
						value: opt.clone(),
					});
				}
			}
			for alias in cat.aliases.keys() {
				if !cat.is_option(alias) {
					return Err(EngineError::UnknownAliasOption {
						category: cat.name.clone(),
						alias: alias.clone(),
					});
				}
			}
		}

		Ok(FacetSchema {
			categories: self.categories,
		})
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_preserves_category_order() {
		let schema = FacetSchema::builder()
			.category("Phase", &["Assess", "Deploy"])
			.category("Topic", &["Agents", "Governance"])
			.build()
			.unwrap();
		assert_eq!(schema.category_names(), vec!["Phase", "Topic"]);
	}

	#[test]
	fn empty_schema_rejected() {
		let err = FacetSchema::builder().build().unwrap_err();
		assert!(matches!(err, EngineError::EmptySchema));
	}

	#[test]
	fn duplicate_category_rejected() {
		let err = FacetSchema::builder()
			.category("Phase", &["Assess"])
			.category("Phase", &["Deploy"])
			.build()
			.unwrap_err();
		assert!(matches!(err, EngineError::DuplicateCategory(c) if c == "Phase"));
	}

	#[test]
	fn duplicate_option_rejected() {
		let err = FacetSchema::builder()
			.category("Phase", &["Assess", "Assess"])
			.build()
			.unwrap_err();
		assert!(matches!(err, EngineError::DuplicateOption { .. }));
	}

	#[test]
	fn alias_must_be_declared_option() {
		let err = FacetSchema::builder()
			.category("Industry", &["Technology"])
			.alias("Services", "Professional Services")
			.build()
			.unwrap_err();
		assert!(matches!(err, EngineError::UnknownAliasOption { .. }));
	}

	#[test]
	fn alias_targets_resolve() {
		let schema = FacetSchema::builder()
			.category("Industry", &["Technology", "Services"])
			.alias("Services", "Professional Services")
			.build()
			.unwrap();
		let cat = schema.category("Industry").unwrap();
		assert_eq!(cat.alias_targets("Services"), ["Professional Services"]);
		assert!(cat.alias_targets("Technology").is_empty());
	}

	#[test]
	fn searchable_applies_to_last_category() {
		let schema = FacetSchema::builder()
			.category("Service", &["Agents"])
			.category("Industry", &["Technology"])
			.searchable()
			.build()
			.unwrap();
		assert!(!schema.category("Service").unwrap().searchable);
		assert!(schema.category("Industry").unwrap().searchable);
	}
}
