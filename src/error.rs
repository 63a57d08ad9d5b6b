use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
	#[error("Empty schema: at least one facet category is required")]
	EmptySchema,
	#[error("Duplicate category: {0}")]
	DuplicateCategory(String),
	#[error("Duplicate option {value:?} in category {category:?}")]
	DuplicateOption { category: String, value: String },
	#[error("Alias {alias:?} is not a declared option of category {category:?}")]
	UnknownAliasOption { category: String, alias: String },
	#[error("Catalog ingestion error: {0}")]
	Ingestion(#[from] serde_json::Error),
}
