//! Parser output model: the normalized database forest rendered by the
//! console. Serialized field names (`canBeIdentifier`, `type`, optional
//! `children`) are a compatibility surface and must not change.

use serde::Serialize;

use crate::TableFormat;

pub mod columns;
pub mod serializer;
pub mod typestring;

pub use serializer::parse_catalog;

/// Forest of databases produced from one or more catalog listing pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSchema {
    pub databases: Vec<Database>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Database {
    pub name: String,
    pub tables: Vec<TableSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<SchemaColumn>,
    pub format: TableFormat,
}

/// One node of a table's column tree.
///
/// `column_type` is `"struct"` or `"array<struct>"` for composite columns
/// (which then carry `children`) and the raw primitive type name otherwise.
/// `can_be_identifier` marks leaves whose values may serve as match keys for
/// deletion lookups; every descendant of an `array<struct>` column is
/// excluded regardless of its own type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(rename = "canBeIdentifier")]
    pub can_be_identifier: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SchemaColumn>>,
}
