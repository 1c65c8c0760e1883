//! Typed model of the data-catalog wire format.
//!
//! Field names and nesting mirror the catalog service's list/get table
//! responses exactly; unknown response fields are ignored on decode.

use serde::Deserialize;

pub mod response;

/// Hive Parquet serialization library, the `parquet` format.
pub const PARQUET_HIVE_SERDE: &str = "org.apache.hadoop.hive.ql.io.parquet.serde.ParquetHiveSerDe";
/// Hive JSON serialization library, the `json` format.
pub const JSON_HIVE_SERDE: &str = "org.apache.hive.hcatalog.data.JsonSerDe";
/// OpenX JSON serialization library, the `json` format.
pub const JSON_OPENX_SERDE: &str = "org.openx.data.jsonserde.JsonSerDe";

/// One page of the catalog's "list tables" response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TablesPage {
    #[serde(rename = "TableList", default)]
    pub table_list: Vec<CatalogTable>,
}

/// One table entry of a catalog listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogTable {
    #[serde(rename = "DatabaseName")]
    pub database_name: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "StorageDescriptor", default)]
    pub storage_descriptor: StorageDescriptor,
}

/// Physical layout section of a catalog table. `Location` may be missing for
/// degraded entries synthesized after a failed metadata lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageDescriptor {
    #[serde(rename = "Columns", default)]
    pub columns: Vec<RawColumn>,
    #[serde(rename = "SerdeInfo", default)]
    pub serde_info: SerdeInfo,
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SerdeInfo {
    #[serde(rename = "SerializationLibrary")]
    pub serialization_library: Option<String>,
}

/// Column as listed by the catalog: a name and a type string following the
/// `struct<name:type,...>` / `array<struct<name:type,...>>` grammar, or a
/// bare primitive type name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawColumn {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub type_string: String,
}

/// The catalog's "get table" response, wrapping a single table entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetTableResponse {
    #[serde(rename = "Table")]
    pub table: CatalogTable,
}
