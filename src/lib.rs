//! # Find-and-forget catalog core
//!
//! Pure, synchronous building blocks for the data-deletion console: parsing
//! data-catalog listings into a column schema forest ([`schema`]), indexing
//! table storage locations ([`locations`]) and computing the pagination
//! strip ([`paginator`]). All input is already-materialized catalog response
//! data; this crate performs no I/O.

use std::fmt::{self, Display};

use serde::Serialize;
use thiserror::Error;

pub mod catalog;
pub mod locations;
pub mod paginator;
pub mod schema;

pub use catalog::{CatalogTable, GetTableResponse, RawColumn, SerdeInfo, StorageDescriptor, TablesPage};
pub use locations::{map_locations, LocationEntry};
pub use paginator::{pages_list, PageEntry};
pub use schema::{parse_catalog, CatalogSchema, Database, SchemaColumn, TableSchema};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Column schema is not valid")]
    InvalidColumnSchema,
    #[error("malformed catalog response")]
    MalformedResponse(#[from] serde_json::Error),
}

/// On-disk row format of a catalog table, derived from its serialization
/// library. Tables with an unrecognized library carry no format and are
/// dropped by the schema serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Parquet,
    Json,
}

impl Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Parquet => write!(f, "parquet"),
            TableFormat::Json => write!(f, "json"),
        }
    }
}
