use super::{CatalogTable, GetTableResponse, TablesPage};
use super::{JSON_HIVE_SERDE, JSON_OPENX_SERDE, PARQUET_HIVE_SERDE};
use crate::{CatalogError, TableFormat};

impl TablesPage {
    /// Decode one raw "list tables" response body.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl GetTableResponse {
    /// Decode one raw "get table" response body.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl CatalogTable {
    /// Format tag for a recognized serialization library, [`None`] otherwise.
    pub fn format(&self) -> Option<TableFormat> {
        match self.storage_descriptor.serde_info.serialization_library.as_deref() {
            Some(PARQUET_HIVE_SERDE) => Some(TableFormat::Parquet),
            Some(JSON_HIVE_SERDE) | Some(JSON_OPENX_SERDE) => Some(TableFormat::Json),
            _ => None,
        }
    }
}
