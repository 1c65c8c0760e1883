use super::typestring;
use super::{CatalogSchema, Database, TableSchema};
use crate::catalog::{CatalogTable, TablesPage};
use crate::{CatalogError, TableFormat};

/// Convert catalog listing pages into the normalized database forest.
///
/// Tables whose serialization library is not recognized are dropped; a page
/// left with no qualifying table contributes nothing. Each page emits at most
/// one database, named after its first qualifying table (tables within one
/// page share a database); pages naming an already-seen database append to
/// the existing entry. Input order is preserved throughout, sorting is the
/// caller's concern.
///
/// Fails on the first malformed column type string; no partial result is
/// returned.
pub fn parse_catalog(pages: &[TablesPage]) -> Result<CatalogSchema, CatalogError> {
    let mut databases: Vec<Database> = Vec::new();

    for page in pages {
        let qualifying: Vec<(&CatalogTable, TableFormat)> = page
            .table_list
            .iter()
            .filter_map(|table| table.format().map(|format| (table, format)))
            .collect();

        let Some(&(first, _)) = qualifying.first() else {
            continue;
        };
        let name = first.database_name.clone();

        let mut tables = Vec::with_capacity(qualifying.len());
        for &(table, format) in &qualifying {
            tables.push(table_schema(table, format)?);
        }

        match databases.iter_mut().find(|db| db.name == name) {
            Some(database) => database.tables.append(&mut tables),
            None => databases.push(Database { name, tables }),
        }
    }

    Ok(CatalogSchema { databases })
}

fn table_schema(table: &CatalogTable, format: TableFormat) -> Result<TableSchema, CatalogError> {
    let columns = table
        .storage_descriptor
        .columns
        .iter()
        .map(|column| typestring::parse_column(&column.name, &column.type_string))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TableSchema {
        name: table.name.to_string(),
        columns,
        format,
    })
}
