//! Table location index built from "get table" responses.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::GetTableResponse;

/// Storage location of one catalog table. Both fields are `None`-able:
/// callers synthesize degraded entries for tables whose metadata lookup
/// failed, and a location URI without the expected `scheme://bucket/...`
/// layout yields an unknown bucket instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub bucket: Option<String>,
    pub location: Option<String>,
}

/// Index "get table" responses by `"{database}/{table}"`.
///
/// Every supplied table is included, even ones the schema serializer would
/// drop for their serialization library; the console uses this to display
/// catalog errors for skipped tables. The last entry for a key wins.
pub fn map_locations(responses: &[GetTableResponse]) -> HashMap<String, LocationEntry> {
    let mut index = HashMap::with_capacity(responses.len());

    for response in responses {
        let table = &response.table;
        let location = table.storage_descriptor.location.clone();
        let bucket = location.as_deref().and_then(bucket_of);

        index.insert(
            format!("{}/{}", table.database_name, table.name),
            LocationEntry { bucket, location },
        );
    }

    index
}

/// Bucket component of an `s3://bucket/key...` URI: the third `/`-separated
/// segment. `None` when the URI has no such segment.
fn bucket_of(uri: &str) -> Option<String> {
    uri.split('/')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
