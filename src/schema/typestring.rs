//! Recursive-descent parser for the catalog's composite type strings.
//!
//! The grammar is `struct<name:type,...>` and `array<struct<name:type,...>>`,
//! arbitrarily nested; anything else is taken as a primitive type name.
//! Parsing walks the inner field list with a cursor, tracking `<`/`>` depth,
//! instead of re-slicing substrings per level.

use super::SchemaColumn;
use crate::CatalogError;

const STRUCT_PREFIX: &str = "struct<";
const ARRAY_STRUCT_PREFIX: &str = "array<struct<";

/// Primitive types whose values qualify as scalar match identifiers.
/// Exact, case-sensitive matches only.
const IDENTIFIER_TYPES: [&str; 9] = [
    "bigint", "char", "double", "float", "int", "smallint", "string", "tinyint", "varchar",
];

/// Decode one column's type string into a [`SchemaColumn`] tree.
pub(crate) fn parse_column(name: &str, type_string: &str) -> Result<SchemaColumn, CatalogError> {
    if let Some(rest) = type_string.strip_prefix(ARRAY_STRUCT_PREFIX) {
        let inner = rest.strip_suffix(">>").ok_or(CatalogError::InvalidColumnSchema)?;
        let mut column = SchemaColumn {
            name: name.to_string(),
            column_type: "array<struct>".to_string(),
            can_be_identifier: false,
            children: Some(parse_fields(inner)?),
        };
        // Array-nested values cannot be used as scalar match identifiers,
        // whatever the allow-list granted the subtree.
        forbid_identifiers(&mut column);
        Ok(column)
    } else if let Some(rest) = type_string.strip_prefix(STRUCT_PREFIX) {
        let inner = rest.strip_suffix('>').ok_or(CatalogError::InvalidColumnSchema)?;
        Ok(SchemaColumn {
            name: name.to_string(),
            column_type: "struct".to_string(),
            can_be_identifier: false,
            children: Some(parse_fields(inner)?),
        })
    } else {
        Ok(SchemaColumn {
            name: name.to_string(),
            column_type: type_string.to_string(),
            can_be_identifier: IDENTIFIER_TYPES.contains(&type_string),
            children: None,
        })
    }
}

/// Parse a comma-separated `name:type` field list (the inside of a composite
/// type, outer brackets already stripped).
fn parse_fields(input: &str) -> Result<Vec<SchemaColumn>, CatalogError> {
    let mut fields = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let colon = input[cursor..]
            .find(':')
            .ok_or(CatalogError::InvalidColumnSchema)?;
        let name = &input[cursor..cursor + colon];
        cursor += colon + 1;

        let type_end = scan_type(input, cursor)?;
        fields.push(parse_column(name, &input[cursor..type_end])?);
        cursor = type_end;

        if input.as_bytes().get(cursor) == Some(&b',') {
            cursor += 1;
        }
    }

    Ok(fields)
}

/// Find the exclusive end of one field type starting at `start`: the next
/// top-level comma or the end of input. Brackets are matched by depth; a `>`
/// below the entry level or a `<` left open is a format error.
fn scan_type(input: &str, start: usize) -> Result<usize, CatalogError> {
    let mut depth = 0usize;

    for (i, b) in input.as_bytes().iter().enumerate().skip(start) {
        match b {
            b'<' => depth += 1,
            b'>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(CatalogError::InvalidColumnSchema)?;
            }
            b',' if depth == 0 => return Ok(i),
            _ => {}
        }
    }

    if depth == 0 {
        Ok(input.len())
    } else {
        Err(CatalogError::InvalidColumnSchema)
    }
}

/// Recursively clear `can_be_identifier` on a column and all descendants.
/// Applied once per `array<struct>` subtree, after construction.
fn forbid_identifiers(column: &mut SchemaColumn) {
    column.can_be_identifier = false;
    if let Some(children) = &mut column.children {
        for child in children {
            forbid_identifiers(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_column, IDENTIFIER_TYPES};
    use crate::schema::SchemaColumn;
    use crate::CatalogError;
    use rand::prelude::StdRng;
    use rand::{thread_rng, Rng, RngCore, SeedableRng};
    use rand_utf8::rand_utf8;

    fn leaf(name: &str, column_type: &str, can_be_identifier: bool) -> SchemaColumn {
        SchemaColumn {
            name: name.to_string(),
            column_type: column_type.to_string(),
            can_be_identifier,
            children: None,
        }
    }

    #[test]
    fn primitive_identifier_allow_list() -> Result<(), CatalogError> {
        for ty in IDENTIFIER_TYPES {
            let column = parse_column("c", ty)?;
            assert!(column.can_be_identifier, "{ty} should qualify");
            assert!(column.children.is_none());
        }

        for ty in ["boolean", "date", "timestamp", "binary", "decimal", "array<int>"] {
            let column = parse_column("c", ty)?;
            assert!(!column.can_be_identifier, "{ty} should not qualify");
            assert!(column.children.is_none());
            assert_eq!(column.column_type, ty);
        }

        // Case-sensitive, exact matches only.
        assert!(!parse_column("c", "String")?.can_be_identifier);
        assert!(!parse_column("c", "int ")?.can_be_identifier);

        Ok(())
    }

    #[test]
    fn flat_struct() -> Result<(), CatalogError> {
        let column = parse_column("repo", "struct<id:int,name:string,url:string>")?;

        assert_eq!(
            column,
            SchemaColumn {
                name: "repo".to_string(),
                column_type: "struct".to_string(),
                can_be_identifier: false,
                children: Some(vec![
                    leaf("id", "int", true),
                    leaf("name", "string", true),
                    leaf("url", "string", true),
                ]),
            }
        );

        Ok(())
    }

    #[test]
    fn nested_struct_keeps_leaf_eligibility() -> Result<(), CatalogError> {
        let column = parse_column("n", "struct<a:int,b:struct<c:int,d:struct<e:int>>>")?;

        let b = &column.children.as_ref().unwrap()[1];
        let d = &b.children.as_ref().unwrap()[1];
        let e = &d.children.as_ref().unwrap()[0];

        assert_eq!(column.column_type, "struct");
        assert!(!b.can_be_identifier);
        assert_eq!(d.column_type, "struct");
        assert_eq!(*e, leaf("e", "int", true));

        Ok(())
    }

    #[test]
    fn array_struct_forbids_whole_subtree() -> Result<(), CatalogError> {
        let column = parse_column("arr", "array<struct<l:int,m:struct<n:string>>>")?;

        assert_eq!(
            column,
            SchemaColumn {
                name: "arr".to_string(),
                column_type: "array<struct>".to_string(),
                can_be_identifier: false,
                children: Some(vec![
                    leaf("l", "int", false),
                    SchemaColumn {
                        name: "m".to_string(),
                        column_type: "struct".to_string(),
                        can_be_identifier: false,
                        children: Some(vec![leaf("n", "string", false)]),
                    },
                ]),
            }
        );

        Ok(())
    }

    #[test]
    fn empty_struct_has_empty_children() -> Result<(), CatalogError> {
        let column = parse_column("s", "struct<>")?;
        assert_eq!(column.children, Some(vec![]));
        Ok(())
    }

    #[test]
    fn malformed_type_strings_are_rejected() {
        let broken = [
            "struct<a:int",                  // missing terminal bracket
            "array<struct<a:int>",           // one of two terminal brackets
            "struct<a:int>>",                // over-terminated
            "struct<a:struct<b:int>",        // inner closed, outer not
            "struct<a:int>,b:int>",          // trailing content after close
            "struct<abc>",                   // field without a colon
            "array<struct<a:array<struct<b:int>>", // nested array unterminated
        ];

        for ty in broken {
            let err = parse_column("c", ty).expect_err(ty);
            assert_eq!(err.to_string(), "Column schema is not valid");
        }
    }

    /// Random column name: delimiter characters stripped so the generated
    /// type string stays inside the grammar.
    fn random_name(rng: &mut StdRng) -> String {
        let raw = rand_utf8(rng, 12).to_string();
        let name: String = raw
            .chars()
            .filter(|c| !matches!(c, '<' | '>' | ':' | ','))
            .collect();
        if name.is_empty() {
            "c".to_string()
        } else {
            name
        }
    }

    fn random_type(rng: &mut StdRng, depth: usize) -> String {
        if depth == 0 || rng.gen_ratio(2, 3) {
            let primitives = ["int", "string", "bigint", "boolean", "double", "binary"];
            return primitives[rng.gen_range(0..primitives.len())].to_string();
        }

        let n_fields = rng.gen_range(1..4);
        let fields: Vec<String> = (0..n_fields)
            .map(|_| format!("{}:{}", random_name(rng), random_type(rng, depth - 1)))
            .collect();

        if rng.gen_bool(0.5) {
            format!("array<struct<{}>>", fields.join(","))
        } else {
            format!("struct<{}>", fields.join(","))
        }
    }

    /// No identifier-eligible node may survive under an `array<struct>`
    /// ancestor, and children must be present exactly on composite nodes.
    fn check_invariants(column: &SchemaColumn, under_array: bool) {
        let is_composite = column.column_type == "struct" || column.column_type == "array<struct>";
        assert_eq!(column.children.is_some(), is_composite);
        if under_array || is_composite {
            assert!(!column.can_be_identifier);
        } else {
            assert_eq!(
                column.can_be_identifier,
                IDENTIFIER_TYPES.contains(&column.column_type.as_str())
            );
        }

        let nested_in_array = under_array || column.column_type == "array<struct>";
        if let Some(children) = &column.children {
            for child in children {
                check_invariants(child, nested_in_array);
            }
        }
    }

    #[test]
    fn random_nested_schemas_parse() -> Result<(), CatalogError> {
        let mut seed_rng = thread_rng();
        let mut seed = [0u8; 32];
        seed_rng.fill_bytes(&mut seed);
        println!("Seed: {seed:?}");
        let mut rng = StdRng::from_seed(seed);

        for _ in 0..500 {
            let type_string = random_type(&mut rng, 5);
            let column = parse_column("root", &type_string)?;
            check_invariants(&column, false);
        }

        Ok(())
    }
}
