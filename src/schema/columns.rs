use super::{SchemaColumn, TableSchema};

impl SchemaColumn {
    /// Dotted paths of every identifier-eligible leaf in this subtree, in
    /// column order. These are the match-id choices the console offers, e.g.
    /// `repo.id` for an `id` leaf inside a `repo` struct.
    pub fn identifier_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_identifier_paths("", &mut paths);
        paths
    }

    fn collect_identifier_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        let path = if prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{prefix}.{}", self.name)
        };

        match &self.children {
            Some(children) => {
                for child in children {
                    child.collect_identifier_paths(&path, paths);
                }
            }
            None => {
                if self.can_be_identifier {
                    paths.push(path);
                }
            }
        }
    }
}

impl TableSchema {
    /// Identifier-eligible leaf paths across all columns of the table.
    pub fn identifier_paths(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(SchemaColumn::identifier_paths)
            .collect()
    }
}
