//! tableproof SQL - Assertion Helpers
//!
//! Verifies table rows, column type metadata, scratchpad query output and
//! relationship graphs fetched from the SQL-family browser views.
//!
//! Row comparisons ([`verify_rows`]), graph adjacency ([`verify_graph`]) and
//! scratchpad grids are exact. Metadata checks only look at what the caller
//! asked for.

pub use tableproof_core::{
    Fields, Graph, NodeMetadata, Row, ScratchpadOutput, VerifyConfig, VerifyError, VerifyResult,
};

// ============================================================================
// ROWS
// ============================================================================

/// Logical column `col_index` of `row`. Never fails; out of range is `None`.
pub fn get_row_value(row: &Row, col_index: usize) -> Option<&str> {
    row.column(col_index)
}

/// Assert each logical cell of `row` matches `expected`, position by position.
///
/// Cells past the end of `expected` are not checked.
pub fn verify_row<S: AsRef<str>>(row: &Row, expected: &[S]) -> VerifyResult<()> {
    for (column, expected) in expected.iter().enumerate() {
        let expected = expected.as_ref();
        let actual = row.column(column);
        if actual != Some(expected) {
            return VerifyError::CellMismatch {
                column,
                expected: expected.to_string(),
                actual: actual.map(str::to_string),
            }
            .reject();
        }
    }
    Ok(())
}

/// Assert `rows` has as many rows as `expected`, then verify each in order.
///
/// The count is checked before any cell so a short table fails with
/// [`VerifyError::RowCountMismatch`].
pub fn verify_rows<R, S>(rows: &[Row], expected: &[R]) -> VerifyResult<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if rows.len() != expected.len() {
        return VerifyError::RowCountMismatch {
            expected: expected.len(),
            actual: rows.len(),
        }
        .reject();
    }

    for (index, (row, expected)) in rows.iter().zip(expected).enumerate() {
        verify_row(row, expected.as_ref()).map_err(|e| e.in_row(index))?;
    }
    tracing::trace!(count = rows.len(), "rows verified");
    Ok(())
}

// ============================================================================
// COLUMN METADATA
// ============================================================================

/// Assert each `(column, type)` pair appears together on one field entry.
pub fn verify_column_types<N, T>(fields: &Fields, expected_columns: &[(N, T)]) -> VerifyResult<()>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    for (column, column_type) in expected_columns {
        let (column, column_type) = (column.as_ref(), column_type.as_ref());
        if !fields.contains(column, column_type) {
            return VerifyError::MissingColumnType {
                column: column.to_string(),
                column_type: column_type.to_string(),
            }
            .reject();
        }
    }
    Ok(())
}

/// Check only the metadata `metadata` asks for.
///
/// - type set: the `Type` field equals it
/// - `has_size`: a `Total Size` or `Data Size` field exists
/// - `has_count`: a `Total Count:`, `Total Count` or `Count` field exists
///
/// Values of size and count fields are not checked.
pub fn verify_metadata(fields: &Fields, metadata: &NodeMetadata) -> VerifyResult<()> {
    verify_metadata_with(VerifyConfig::standard(), fields, metadata)
}

pub fn verify_metadata_with(
    config: &VerifyConfig,
    fields: &Fields,
    metadata: &NodeMetadata,
) -> VerifyResult<()> {
    if let Some(expected_type) = metadata.expected_type() {
        match fields.find(&config.type_label) {
            None => {
                return VerifyError::MissingField {
                    field: config.type_label.clone(),
                }
                .reject()
            }
            Some(actual) if actual != expected_type => {
                return VerifyError::ValueMismatch {
                    subject: config.type_label.clone(),
                    expected: expected_type.to_string(),
                    actual: Some(actual.to_string()),
                }
                .reject()
            }
            Some(_) => {}
        }
    }

    if metadata.has_size && !fields.has_any(config.size_labels.as_slice()) {
        return VerifyError::MissingField {
            field: config.size_labels.join(" or "),
        }
        .reject();
    }

    if metadata.has_count && !fields.has_any(config.count_labels.as_slice()) {
        return VerifyError::MissingField {
            field: config.count_labels.join(" or "),
        }
        .reject();
    }
    Ok(())
}

// ============================================================================
// SCRATCHPAD
// ============================================================================

/// Compare scratchpad output against whichever expectations are given.
///
/// Rows are compared after dropping each row's trailing action cell.
pub fn verify_scratchpad_output(
    output: &ScratchpadOutput,
    expected_columns: Option<&[String]>,
    expected_rows: Option<&[Vec<String>]>,
) -> VerifyResult<()> {
    verify_scratchpad_output_with(
        VerifyConfig::standard(),
        output,
        expected_columns,
        expected_rows,
    )
}

pub fn verify_scratchpad_output_with(
    config: &VerifyConfig,
    output: &ScratchpadOutput,
    expected_columns: Option<&[String]>,
    expected_rows: Option<&[Vec<String>]>,
) -> VerifyResult<()> {
    if let Some(expected) = expected_columns {
        if output.columns.as_slice() != expected {
            return VerifyError::ColumnsMismatch {
                context: "scratchpad output".to_string(),
                expected: expected.to_vec(),
                actual: output.columns.clone(),
            }
            .reject();
        }
    }

    if let Some(expected) = expected_rows {
        let actual: Vec<&[String]> = output
            .data_rows(config.scratchpad_action_columns)
            .collect();
        let matches = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(a, e)| *a == e.as_slice());
        if !matches {
            return VerifyError::RowsMismatch {
                context: "scratchpad output".to_string(),
                expected: expected.to_vec(),
                actual: actual.into_iter().map(<[String]>::to_vec).collect(),
            }
            .reject();
        }
    }
    Ok(())
}

// ============================================================================
// GRAPHS
// ============================================================================

/// Assert every expected node exists with exactly the expected adjacency.
///
/// Adjacency order is ignored, multiplicity is not: a node missing one
/// neighbour or carrying an extra one fails. Nodes of `graph` that are not in
/// `expected_nodes` are ignored.
pub fn verify_graph(graph: &Graph, expected_nodes: &Graph) -> VerifyResult<()> {
    for (node, _) in expected_nodes.iter() {
        let Some(actual) = graph.sorted_adjacent(node) else {
            return VerifyError::MissingNode {
                node: node.to_string(),
            }
            .reject();
        };

        let expected = expected_nodes.sorted_adjacent(node).unwrap_or_default();
        if actual != expected {
            return VerifyError::AdjacencyMismatch {
                node: node.to_string(),
                expected,
                actual,
            }
            .reject();
        }
    }
    tracing::trace!(nodes = expected_nodes.len(), "graph verified");
    Ok(())
}

/// Verify a graph node's side panel: column types first, then metadata.
pub fn verify_graph_node<N, T>(
    fields: &Fields,
    expected_columns: &[(N, T)],
    metadata: &NodeMetadata,
) -> VerifyResult<()>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    verify_column_types(fields, expected_columns)?;
    verify_metadata(fields, metadata)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table_fields() -> Fields {
        [
            ("id", "integer"),
            ("name", "text"),
            ("Type", "BASE TABLE"),
            ("Total Size", "16 kB"),
            ("Count", "3"),
        ]
        .into_iter()
        .collect()
    }

    // === Rows ===

    #[test]
    fn test_verify_row_skips_selector() {
        let row = Row::from(["x", "1", "Alice"]);
        verify_row(&row, &["1", "Alice"]).unwrap();
        verify_row(&row, &["1"]).unwrap();
        verify_row::<&str>(&row, &[]).unwrap();
    }

    #[test]
    fn test_verify_row_mismatch_names_column() {
        let row = Row::from(["x", "1", "Alice"]);
        assert_eq!(
            verify_row(&row, &["1", "Bob"]).unwrap_err(),
            VerifyError::CellMismatch {
                column: 1,
                expected: "Bob".to_string(),
                actual: Some("Alice".to_string()),
            }
        );
    }

    #[test]
    fn test_verify_row_past_end() {
        let row = Row::from(["x", "1"]);
        assert!(matches!(
            verify_row(&row, &["1", "extra"]),
            Err(VerifyError::CellMismatch { actual: None, .. })
        ));
    }

    #[test]
    fn test_verify_rows_ok() {
        let rows = vec![Row::from(["x", "a", "1"]), Row::from(["x", "b", "2"])];
        verify_rows(&rows, &[["a", "1"], ["b", "2"]]).unwrap();
    }

    #[test]
    fn test_verify_rows_count_checked_first() {
        let rows = vec![Row::from(["x", "z", "9"])];
        assert_eq!(
            verify_rows(&rows, &[["a", "1"], ["b", "2"]]).unwrap_err(),
            VerifyError::RowCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_verify_rows_order_matters() {
        let rows = vec![Row::from(["x", "b", "2"]), Row::from(["x", "a", "1"])];
        match verify_rows(&rows, &[["a", "1"], ["b", "2"]]).unwrap_err() {
            VerifyError::InRow { row, .. } => assert_eq!(row, 0),
            other => panic!("Expected InRow, got: {:?}", other),
        }
    }

    #[test]
    fn test_verify_rows_owned_expectations() {
        let rows = vec![Row::from(["", "a"])];
        let expected = vec![strings(&["a"])];
        verify_rows(&rows, &expected).unwrap();
    }

    #[test]
    fn test_get_row_value() {
        let row = Row::from(["x", "a", "b"]);
        assert_eq!(get_row_value(&row, 0), Some("a"));
        assert_eq!(get_row_value(&row, 1), Some("b"));
        assert_eq!(get_row_value(&row, 5), None);
    }

    // === Column metadata ===

    #[test]
    fn test_verify_column_types() {
        verify_column_types(&table_fields(), &[("id", "integer"), ("name", "text")]).unwrap();
    }

    #[test]
    fn test_verify_column_types_pair_must_cooccur() {
        let err = verify_column_types(&table_fields(), &[("id", "text")]).unwrap_err();
        assert_eq!(err.to_string(), "Missing column id with type text");
    }

    #[test]
    fn test_verify_metadata_empty_always_ok() {
        verify_metadata(&Fields::default(), &NodeMetadata::default()).unwrap();
        verify_metadata(&table_fields(), &NodeMetadata::default()).unwrap();
    }

    #[test]
    fn test_verify_metadata_type() {
        let fields = table_fields();
        verify_metadata(&fields, &NodeMetadata::new().with_type("BASE TABLE")).unwrap();
        assert!(matches!(
            verify_metadata(&fields, &NodeMetadata::new().with_type("VIEW")),
            Err(VerifyError::ValueMismatch { .. })
        ));
        assert!(matches!(
            verify_metadata(&Fields::default(), &NodeMetadata::new().with_type("VIEW")),
            Err(VerifyError::MissingField { .. })
        ));
    }

    #[test]
    fn test_verify_metadata_empty_type_skipped() {
        verify_metadata(&Fields::default(), &NodeMetadata::new().with_type("")).unwrap();
    }

    #[test]
    fn test_verify_metadata_size_aliases() {
        let data_size: Fields = [("Data Size", "8 kB")].into_iter().collect();
        verify_metadata(&data_size, &NodeMetadata::new().with_size()).unwrap();
        let err = verify_metadata(&Fields::default(), &NodeMetadata::new().with_size()).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: Total Size or Data Size");
    }

    #[test]
    fn test_verify_metadata_count_aliases() {
        for label in ["Total Count:", "Total Count", "Count"] {
            let fields: Fields = [(label, "10")].into_iter().collect();
            verify_metadata(&fields, &NodeMetadata::new().with_count()).unwrap();
        }
        let fields: Fields = [("Rows", "10")].into_iter().collect();
        assert!(verify_metadata(&fields, &NodeMetadata::new().with_count()).is_err());
    }

    // === Scratchpad ===

    fn scratchpad() -> ScratchpadOutput {
        ScratchpadOutput {
            columns: strings(&["id", "name"]),
            rows: vec![strings(&["1", "Alice", ""]), strings(&["2", "Bob", ""])],
        }
    }

    #[test]
    fn test_verify_scratchpad_output_ok() {
        let columns = strings(&["id", "name"]);
        let rows = vec![strings(&["1", "Alice"]), strings(&["2", "Bob"])];
        verify_scratchpad_output(&scratchpad(), Some(columns.as_slice()), Some(rows.as_slice()))
            .unwrap();
    }

    #[test]
    fn test_verify_scratchpad_output_skips_missing_expectations() {
        verify_scratchpad_output(&scratchpad(), None, None).unwrap();
        let wrong_columns = strings(&["nope"]);
        let rows = vec![strings(&["1", "Alice"]), strings(&["2", "Bob"])];
        verify_scratchpad_output(&scratchpad(), None, Some(rows.as_slice())).unwrap();
        assert!(
            verify_scratchpad_output(&scratchpad(), Some(wrong_columns.as_slice()), None).is_err()
        );
    }

    #[test]
    fn test_verify_scratchpad_rows_exact() {
        let fewer = vec![strings(&["1", "Alice"])];
        assert!(matches!(
            verify_scratchpad_output(&scratchpad(), None, Some(fewer.as_slice())),
            Err(VerifyError::RowsMismatch { .. })
        ));
        let with_action = vec![strings(&["1", "Alice", ""]), strings(&["2", "Bob", ""])];
        assert!(verify_scratchpad_output(&scratchpad(), None, Some(with_action.as_slice())).is_err());
    }

    #[test]
    fn test_verify_scratchpad_custom_action_columns() {
        let mut config = VerifyConfig::standard().clone();
        config.scratchpad_action_columns = 2;
        let output = ScratchpadOutput {
            columns: strings(&["id"]),
            rows: vec![strings(&["1", "edit", "delete"])],
        };
        let rows = vec![strings(&["1"])];
        verify_scratchpad_output_with(&config, &output, None, Some(rows.as_slice())).unwrap();
    }

    // === Graphs ===

    #[test]
    fn test_verify_graph_order_independent() {
        let graph = Graph::from_iter([("A", ["B", "C"])]);
        verify_graph(&graph, &Graph::from_iter([("A", ["C", "B"])])).unwrap();
    }

    #[test]
    fn test_verify_graph_missing_neighbour() {
        let graph = Graph::from_iter([("A", vec!["B"])]);
        let err = verify_graph(&graph, &Graph::from_iter([("A", vec!["B", "C"])])).unwrap_err();
        assert_eq!(
            err,
            VerifyError::AdjacencyMismatch {
                node: "A".to_string(),
                expected: strings(&["B", "C"]),
                actual: strings(&["B"]),
            }
        );
    }

    #[test]
    fn test_verify_graph_extra_neighbour_fails() {
        let graph = Graph::from_iter([("A", vec!["B", "C"])]);
        assert!(verify_graph(&graph, &Graph::from_iter([("A", vec!["B"])])).is_err());
    }

    #[test]
    fn test_verify_graph_missing_node() {
        let graph = Graph::from_iter([("A", ["B"])]);
        assert_eq!(
            verify_graph(&graph, &Graph::from_iter([("Z", ["A"])])).unwrap_err(),
            VerifyError::MissingNode {
                node: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_verify_graph_ignores_unexpected_nodes() {
        let graph = Graph::from_iter([("A", vec!["B"]), ("B", vec!["A"])]);
        verify_graph(&graph, &Graph::from_iter([("A", vec!["B"])])).unwrap();
    }

    #[test]
    fn test_verify_graph_node() {
        let metadata = NodeMetadata::new()
            .with_type("BASE TABLE")
            .with_size()
            .with_count();
        verify_graph_node(&table_fields(), &[("id", "integer")], &metadata).unwrap();
        assert!(matches!(
            verify_graph_node(&table_fields(), &[("id", "uuid")], &metadata),
            Err(VerifyError::MissingColumnType { .. })
        ));
        assert!(matches!(
            verify_graph_node(&table_fields(), &[("id", "integer")], &metadata.with_type("VIEW")),
            Err(VerifyError::ValueMismatch { .. })
        ));
    }
}
