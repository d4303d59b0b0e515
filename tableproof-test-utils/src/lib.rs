//! tableproof Test Utilities
//!
//! Centralized test infrastructure for the tableproof workspace:
//! - Proptest generators for rows, fields, scores, keys and graphs
//! - Test fixtures shaped like real browser data
//! - Custom assertions over `VerifyResult`
//! - Tracing setup for tests

// Re-export core types for convenience
pub use tableproof_core::{
    Field, Fields, Graph, KeyType, NodeMetadata, Row, ScratchpadOutput, Score, SortedSetEntry,
    VerifyConfig, VerifyError, VerifyResult,
};

/// Install a test-friendly fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    // Errors only when a global subscriber is already set, which is the
    // expected state for every call after the first.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Owned strings from string literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Rows from raw cell literals, selector cell included.
pub fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|cells| cells.iter().copied().collect())
        .collect()
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating browser data.

    use super::*;
    use proptest::prelude::*;

    // === Cells and Rows ===

    /// A short non-empty cell value.
    pub fn arb_cell() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,8}"
    }

    /// A row with `columns` logical cells behind an empty selector cell.
    pub fn arb_row(columns: usize) -> impl Strategy<Value = Row> {
        prop::collection::vec(arb_cell(), columns).prop_map(Row::from_columns)
    }

    /// Up to `max_rows` rows of `columns` logical cells each.
    pub fn arb_rows(columns: usize, max_rows: usize) -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(arb_row(columns), 0..=max_rows)
    }

    /// Hash rows `[sel, field, value]` with distinct field names.
    pub fn arb_hash_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::btree_map("[a-z]{1,6}", arb_cell(), 0..10).prop_map(|fields| {
            fields
                .into_iter()
                .map(|(field, value)| Row::from_columns([field, value]))
                .collect()
        })
    }

    /// List rows `[sel, index, value]`.
    pub fn arb_list_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(arb_cell(), 0..10).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(index, value)| Row::from_columns([index.to_string(), value]))
                .collect()
        })
    }

    // === Key Types and Keys ===

    pub fn arb_key_type() -> impl Strategy<Value = KeyType> {
        prop_oneof![
            Just(KeyType::Hash),
            Just(KeyType::List),
            Just(KeyType::Set),
            Just(KeyType::ZSet),
            Just(KeyType::String),
        ]
    }

    /// Type names the browser knows, plus arbitrary unknown ones.
    pub fn arb_key_type_name() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_key_type().prop_map(|t| t.as_str().to_string()),
            "[a-zA-Z]{1,10}",
        ]
    }

    /// Key names, some of them session keys.
    pub fn arb_key() -> impl Strategy<Value = String> {
        prop_oneof![
            "session:[a-z0-9]{0,6}",
            "[a-z]{1,6}:session:[a-z0-9]{0,4}",
            "[a-zA-Z:]{0,12}",
        ]
    }

    pub fn arb_keys() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_key(), 0..20)
    }

    // === Scores ===

    pub fn arb_score() -> impl Strategy<Value = Score> {
        prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(Score::Int),
            (-1_000_000i64..1_000_000).prop_map(|n| Score::Float(n as f64)),
            (-1e6f64..1e6).prop_map(Score::Float),
            "[0-9]{1,4}(\\.[0-9]{1,2})?".prop_map(Score::Text),
        ]
    }

    // === Fields ===

    pub fn arb_fields() -> impl Strategy<Value = Fields> {
        prop::collection::vec(("[A-Za-z ]{1,12}", arb_cell()), 0..10)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    // === Graphs ===

    /// A graph over up to eight single-letter nodes.
    pub fn arb_graph() -> impl Strategy<Value = Graph> {
        prop::collection::btree_map("[A-H]", prop::collection::vec("[A-H]", 0..5), 0..8)
            .prop_map(|nodes| nodes.into_iter().collect())
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built browser data for common scenarios.

    use super::*;

    /// Hash key `user:1` with three fields.
    pub fn hash_rows() -> Vec<Row> {
        vec![
            Row::from_columns(["name", "John Doe"]),
            Row::from_columns(["email", "john@example.com"]),
            Row::from_columns(["age", "30"]),
        ]
    }

    /// List key with three elements.
    pub fn list_rows() -> Vec<Row> {
        vec![
            Row::from_columns(["0", "task1"]),
            Row::from_columns(["1", "task2"]),
            Row::from_columns(["2", "task3"]),
        ]
    }

    /// Sorted set with a zero score among its members.
    pub fn zset_rows() -> Vec<Row> {
        vec![
            Row::from_columns(["0", "bronze", "0.00"]),
            Row::from_columns(["1", "silver", "50.00"]),
            Row::from_columns(["2", "gold", "100.50"]),
        ]
    }

    pub fn string_rows(value: &str) -> Vec<Row> {
        vec![Row::from_columns([value])]
    }

    /// Key metadata panel for a key of `key_type`.
    pub fn key_metadata(key_type: &str) -> Fields {
        [("Type", key_type), ("Size", "3"), ("TTL", "-1")]
            .into_iter()
            .collect()
    }

    /// Rows of a `users` table: id, name, email.
    pub fn table_rows() -> Vec<Row> {
        vec![
            Row::from_columns(["1", "John Doe", "john@example.com"]),
            Row::from_columns(["2", "Jane Smith", "jane@example.com"]),
        ]
    }

    /// Side panel of the `users` table node.
    pub fn table_fields() -> Fields {
        [
            ("id", "integer"),
            ("name", "text"),
            ("email", "text"),
            ("Type", "BASE TABLE"),
            ("Total Size", "48 kB"),
            ("Total Count:", "2"),
        ]
        .into_iter()
        .collect()
    }

    /// Scratchpad result of `SELECT id, name FROM users` with a trailing action cell.
    pub fn scratchpad_output() -> ScratchpadOutput {
        ScratchpadOutput {
            columns: strings(&["id", "name"]),
            rows: vec![
                strings(&["1", "John Doe", ""]),
                strings(&["2", "Jane Smith", ""]),
            ],
        }
    }

    /// ER graph of a small shop schema.
    pub fn er_graph() -> Graph {
        Graph::from_iter([
            ("users", vec!["orders"]),
            ("orders", vec!["users", "order_items"]),
            ("order_items", vec!["orders", "products"]),
            ("products", vec!["order_items"]),
        ])
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Panicking assertions over verification results.

    use super::*;

    /// Assert that a verification passed.
    #[track_caller]
    pub fn assert_verified<T: std::fmt::Debug>(result: &VerifyResult<T>) {
        if let Err(e) = result {
            panic!("Expected verification to pass, got: {}", e);
        }
    }

    /// Assert that a verification failed, whatever the reason.
    #[track_caller]
    pub fn assert_rejected<T: std::fmt::Debug>(result: &VerifyResult<T>) {
        assert!(result.is_err(), "Expected verification to fail, got: {:?}", result);
    }

    #[track_caller]
    pub fn assert_missing_field<T: std::fmt::Debug>(result: &VerifyResult<T>, field: &str) {
        match result {
            Err(VerifyError::MissingField { field: f }) => {
                assert_eq!(f, field, "Wrong field in MissingField error");
            }
            other => panic!("Expected MissingField({}), got: {:?}", field, other),
        }
    }

    #[track_caller]
    pub fn assert_missing_member<T: std::fmt::Debug>(result: &VerifyResult<T>, member: &str) {
        match result {
            Err(VerifyError::MissingMember { member: m }) => {
                assert_eq!(m, member, "Wrong member in MissingMember error");
            }
            other => panic!("Expected MissingMember({}), got: {:?}", member, other),
        }
    }

    #[track_caller]
    pub fn assert_value_mismatch<T: std::fmt::Debug>(result: &VerifyResult<T>) {
        match result {
            Err(VerifyError::ValueMismatch { .. }) => {}
            other => panic!("Expected ValueMismatch error, got: {:?}", other),
        }
    }

    #[track_caller]
    pub fn assert_row_count_mismatch<T: std::fmt::Debug>(
        result: &VerifyResult<T>,
        expected: usize,
        actual: usize,
    ) {
        match result {
            Err(VerifyError::RowCountMismatch {
                expected: e,
                actual: a,
            }) => {
                assert_eq!(*e, expected, "Wrong expected row count");
                assert_eq!(*a, actual, "Wrong actual row count");
            }
            other => panic!(
                "Expected RowCountMismatch({}, {}), got: {:?}",
                expected, actual, other
            ),
        }
    }

    /// Assert the failure happened inside row `row`.
    #[track_caller]
    pub fn assert_failed_in_row<T: std::fmt::Debug>(result: &VerifyResult<T>, row: usize) {
        match result {
            Err(VerifyError::InRow { row: r, .. }) => {
                assert_eq!(*r, row, "Wrong row in InRow error");
            }
            other => panic!("Expected failure in row {}, got: {:?}", row, other),
        }
    }

    #[track_caller]
    pub fn assert_columns_mismatch<T: std::fmt::Debug>(result: &VerifyResult<T>) {
        match result {
            Err(VerifyError::ColumnsMismatch { .. }) => {}
            other => panic!("Expected ColumnsMismatch error, got: {:?}", other),
        }
    }

    #[track_caller]
    pub fn assert_missing_node<T: std::fmt::Debug>(result: &VerifyResult<T>, node: &str) {
        match result {
            Err(VerifyError::MissingNode { node: n }) => {
                assert_eq!(n, node, "Wrong node in MissingNode error");
            }
            other => panic!("Expected MissingNode({}), got: {:?}", node, other),
        }
    }

    #[track_caller]
    pub fn assert_adjacency_mismatch<T: std::fmt::Debug>(result: &VerifyResult<T>, node: &str) {
        match result {
            Err(VerifyError::AdjacencyMismatch { node: n, .. }) => {
                assert_eq!(n, node, "Wrong node in AdjacencyMismatch error");
            }
            other => panic!("Expected AdjacencyMismatch({}), got: {:?}", node, other),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
