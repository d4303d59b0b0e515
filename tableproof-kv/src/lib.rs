//! tableproof Key-Value - Assertion Helpers
//!
//! Verifies rows and metadata fetched from the key-value browser for
//! Redis-style keys. Row layouts, selector cell first:
//!
//! | Key type    | Cells                              |
//! |-------------|------------------------------------|
//! | hash        | `[sel, field, value]`              |
//! | list / set  | `[sel, index, value]`              |
//! | zset        | `[sel, index, member, score]`      |
//! | string      | `[sel, value]`                     |
//!
//! Membership checks ([`verify_hash_fields`], [`verify_members`]) tolerate
//! extra rows. Layout checks ([`verify_columns_for_type`]) must match exactly.

use std::collections::HashSet;

pub use tableproof_core::{
    Fields, KeyType, Row, Score, SortedSetEntry, VerifyConfig, VerifyError, VerifyResult,
};

// Logical column positions per layout. Sorted sets render
// `[sel, index, member, score]`, so member and score sit behind the index.
const HASH_FIELD: usize = 0;
const HASH_VALUE: usize = 1;
const MEMBER_VALUE: usize = 1;
const ZSET_MEMBER: usize = 1;
const ZSET_SCORE: usize = 2;
const STRING_VALUE: usize = 0;

// ============================================================================
// HASH KEYS
// ============================================================================

/// Value of the first hash row whose field is `field`.
pub fn get_hash_field_value<'a>(rows: &'a [Row], field: &str) -> Option<&'a str> {
    find_hash_row(rows, field).and_then(|row| row.column(HASH_VALUE))
}

/// Assert the hash row for `field` exists and holds `expected_value`.
pub fn verify_hash_field(rows: &[Row], field: &str, expected_value: &str) -> VerifyResult<()> {
    let Some(row) = find_hash_row(rows, field) else {
        return VerifyError::MissingField {
            field: field.to_string(),
        }
        .reject();
    };

    let actual = row.column(HASH_VALUE);
    if actual != Some(expected_value) {
        return VerifyError::ValueMismatch {
            subject: format!("hash field {field}"),
            expected: expected_value.to_string(),
            actual: actual.map(str::to_string),
        }
        .reject();
    }
    Ok(())
}

/// Assert every name in `fields` is present. Order and extra fields are ignored.
pub fn verify_hash_fields<S: AsRef<str>>(rows: &[Row], fields: &[S]) -> VerifyResult<()> {
    let present: HashSet<&str> = rows.iter().filter_map(|r| r.column(HASH_FIELD)).collect();

    for field in fields {
        let field = field.as_ref();
        if !present.contains(field) {
            return VerifyError::MissingField {
                field: field.to_string(),
            }
            .reject();
        }
    }
    tracing::trace!(count = fields.len(), "hash fields verified");
    Ok(())
}

fn find_hash_row<'a>(rows: &'a [Row], field: &str) -> Option<&'a Row> {
    rows.iter().find(|row| row.column(HASH_FIELD) == Some(field))
}

// ============================================================================
// LIST / SET / SORTED SET KEYS
// ============================================================================

/// Assert every expected member appears in the value column of a list or set.
///
/// This is a subset check: extra members, duplicates and ordering are not
/// asserted.
pub fn verify_members<S: AsRef<str>>(rows: &[Row], expected_members: &[S]) -> VerifyResult<()> {
    let present: HashSet<&str> = rows
        .iter()
        .filter_map(|r| r.column(MEMBER_VALUE))
        .collect();

    for member in expected_members {
        let member = member.as_ref();
        if !present.contains(member) {
            return VerifyError::MissingMember {
                member: member.to_string(),
            }
            .reject();
        }
    }
    Ok(())
}

/// Assert each entry's member exists and, when a score is given, that the
/// score cell shows exactly [`Score::canonical`]. A zero score is compared
/// like any other.
pub fn verify_sorted_set_entries(rows: &[Row], entries: &[SortedSetEntry]) -> VerifyResult<()> {
    for entry in entries {
        let Some(row) = rows
            .iter()
            .find(|row| row.column(ZSET_MEMBER) == Some(entry.member.as_str()))
        else {
            return VerifyError::MissingMember {
                member: entry.member.clone(),
            }
            .reject();
        };

        if let Some(score) = &entry.score {
            let expected = score.canonical();
            let actual = row.column(ZSET_SCORE);
            if actual != Some(expected.as_str()) {
                return VerifyError::ValueMismatch {
                    subject: format!("score of member {}", entry.member),
                    expected,
                    actual: actual.map(str::to_string),
                }
                .reject();
            }
        }
    }
    tracing::trace!(count = entries.len(), "sorted set entries verified");
    Ok(())
}

// ============================================================================
// STRING KEYS
// ============================================================================

/// Assert a string key renders as exactly one row holding `expected_value`.
pub fn verify_string_value(rows: &[Row], expected_value: &str) -> VerifyResult<()> {
    if rows.len() != 1 {
        return VerifyError::RowCountMismatch {
            expected: 1,
            actual: rows.len(),
        }
        .reject();
    }

    let actual = rows[0].column(STRING_VALUE);
    if actual != Some(expected_value) {
        return VerifyError::ValueMismatch {
            subject: "string value".to_string(),
            expected: expected_value.to_string(),
            actual: actual.map(str::to_string),
        }
        .reject();
    }
    Ok(())
}

// ============================================================================
// KEY METADATA AND LAYOUT
// ============================================================================

/// Assert the metadata panel shows `Type = expected_type` and a `Size` entry.
pub fn verify_key_metadata(fields: &Fields, expected_type: &str) -> VerifyResult<()> {
    verify_key_metadata_with(VerifyConfig::standard(), fields, expected_type)
}

/// [`verify_key_metadata`] with labels taken from `config`.
pub fn verify_key_metadata_with(
    config: &VerifyConfig,
    fields: &Fields,
    expected_type: &str,
) -> VerifyResult<()> {
    if !fields.contains(&config.type_label, expected_type) {
        return VerifyError::ValueMismatch {
            subject: config.type_label.clone(),
            expected: expected_type.to_string(),
            actual: fields.find(&config.type_label).map(str::to_string),
        }
        .reject();
    }
    if !fields.has(&config.key_size_label) {
        return VerifyError::MissingField {
            field: config.key_size_label.clone(),
        }
        .reject();
    }
    Ok(())
}

/// Assert the header row is exactly the layout for `key_type`.
///
/// Unrecognized type names get the string layout.
pub fn verify_columns_for_type<S: AsRef<str>>(columns: &[S], key_type: &str) -> VerifyResult<()> {
    let key_type = KeyType::from_name(key_type);
    let expected = key_type.columns();

    let matches = columns.len() == expected.len()
        && columns.iter().zip(expected).all(|(c, e)| c.as_ref() == *e);
    if !matches {
        return VerifyError::ColumnsMismatch {
            context: format!("{} key", key_type.as_str()),
            expected: expected.iter().map(|c| c.to_string()).collect(),
            actual: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }
        .reject();
    }
    Ok(())
}

// ============================================================================
// KEY LISTS
// ============================================================================

/// Drop `session:` keys. Only the prefix is matched.
pub fn filter_session_keys<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    filter_session_keys_with(VerifyConfig::standard(), keys)
}

pub fn filter_session_keys_with<S: AsRef<str>>(config: &VerifyConfig, keys: &[S]) -> Vec<String> {
    filter_keys_with_prefix(keys, &config.session_prefix)
}

/// Copy of `keys` without the ones starting with `prefix`.
pub fn filter_keys_with_prefix<S: AsRef<str>>(keys: &[S], prefix: &str) -> Vec<String> {
    keys.iter()
        .map(AsRef::as_ref)
        .filter(|key| !key.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
