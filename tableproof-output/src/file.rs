//! Exported file checks

use std::io::ErrorKind;
use std::path::Path;
use tableproof_core::{VerifyError, VerifyResult};

fn io_failure<T>(path: &Path, err: std::io::Error) -> VerifyResult<T> {
    if err.kind() == ErrorKind::NotFound {
        return VerifyError::MissingFile {
            path: path.to_path_buf(),
        }
        .reject();
    }
    VerifyError::Io {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
    .reject()
}

pub fn verify_file_exists(path: impl AsRef<Path>) -> VerifyResult<()> {
    let path = path.as_ref();
    std::fs::metadata(path).or_else(|e| io_failure(path, e))?;
    Ok(())
}

pub fn verify_file_not_empty(path: impl AsRef<Path>) -> VerifyResult<()> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).or_else(|e| io_failure(path, e))?;
    if metadata.len() == 0 {
        return VerifyError::EmptyFile {
            path: path.to_path_buf(),
        }
        .reject();
    }
    Ok(())
}

/// Assert the file at `path` is readable text containing `needle`.
pub fn verify_file_contains(path: impl AsRef<Path>, needle: &str) -> VerifyResult<()> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).or_else(|e| io_failure(path, e))?;
    if !content.contains(needle) {
        return VerifyError::MissingText {
            needle: needle.to_string(),
            output: content,
        }
        .reject();
    }
    Ok(())
}
