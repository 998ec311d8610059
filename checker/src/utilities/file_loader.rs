//!
//! File Loader Utility
//!
//! Loads the files a check needs and turns them into token streams.
//!
//! # Functionality
//!
//! - Checks that each referenced path exists and is a regular file.
//! - Enforces a maximum size on the answer and output files.
//! - Returns [`TokenStream`]s tagged with the stream origin.
//!
//! # Error Handling
//!
//! Returns [`CheckerError`] variants for missing files, wrong file types, size
//! violations, and read failures. Each failure is also logged with its path.

use crate::error::CheckerError;
use crate::stream::TokenStream;
use crate::types::Origin;
use std::fs;
use std::path::Path;
use tracing::error;

/// Checks that a file exists, is a file, and (optionally) does not exceed a maximum size.
///
/// # Errors
///
/// Returns the matching [`CheckerError`] if the file is missing, not a file,
/// unreadable, or too large.
pub fn check_file(path: &Path, max_size: Option<u64>) -> Result<(), CheckerError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(CheckerError::NotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(CheckerError::NotAFile(path.to_path_buf()));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        CheckerError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    if let Some(max) = max_size {
        if metadata.len() > max {
            error!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                max
            );
            return Err(CheckerError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max,
            });
        }
    }

    Ok(())
}

/// Validates and reads `path` into a token stream for the given side.
pub fn load_stream(path: &Path, origin: Origin, max_size: u64) -> Result<TokenStream, CheckerError> {
    check_file(path, Some(max_size))?;

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read {} file {}: {}", origin, path.display(), e);
        CheckerError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(TokenStream::from_bytes(&bytes, origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::token_reader::TokenReader;
    use tempfile::TempDir;

    #[test]
    fn loads_existing_file() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("answer.txt");
        fs::write(&path, "1 2 3\n").unwrap();

        let mut stream = load_stream(&path, Origin::Answer, 1024).unwrap();
        assert_eq!(stream.origin(), Origin::Answer);
        assert_eq!(stream.read_long().unwrap(), 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("nope.txt");
        let err = load_stream(&path, Origin::Output, 1024).unwrap_err();
        assert!(matches!(err, CheckerError::NotFound(_)));
    }

    #[test]
    fn directory_is_not_a_file() {
        let td = TempDir::new().unwrap();
        let err = check_file(td.path(), None).unwrap_err();
        assert!(matches!(err, CheckerError::NotAFile(_)));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("big.txt");
        fs::write(&path, "0123456789").unwrap();

        let err = load_stream(&path, Origin::Output, 5).unwrap_err();
        match err {
            CheckerError::TooLarge { size, max, .. } => {
                assert_eq!(size, 10);
                assert_eq!(max, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn size_limit_is_optional() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("input.txt");
        fs::write(&path, "0123456789").unwrap();
        assert!(check_file(&path, None).is_ok());
    }
}
