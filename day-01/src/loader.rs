use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{error::LocationError, locations::LocationLists};

/// Reads both location lists from the file at `path`, one record per line.
///
/// Nothing is returned unless every line parses.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_locations<P: AsRef<Path>>(path: P) -> Result<LocationLists, LocationError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LocationError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| LocationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = BufReader::new(file).lines().map(|line| {
        line.map_err(|source| LocationError::Io {
            path: path.to_path_buf(),
            source,
        })
    });
    let lists = LocationLists::from_lines(lines)?;

    debug!(records = lists.left.len(), "loaded locations");
    Ok(lists)
}

/// Same record rules as [`load_locations`], applied to puzzle text already in memory.
#[tracing::instrument(skip_all)]
pub fn parse_input(input: &str) -> Result<LocationLists, LocationError> {
    let lists = LocationLists::from_lines(input.lines().map(Ok))?;
    debug!(records = lists.left.len(), "parsed locations");
    Ok(lists)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use miette::IntoDiagnostic;

    use super::*;
    use crate::error::LineError;

    const SAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    #[test_log::test]
    fn test_load_bundled_fixture() -> miette::Result<()> {
        let lists = load_locations(concat!(env!("CARGO_MANIFEST_DIR"), "/test.txt"))?;
        assert_eq!(vec![3, 4, 2, 1, 3, 3], lists.left);
        assert_eq!(vec![4, 3, 5, 3, 9, 3], lists.right);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() -> miette::Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_locations(&missing),
            Err(LocationError::NotFound { path }) if path == missing
        ));
        Ok(())
    }

    #[test]
    fn test_load_directory_is_io_error() -> miette::Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        assert!(matches!(
            load_locations(dir.path()),
            Err(LocationError::Io { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_load_crlf_with_trailing_newline() -> miette::Result<()> {
        let mut file = tempfile::NamedTempFile::new().into_diagnostic()?;
        write!(file, "1   2\r\n30 40\r\n\r\n").into_diagnostic()?;

        let lists = load_locations(file.path())?;
        assert_eq!(vec![1, 30], lists.left);
        assert_eq!(vec![2, 40], lists.right);
        Ok(())
    }

    #[test]
    fn test_load_single_token_line() -> miette::Result<()> {
        let mut file = tempfile::NamedTempFile::new().into_diagnostic()?;
        writeln!(file, "3   4\n10").into_diagnostic()?;

        assert!(matches!(
            load_locations(file.path()),
            Err(LocationError::Line {
                number: 2,
                source: LineError::Format { found: 1, .. },
            })
        ));
        Ok(())
    }

    #[test]
    fn test_parse_input() -> miette::Result<()> {
        let lists = parse_input(SAMPLE)?;
        assert_eq!(6, lists.left.len());
        assert_eq!(lists.left.len(), lists.right.len());
        Ok(())
    }
}
