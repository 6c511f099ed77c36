use miette::SourceSpan;

use crate::error::LineError;

/// Splits `line` on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    tokenize_by(line, char::is_whitespace)
}

/// Splits `line` on every character matching `separator`, keeping only the
/// non-empty pieces. An empty line gives no tokens.
pub fn tokenize_by<F>(line: &str, separator: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    line.split(separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parses one record: exactly two base-10 integers, left then right.
#[tracing::instrument(level = "trace")]
pub fn parse_line(line: &str) -> Result<(i32, i32), LineError> {
    let tokens = tokenize(line);
    let [left, right] = tokens.as_slice() else {
        return Err(LineError::Format {
            found: tokens.len(),
            src: line.to_string(),
            span: (0, line.len()).into(),
        });
    };

    let first = left
        .parse::<i32>()
        .map_err(|source| parse_error(line, left, right, left, source))?;
    let second = right
        .parse::<i32>()
        .map_err(|source| parse_error(line, left, right, right, source))?;

    Ok((first, second))
}

fn parse_error(
    line: &str,
    left: &str,
    right: &str,
    culprit: &str,
    source: std::num::ParseIntError,
) -> LineError {
    LineError::Parse {
        left: left.to_string(),
        right: right.to_string(),
        source,
        src: line.to_string(),
        span: span_of(line, culprit),
    }
}

// tokens are always subslices of `line`
fn span_of(line: &str, token: &str) -> SourceSpan {
    let offset = token.as_ptr() as usize - line.as_ptr() as usize;
    (offset, token.len()).into()
}
