use std::{num::ParseIntError, path::PathBuf};

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Reasons a single input line can't be turned into a pair of locations.
#[derive(Debug, Error, Diagnostic)]
pub enum LineError {
    #[error("expected two entries per line, found {found}")]
    #[diagnostic(
        code(day01::format),
        help("each line must hold exactly two integers separated by whitespace")
    )]
    Format {
        found: usize,
        #[source_code]
        src: String,
        #[label("this line")]
        span: SourceSpan,
    },

    #[error("cannot convert either '{left}' or '{right}' to an integer")]
    #[diagnostic(code(day01::parse))]
    Parse {
        left: String,
        right: String,
        #[source]
        source: ParseIntError,
        #[source_code]
        src: String,
        #[label("not a base-10 integer")]
        span: SourceSpan,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum LocationError {
    #[error("file {} does not exist", .path.display())]
    #[diagnostic(code(day01::not_found))]
    NotFound { path: PathBuf },

    #[error("cannot read file {}", .path.display())]
    #[diagnostic(code(day01::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record on line {number}")]
    #[diagnostic(code(day01::line))]
    Line {
        number: usize,
        #[source]
        #[diagnostic_source]
        source: LineError,
    },

    #[error(
        "left and right locations are expected to have the same size, \
         but left has {left} elements and right has {right} elements"
    )]
    #[diagnostic(code(day01::length_mismatch))]
    LengthMismatch { left: usize, right: usize },

    #[error("self-check of {part} failed: expected {expected}, got {actual}")]
    #[diagnostic(
        code(day01::self_check),
        help("the bundled test.txt fixture no longer produces the known answer")
    )]
    SelfCheck {
        part: &'static str,
        expected: i128,
        actual: i128,
    },
}
