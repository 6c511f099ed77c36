use tracing::trace;

use crate::{error::LocationError, parser::parse_line, part1, part2};

/// The two columns of location IDs, kept in the order they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<i32>,
    pub right: Vec<i32>,
}

impl LocationLists {
    pub fn new(left: Vec<i32>, right: Vec<i32>) -> Self {
        Self { left, right }
    }

    /// Builds the lists from input lines, numbering them from 1.
    ///
    /// Blank lines at the very end are ignored. A blank line that is followed
    /// by another record goes through [`parse_line`] like any other line and
    /// fails there. The first error aborts the whole collection.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LocationError>
    where
        I: IntoIterator<Item = Result<S, LocationError>>,
        S: AsRef<str>,
    {
        let mut lists = Self::default();
        let mut pending_blank: Option<(usize, S)> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            let number = index + 1;

            if line.as_ref().trim().is_empty() {
                if pending_blank.is_none() {
                    pending_blank = Some((number, line));
                }
                continue;
            }

            if let Some((blank_number, blank)) = pending_blank.take() {
                lists.push_line(blank_number, blank.as_ref())?;
            }
            lists.push_line(number, line.as_ref())?;
        }

        if let Some((number, _)) = pending_blank {
            trace!(from_line = number, "skipping trailing blank lines");
        }

        Ok(lists)
    }

    fn push_line(&mut self, number: usize, line: &str) -> Result<(), LocationError> {
        let (left, right) =
            parse_line(line).map_err(|source| LocationError::Line { number, source })?;
        self.left.push(left);
        self.right.push(right);
        Ok(())
    }

    pub fn distance_sum(&self) -> Result<u64, LocationError> {
        part1::distance_sum(&self.left, &self.right)
    }

    pub fn similarity_score(&self) -> i64 {
        part2::similarity_score(&self.left, &self.right)
    }
}

impl Extend<(i32, i32)> for LocationLists {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (len, _) = iter.size_hint();
        self.left.reserve(len);
        self.right.reserve(len);

        for (left, right) in iter {
            self.left.push(left);
            self.right.push(right);
        }
    }
}

impl FromIterator<(i32, i32)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        let mut lists = Self::default();
        lists.extend(iter);
        lists
    }
}
