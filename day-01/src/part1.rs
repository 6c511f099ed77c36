use itertools::Itertools;
use tracing::debug;

use crate::{error::LocationError, loader::parse_input};

/// Pairs up the smallest left with the smallest right, and so on, summing
/// how far apart each pair is. The inputs are left in their original order.
#[tracing::instrument(skip_all, fields(left = left.len(), right = right.len()))]
pub fn distance_sum(left: &[i32], right: &[i32]) -> Result<u64, LocationError> {
    if left.len() != right.len() {
        return Err(LocationError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let sum = left
        .iter()
        .sorted_unstable()
        .zip(right.iter().sorted_unstable())
        .map(|(a, b)| u64::from(a.abs_diff(*b)))
        .sum::<u64>();

    debug!(sum, "computed distance sum");
    Ok(sum)
}

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_input(input)?;
    let result = distance_sum(&lists.left, &lists.right)?;

    Ok(result.to_string())
}
