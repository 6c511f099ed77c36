use itertools::Itertools;
use tracing::debug;

use crate::loader::parse_input;

/// Sums each left value weighted by how often it shows up on the right.
/// Left duplicates each contribute; the lists don't need equal lengths.
#[tracing::instrument(skip_all, fields(left = left.len(), right = right.len()))]
pub fn similarity_score(left: &[i32], right: &[i32]) -> i64 {
    let counts = right.iter().copied().counts();

    let score = left
        .iter()
        .map(|value| {
            let count = counts.get(value).copied().unwrap_or_default();
            i64::from(*value) * count as i64
        })
        .sum::<i64>();

    debug!(score, "computed similarity score");
    score
}

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_input(input)?;
    let result = similarity_score(&lists.left, &lists.right);

    Ok(result.to_string())
}
