use tracing::info;

use crate::{error::LocationError, locations::LocationLists};

/// Known answers for the six-line example bundled as `test.txt`.
pub const EXPECTED_DISTANCE_SUM: u64 = 11;
pub const EXPECTED_SIMILARITY_SCORE: i64 = 31;

/// Verifies both metrics against the answers known for the example lists.
#[tracing::instrument(skip_all)]
pub fn self_check(lists: &LocationLists) -> Result<(), LocationError> {
    let distance = lists.distance_sum()?;
    if distance != EXPECTED_DISTANCE_SUM {
        return Err(LocationError::SelfCheck {
            part: "part 1",
            expected: EXPECTED_DISTANCE_SUM.into(),
            actual: distance.into(),
        });
    }

    let similarity = lists.similarity_score();
    if similarity != EXPECTED_SIMILARITY_SCORE {
        return Err(LocationError::SelfCheck {
            part: "part 2",
            expected: EXPECTED_SIMILARITY_SCORE.into(),
            actual: similarity.into(),
        });
    }

    info!("self-check passed");
    Ok(())
}
