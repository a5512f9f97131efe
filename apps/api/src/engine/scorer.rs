//! RIASEC scorer: sums answer-option contributions into six dimension totals.

use tracing::debug;

use crate::catalog::questions::QuestionBank;
use crate::models::riasec::DimensionScores;

/// Aggregates selected option ids into dimension totals.
///
/// Each id is resolved to the first matching option in bank order. Unknown
/// ids contribute nothing. Order does not matter and repeated ids count once
/// per occurrence.
pub fn score_answers<S: AsRef<str>>(answers: &[S], bank: &QuestionBank) -> DimensionScores {
    let mut totals = DimensionScores::default();

    for answer in answers {
        let option_id = answer.as_ref();
        match bank.find_option(option_id) {
            Some(option) => totals.accumulate(&option.scores),
            None => debug!("Ignoring unknown answer option '{option_id}'"),
        }
    }

    totals
}
