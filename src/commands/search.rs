//! Range search command

use crate::core::EngineError;
use crate::engine::{JumbleEngine, SearchCriteria};
use rand::Rng;

/// Result of a range search
pub struct SearchResult {
    pub criteria: SearchCriteria,
    pub words: Vec<String>,
}

/// Search by start letter, end letter and length
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if no criterion is given, a letter is
/// outside `a`-`z`, or the length is zero.
pub fn run_search<R: Rng>(
    engine: &JumbleEngine<'_, R>,
    criteria: SearchCriteria,
) -> Result<SearchResult, EngineError> {
    if !criteria.is_valid() {
        return Err(EngineError::InvalidArgument(
            "need at least one of start letter, end letter or length; letters must be a-z and length >= 1"
                .to_string(),
        ));
    }

    let words = engine
        .search(criteria.start, criteria.end, criteria.length)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(SearchResult { criteria, words })
}
