//! Entropy section - checks the Shannon entropy floor.

use super::{Candidate, SectionResult};
use crate::policy::PolicyRule;

/// Checks that the candidate's entropy reaches `min_bits`.
///
/// # Returns
/// - `Some(PolicyRule::MinEntropy)` if entropy is below the floor
/// - `None` otherwise
pub fn entropy_section(candidate: &Candidate<'_>, min_bits: f64) -> SectionResult {
    if candidate.scan.entropy_bits() < min_bits {
        return Some(PolicyRule::MinEntropy(min_bits));
    }
    None
}
