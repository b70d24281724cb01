//! Blacklist section - checks if password is in common password list.

use super::{Candidate, SectionResult};
use crate::policy::PolicyRule;

/// Checks the candidate against the caller's blacklist, ignoring case.
///
/// # Returns
/// - `Some(PolicyRule::NotBlacklisted)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(candidate: &Candidate<'_>) -> SectionResult {
    if candidate.blacklist.contains(candidate.password) {
        return Some(PolicyRule::NotBlacklisted);
    }
    None
}
