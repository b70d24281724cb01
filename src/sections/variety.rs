//! Character class section - checks a required class is present.

use super::{Candidate, SectionResult};
use crate::policy::{CharacterClass, PolicyRule};

/// Checks if the candidate contains at least one character of `class`.
///
/// # Returns
/// - `Some(PolicyRule::RequireClass(class))` if the class is missing
/// - `None` if it is present
pub fn character_class_section(candidate: &Candidate<'_>, class: CharacterClass) -> SectionResult {
    if !candidate.scan.contains(class) {
        return Some(PolicyRule::RequireClass(class));
    }
    None
}
