//! Password evaluation sections
//!
//! Each section checks one family of policy rules against a scanned candidate.

mod blacklist;
mod entropy;
mod variety;

pub use blacklist::blacklist_section;
pub use entropy::entropy_section;
pub use variety::character_class_section;

use crate::blacklist::Blacklist;
use crate::policy::{CharacterScan, PolicyRule};

/// Result type for section evaluation functions.
/// - `Some(rule)` - Section failed on `rule`
/// - `None` - Section passed
pub type SectionResult = Option<PolicyRule>;

/// A password under evaluation, scanned once and shared by every section.
pub struct Candidate<'a> {
    pub password: &'a str,
    pub scan: CharacterScan,
    pub blacklist: &'a Blacklist,
}

impl<'a> Candidate<'a> {
    pub fn new(password: &'a str, blacklist: &'a Blacklist) -> Self {
        Candidate {
            password,
            scan: CharacterScan::new(password),
            blacklist,
        }
    }
}
