//! Strength bands and human-readable violation reasons for display layers.

use std::fmt;

use crate::evaluator::ComplianceVerdict;
use crate::policy::{CharacterClass, MIN_ENTROPY_BITS, PolicyRule};

const STRONG_ENTROPY_BITS: f64 = 60.0;

/// Coarse strength band derived from entropy alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthRating {
    VeryWeak,
    Medium,
    Strong,
}

impl StrengthRating {
    /// `< 40` bits is very weak, `< 60` medium, anything above strong.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < MIN_ENTROPY_BITS {
            StrengthRating::VeryWeak
        } else if bits < STRONG_ENTROPY_BITS {
            StrengthRating::Medium
        } else {
            StrengthRating::Strong
        }
    }

    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            StrengthRating::VeryWeak => &[
                "Increase password length (aim for at least 12-16 characters)",
                "Add uppercase letters",
                "Add lowercase letters",
                "Add numbers",
                "Add special characters (!@#$%^&*, etc.)",
            ],
            StrengthRating::Medium => &[
                "Consider increasing password length further",
                "Ensure you're using a mix of all character types",
                "Avoid dictionary words or common patterns",
            ],
            StrengthRating::Strong => &[
                "Your password has good entropy",
                "Consider using a password manager for even stronger unique passwords",
                "Make sure this password is unique and not reused elsewhere",
            ],
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthRating::VeryWeak => "Very Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// One reason per failed rule, in the verdict's order.
pub fn violation_reasons(verdict: &ComplianceVerdict) -> Vec<String> {
    verdict
        .failed_rules
        .iter()
        .map(|rule| match rule {
            PolicyRule::MinEntropy(bits) => format!(
                "Entropy ({:.2} bits) is below minimum threshold ({} bits)",
                verdict.entropy_bits, bits
            ),
            PolicyRule::RequireClass(CharacterClass::Uppercase) => {
                "Missing required Uppercase letter".to_string()
            }
            PolicyRule::RequireClass(CharacterClass::Digit) => {
                "Missing required Number (Digit)".to_string()
            }
            PolicyRule::RequireClass(CharacterClass::Special) => {
                "Missing required Special Character".to_string()
            }
            PolicyRule::RequireClass(CharacterClass::Lowercase) => {
                "Missing required Lowercase letter".to_string()
            }
            PolicyRule::NotBlacklisted => "Password found in common passwords list".to_string(),
        })
        .collect()
}
