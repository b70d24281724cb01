//! Password policy enforcement library
//!
//! This library classifies passwords as compliant or rejected against a
//! fixed organizational rule set, and generates passwords that satisfy the
//! same rules by construction.
//!
//! The rule set, in reporting order:
//! 1. Entropy of at least 40 bits (`length × log2(charset size)`)
//! 2. At least one uppercase letter
//! 3. At least one digit
//! 4. At least one special character (printable ASCII symbol)
//! 5. Not in the caller's blacklist (case-insensitive)
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file used by
//!   [`Blacklist::from_env`] (default: `./assets/common_passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{Blacklist, PolicyRule, evaluate, generate_password};
//!
//! let blacklist = Blacklist::from_lines("password123\nqwerty\n");
//!
//! let verdict = evaluate("Password123", &blacklist);
//! assert!(!verdict.overall);
//! assert!(verdict.failed_rules.contains(&PolicyRule::NotBlacklisted));
//!
//! let generated = generate_password(None).expect("OS randomness available");
//! assert!(evaluate(&generated, &blacklist).overall);
//! ```

mod blacklist;
mod evaluator;
mod generator;
mod policy;
mod rating;
mod sections;

// Public API
pub use blacklist::{BLACKLIST_PATH_ENV, Blacklist, BlacklistError, blacklist_path};
pub use evaluator::{ComplianceVerdict, evaluate, evaluate_secret};
pub use generator::{
    DEFAULT_LENGTH, GenerateError, MAX_LENGTH, MIN_REQUESTED_LENGTH, generate, generate_password,
};
pub use policy::{CharacterClass, CharacterScan, MIN_ENTROPY_BITS, POLICY_RULES, PolicyRule};
pub use rating::{StrengthRating, violation_reasons};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
