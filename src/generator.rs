//! Policy-compliant password generator.
//!
//! Output satisfies the rule set by construction: one seed character from
//! every class, a uniform fill from the 94-symbol union alphabet, then a
//! Fisher–Yates shuffle. The result is re-checked by the evaluator before it
//! is returned.

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::blacklist::Blacklist;
use crate::evaluator::evaluate;
use crate::policy::CharacterClass;

/// Lower bound of the default length range and fallback for invalid requests.
pub const DEFAULT_LENGTH: usize = 12;
/// Upper bound of the default length range.
pub const MAX_LENGTH: usize = 16;
/// Shortest length a caller may request; 10 × log2(94) still clears the entropy floor.
pub const MIN_REQUESTED_LENGTH: usize = 10;

/// Every class alphabet laid end to end: lowercase, uppercase, digits, symbols.
const UNION_ALPHABET: &[u8; 94] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

/// Resolves the final password length.
///
/// `None` draws uniformly from `[12, 16]`. A request inside `[10, 16]` is
/// honored as is; anything else falls back to 12.
fn resolve_length<R: TryCryptoRng + ?Sized>(
    target_length: Option<usize>,
    rng: &mut R,
) -> Result<usize, GenerateError> {
    match target_length {
        None => {
            let span = MAX_LENGTH - DEFAULT_LENGTH + 1;
            Ok(DEFAULT_LENGTH + uniform_index(rng, span)?)
        }
        Some(n) if (MIN_REQUESTED_LENGTH..=MAX_LENGTH).contains(&n) => Ok(n),
        Some(_n) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "requested length {} out of range, using {}",
                _n,
                DEFAULT_LENGTH
            );
            Ok(DEFAULT_LENGTH)
        }
    }
}

/// Draws an unbiased index in `0..bound` by rejection sampling 32-bit words.
fn uniform_index<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, GenerateError> {
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let bound = bound as u64;
    // Largest multiple of `bound` not exceeding 2^32.
    let zone = (1u64 << 32) - (1u64 << 32) % bound;
    loop {
        let word = rng
            .try_next_u32()
            .map_err(|e| GenerateError::RandomnessUnavailable(e.to_string()))?;
        let word = u64::from(word);
        if word < zone {
            return Ok((word % bound) as usize);
        }
    }
}

fn pick<R: TryCryptoRng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> Result<u8, GenerateError> {
    Ok(alphabet[uniform_index(rng, alphabet.len())?])
}

/// Generates a password that satisfies every policy rule.
///
/// # Arguments
/// * `target_length` - Requested length, see the length policy on the constants
/// * `rng` - Cryptographically secure randomness, supplied per call
///
/// # Errors
///
/// Returns [`GenerateError::RandomnessUnavailable`] if `rng` fails.
///
/// # Panics
///
/// Panics if the constructed password does not pass the evaluator, which
/// means the construction itself is broken.
pub fn generate<R: TryCryptoRng + ?Sized>(
    target_length: Option<usize>,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut chars: Vec<u8> = Vec::with_capacity(MAX_LENGTH);

    // Seeds: one from each mandatory class plus lowercase.
    for class in [
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
        CharacterClass::Lowercase,
    ] {
        chars.push(pick(rng, class.alphabet())?);
    }

    let length = resolve_length(target_length, rng)?;

    while chars.len() < length {
        chars.push(pick(rng, UNION_ALPHABET)?);
    }

    // Fisher–Yates
    for i in (1..chars.len()).rev() {
        let j = uniform_index(rng, i + 1)?;
        chars.swap(i, j);
    }

    let password: String = chars.into_iter().map(char::from).collect();

    let verdict = evaluate(&password, &Blacklist::new());
    if !verdict.overall {
        #[cfg(feature = "tracing")]
        tracing::error!("generated password violates policy: {:?}", verdict.failed_rules);
        panic!("generated password violates policy: {:?}", verdict.failed_rules);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password generated: length={} entropy={:.2}",
        length,
        verdict.entropy_bits
    );

    Ok(password)
}

/// Generates a password using the operating system's random source.
///
/// # Errors
///
/// Returns [`GenerateError::RandomnessUnavailable`] if the OS source fails.
pub fn generate_password(target_length: Option<usize>) -> Result<String, GenerateError> {
    generate(target_length, &mut OsRng)
}
