//! Policy rules and character classes shared by the evaluator and the generator.

use std::fmt;

/// Minimum Shannon entropy, in bits, a compliant password must reach.
pub const MIN_ENTROPY_BITS: f64 = 40.0;

/// The organizational rule set, in declaration order.
///
/// Violations are always reported in this order.
pub const POLICY_RULES: [PolicyRule; 5] = [
    PolicyRule::MinEntropy(MIN_ENTROPY_BITS),
    PolicyRule::RequireClass(CharacterClass::Uppercase),
    PolicyRule::RequireClass(CharacterClass::Digit),
    PolicyRule::RequireClass(CharacterClass::Special),
    PolicyRule::NotBlacklisted,
];

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8; 10] = b"0123456789";
const SPECIAL: &[u8; 32] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A fixed ASCII alphabet used for class detection and entropy sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    /// The 32 printable ASCII symbols (no whitespace, no alphanumerics).
    Special,
}

impl CharacterClass {
    /// Every class, in tally order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Classes the rule set gates on. Lowercase is tracked but not required.
    pub const MANDATORY: [CharacterClass; 3] = [
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Alphabet size used in entropy math.
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    /// Classifies a single code point. Anything outside the four ASCII
    /// alphabets (whitespace, control characters, non-ASCII) has no class.
    pub fn of(c: char) -> Option<CharacterClass> {
        match c {
            'a'..='z' => Some(CharacterClass::Lowercase),
            'A'..='Z' => Some(CharacterClass::Uppercase),
            '0'..='9' => Some(CharacterClass::Digit),
            c if c.is_ascii_punctuation() => Some(CharacterClass::Special),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            CharacterClass::Lowercase => 0,
            CharacterClass::Uppercase => 1,
            CharacterClass::Digit => 2,
            CharacterClass::Special => 3,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// One organizational password rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyRule {
    /// Entropy must be at least this many bits.
    MinEntropy(f64),
    /// At least one character of the class must be present.
    RequireClass(CharacterClass),
    /// The password must not match a blacklist entry, ignoring case.
    NotBlacklisted,
}

impl PolicyRule {
    /// Stable machine identifier of the rule.
    pub fn id(&self) -> &'static str {
        match self {
            PolicyRule::MinEntropy(_) => "min-entropy",
            PolicyRule::RequireClass(CharacterClass::Lowercase) => "require-lowercase",
            PolicyRule::RequireClass(CharacterClass::Uppercase) => "require-uppercase",
            PolicyRule::RequireClass(CharacterClass::Digit) => "require-digit",
            PolicyRule::RequireClass(CharacterClass::Special) => "require-special",
            PolicyRule::NotBlacklisted => "not-blacklisted",
        }
    }
}

impl fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Single-pass tally of a password: its length in code points and one
/// counter per character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterScan {
    length: usize,
    counts: [usize; 4],
}

impl CharacterScan {
    pub fn new(password: &str) -> Self {
        let mut scan = CharacterScan::default();
        for c in password.chars() {
            scan.length += 1;
            if let Some(class) = CharacterClass::of(c) {
                scan.counts[class.index()] += 1;
            }
        }
        scan
    }

    /// Number of code points, including those outside every class.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self, class: CharacterClass) -> usize {
        self.counts[class.index()]
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.count(class) > 0
    }

    /// Sum of the alphabet sizes of the classes actually present.
    pub fn charset_size(&self) -> usize {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.contains(**class))
            .map(|class| class.size())
            .sum()
    }

    /// `length × log2(charset_size)`, or 0 when no class is present.
    pub fn entropy_bits(&self) -> f64 {
        let n = self.charset_size();
        if n == 0 {
            return 0.0;
        }
        self.length as f64 * (n as f64).log2()
    }
}
