//! Policy evaluator - main evaluation logic.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::policy::{CharacterClass, POLICY_RULES, PolicyRule};
use crate::rating::StrengthRating;
use crate::sections::{Candidate, blacklist_section, character_class_section, entropy_section};

/// Outcome of checking one password against the rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceVerdict {
    /// `true` iff `failed_rules` is empty.
    pub overall: bool,
    pub entropy_bits: f64,
    /// Presence of every character class, mandatory or not.
    pub class_results: BTreeMap<CharacterClass, bool>,
    pub blacklisted: bool,
    /// Violated rules in declaration order.
    pub failed_rules: Vec<PolicyRule>,
}

impl ComplianceVerdict {
    pub fn is_compliant(&self) -> bool {
        self.overall
    }

    /// Whether `rule` held for the evaluated password.
    pub fn passed(&self, rule: &PolicyRule) -> bool {
        !self.failed_rules.contains(rule)
    }

    pub fn rating(&self) -> StrengthRating {
        StrengthRating::from_entropy(self.entropy_bits)
    }
}

/// Evaluates a password against the organizational rule set.
///
/// Total: every input, including the empty string, yields a verdict.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `blacklist` - Known-weak passwords, matched ignoring case
pub fn evaluate(password: &str, blacklist: &Blacklist) -> ComplianceVerdict {
    let candidate = Candidate::new(password, blacklist);

    // Orchestrator: one section per rule, in declaration order
    let failed_rules: Vec<PolicyRule> = POLICY_RULES
        .iter()
        .filter_map(|rule| match *rule {
            PolicyRule::MinEntropy(bits) => entropy_section(&candidate, bits),
            PolicyRule::RequireClass(class) => character_class_section(&candidate, class),
            PolicyRule::NotBlacklisted => blacklist_section(&candidate),
        })
        .collect();

    let class_results = CharacterClass::ALL
        .into_iter()
        .map(|class| (class, candidate.scan.contains(class)))
        .collect();

    let verdict = ComplianceVerdict {
        overall: failed_rules.is_empty(),
        entropy_bits: candidate.scan.entropy_bits(),
        class_results,
        blacklisted: failed_rules.contains(&PolicyRule::NotBlacklisted),
        failed_rules,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: compliant={} entropy={:.2} failed={:?}",
        verdict.overall,
        verdict.entropy_bits,
        verdict.failed_rules
    );

    verdict
}

/// Same as [`evaluate`], for a password held as a secret.
pub fn evaluate_secret(password: &SecretString, blacklist: &Blacklist) -> ComplianceVerdict {
    evaluate(password.expose_secret(), blacklist)
}

/// Async version that sends the verdict via channel.
///
/// Cancellation is only checked before the evaluation starts: a token
/// cancelled by then means nothing is sent. Evaluation itself is short and
/// synchronous and is not interrupted.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: SecretString,
    blacklist: Arc<Blacklist>,
    token: CancellationToken,
    tx: mpsc::Sender<ComplianceVerdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before start");
        return;
    }

    let verdict = evaluate_secret(&password, &blacklist);

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send compliance verdict: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Blacklist {
        Blacklist::from_lines("password\n123456\nqwerty\npassword123\nadmin\n")
    }

    #[test]
    fn test_evaluate_empty_password() {
        let verdict = evaluate("", &common());

        assert_eq!(verdict.entropy_bits, 0.0);
        assert!(!verdict.overall);
        assert!(!verdict.blacklisted);
        assert!(verdict.class_results.values().all(|present| !present));
        assert_eq!(
            verdict.failed_rules,
            vec![
                PolicyRule::MinEntropy(40.0),
                PolicyRule::RequireClass(CharacterClass::Uppercase),
                PolicyRule::RequireClass(CharacterClass::Digit),
                PolicyRule::RequireClass(CharacterClass::Special),
            ]
        );
    }

    #[test]
    fn test_evaluate_empty_password_on_blacklist() {
        let blacklist: Blacklist = ["", "qwerty"].into_iter().collect();
        let verdict = evaluate("", &blacklist);

        assert!(verdict.blacklisted);
        assert!(!verdict.overall);
        assert_eq!(verdict.failed_rules.last(), Some(&PolicyRule::NotBlacklisted));
        assert_eq!(verdict.failed_rules.len(), 5);
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        let verdict = evaluate("nergiznergiz", &common());

        assert!((verdict.entropy_bits - 56.4).abs() < 0.1);
        assert!(!verdict.overall);
        assert_eq!(
            verdict.failed_rules,
            vec![
                PolicyRule::RequireClass(CharacterClass::Uppercase),
                PolicyRule::RequireClass(CharacterClass::Digit),
                PolicyRule::RequireClass(CharacterClass::Special),
            ]
        );
        assert!(verdict.class_results[&CharacterClass::Lowercase]);
        assert!(!verdict.class_results[&CharacterClass::Uppercase]);
    }

    #[test]
    fn test_evaluate_short_all_classes() {
        let verdict = evaluate("Ab1!", &common());

        assert!(verdict.entropy_bits < 40.0);
        assert!(verdict.class_results.values().all(|present| *present));
        assert!(!verdict.overall);
        assert_eq!(verdict.failed_rules, vec![PolicyRule::MinEntropy(40.0)]);
    }

    #[test]
    fn test_evaluate_blacklisted_mixed_case() {
        let verdict = evaluate("Password123", &common());

        assert!(verdict.blacklisted);
        assert!(!verdict.overall);
        assert_eq!(
            verdict.failed_rules,
            vec![
                PolicyRule::RequireClass(CharacterClass::Special),
                PolicyRule::NotBlacklisted,
            ]
        );
    }

    #[test]
    fn test_evaluate_compliant_password() {
        let verdict = evaluate("VeryStrongPassword123!@#", &common());

        assert!(verdict.overall);
        assert!(verdict.is_compliant());
        assert!(verdict.failed_rules.is_empty());
        assert!(!verdict.blacklisted);
        assert!(verdict.entropy_bits >= 40.0);
        assert_eq!(verdict.rating(), StrengthRating::Strong);
    }

    #[test]
    fn test_evaluate_without_lowercase_is_compliant() {
        let verdict = evaluate("XK7#QP2$MZ9!", &Blacklist::new());

        assert!(verdict.overall);
        assert!(!verdict.class_results[&CharacterClass::Lowercase]);
    }

    #[test]
    fn test_evaluate_blacklisted_compliant_shape() {
        let blacklist = Blacklist::from_lines("Tr0ub4dor&3xyz");
        let verdict = evaluate("TR0UB4DOR&3XYZ", &blacklist);

        assert!(verdict.blacklisted);
        assert_eq!(verdict.failed_rules, vec![PolicyRule::NotBlacklisted]);
        assert!(verdict.passed(&PolicyRule::MinEntropy(40.0)));
        assert!(!verdict.passed(&PolicyRule::NotBlacklisted));
    }

    #[test]
    fn test_evaluate_is_case_sensitive_for_classes() {
        let lower = evaluate("password123!", &Blacklist::new());
        let upper = evaluate("PASSWORD123!", &Blacklist::new());

        assert!(!lower.passed(&PolicyRule::RequireClass(CharacterClass::Uppercase)));
        assert!(upper.passed(&PolicyRule::RequireClass(CharacterClass::Uppercase)));
    }

    #[test]
    fn test_evaluate_unicode_counts_code_points() {
        // 10 code points, only 'A', '1', '!' classified: N = 68
        let verdict = evaluate("A1!ééééééé", &Blacklist::new());
        let expected = 10.0 * 68f64.log2();

        assert!((verdict.entropy_bits - expected).abs() < 1e-9);
        assert!(verdict.overall);
    }

    #[test]
    fn test_evaluate_whitespace_only() {
        let verdict = evaluate("                ", &Blacklist::new());

        assert_eq!(verdict.entropy_bits, 0.0);
        assert!(!verdict.overall);
    }

    #[test]
    fn test_evaluate_very_long_password() {
        let password = "Ab1!".repeat(10_000);
        let verdict = evaluate(&password, &Blacklist::new());

        assert!(verdict.overall);
        assert!(verdict.entropy_bits.is_finite());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let blacklist = common();
        for password in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            assert_eq!(evaluate(password, &blacklist), evaluate(password, &blacklist));
        }
    }

    #[test]
    fn test_evaluate_secret_matches_plain() {
        let blacklist = common();
        let pwd = SecretString::new("MyPass123!".to_string().into());

        assert_eq!(evaluate_secret(&pwd, &blacklist), evaluate("MyPass123!", &blacklist));
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn common() -> Arc<Blacklist> {
        Arc::new(Blacklist::from_lines("password\n123456\nqwerty\n"))
    }

    #[tokio::test]
    async fn test_evaluate_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(pwd, common(), token, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert!(verdict.overall);
    }

    #[tokio::test]
    async fn test_evaluate_tx_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(pwd, common(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("password".to_string().into());

        evaluate_tx(pwd, common(), CancellationToken::new(), tx).await;
    }
}
