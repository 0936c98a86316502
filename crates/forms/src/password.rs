//! Password policy evaluation.
//!
//! Every check is independent so the form can show live feedback per
//! requirement while the user types. Evaluation is a single pass over the
//! characters and is meant to be recomputed on every change.

use serde::Serialize;

/// Minimum number of characters for a strong password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// One policy requirement, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
}

impl Requirement {
    pub const ALL: [Requirement; 4] = [
        Requirement::MinLength,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Digit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Requirement::MinLength => "At least 8 characters",
            Requirement::Uppercase => "At least 1 uppercase letter (A-Z)",
            Requirement::Lowercase => "At least 1 lowercase letter (a-z)",
            Requirement::Digit => "At least 1 number (0-9)",
        }
    }
}

/// A requirement together with whether the current password meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementCheck {
    pub requirement: Requirement,
    pub met: bool,
}

impl RequirementCheck {
    pub fn label(&self) -> &'static str {
        self.requirement.label()
    }
}

/// Policy compliance record for one password value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
}

impl PasswordRequirements {
    /// Evaluate all checks. The empty string fails every one of them.
    pub fn evaluate(password: &str) -> Self {
        let mut length = 0usize;
        let mut report = Self::default();

        for c in password.chars() {
            length += 1;
            report.has_upper |= c.is_ascii_uppercase();
            report.has_lower |= c.is_ascii_lowercase();
            report.has_digit |= c.is_ascii_digit();
        }
        report.min_length = length >= MIN_PASSWORD_LENGTH;

        report
    }

    /// The strength predicate: every requirement holds.
    pub fn is_strong(&self) -> bool {
        self.min_length && self.has_upper && self.has_lower && self.has_digit
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::MinLength => self.min_length,
            Requirement::Uppercase => self.has_upper,
            Requirement::Lowercase => self.has_lower,
            Requirement::Digit => self.has_digit,
        }
    }

    /// Checklist in display order, for live feedback next to the input.
    pub fn checklist(&self) -> [RequirementCheck; 4] {
        Requirement::ALL.map(|requirement| RequirementCheck {
            requirement,
            met: self.is_met(requirement),
        })
    }

    pub fn unmet(&self) -> Vec<Requirement> {
        Requirement::ALL
            .into_iter()
            .filter(|r| !self.is_met(*r))
            .collect()
    }
}

/// Shorthand for `PasswordRequirements::evaluate(password).is_strong()`.
pub fn is_strong(password: &str) -> bool {
    PasswordRequirements::evaluate(password).is_strong()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_password_fails_everything() {
        let report = PasswordRequirements::evaluate("");
        assert_eq!(report, PasswordRequirements::default());
        assert_eq!(report.unmet(), Requirement::ALL.to_vec());
    }

    #[test]
    fn short_mixed_password_fails_length_only() {
        let report = PasswordRequirements::evaluate("Ab1");
        assert!(!report.min_length);
        assert!(report.has_upper && report.has_lower && report.has_digit);
        assert_eq!(report.unmet(), vec![Requirement::MinLength]);
    }

    #[test]
    fn digits_only_fails_upper_and_lower() {
        let report = PasswordRequirements::evaluate("12345678");
        assert!(report.min_length && report.has_digit);
        assert_eq!(report.unmet(), vec![Requirement::Uppercase, Requirement::Lowercase]);
        assert!(!report.is_strong());
    }

    #[test]
    fn mixed_password_is_strong() {
        assert!(is_strong("Secret123"));
        assert!(!is_strong("secret123"));
        assert!(!is_strong("SECRET123"));
        assert!(!is_strong("SecretAbc"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 chars, 11 bytes.
        assert!(!PasswordRequirements::evaluate("Aé1çãõx").min_length);
        assert!(PasswordRequirements::evaluate("Aé1çãõxy").min_length);
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_cases() {
        let report = PasswordRequirements::evaluate("ÉÇÃ12345");
        assert!(!report.has_upper);
    }

    #[test]
    fn checklist_follows_display_order() {
        let checks = PasswordRequirements::evaluate("abc").checklist();
        let order: Vec<Requirement> = checks.iter().map(|c| c.requirement).collect();
        assert_eq!(order, Requirement::ALL.to_vec());
        assert!(checks[2].met);
        assert!(!checks[0].met);
        assert_eq!(checks[3].label(), "At least 1 number (0-9)");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: strength is exactly the conjunction of the four checks.
        #[test]
        fn strong_iff_all_checks_hold(password in "\\PC{0,16}") {
            let report = PasswordRequirements::evaluate(&password);

            let expected = password.chars().count() >= MIN_PASSWORD_LENGTH
                && password.chars().any(|c| c.is_ascii_uppercase())
                && password.chars().any(|c| c.is_ascii_lowercase())
                && password.chars().any(|c| c.is_ascii_digit());

            prop_assert_eq!(report.is_strong(), expected);
        }

        /// Property: appending characters never un-meets a requirement.
        #[test]
        fn checks_are_monotonic_under_append(prefix in "\\PC{0,12}", suffix in "\\PC{0,12}") {
            let before = PasswordRequirements::evaluate(&prefix);
            let after = PasswordRequirements::evaluate(&format!("{prefix}{suffix}"));

            for requirement in Requirement::ALL {
                prop_assert!(!before.is_met(requirement) || after.is_met(requirement));
            }
        }
    }
}
