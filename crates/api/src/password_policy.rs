// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! Enforces password requirements for staff credentials.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password matches the account email.
    #[error("Password must not match the account email")]
    MatchesEmail,

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a new password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `email` - The account email (password must not match it)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet
    /// policy requirements.
    pub fn validate(&self, password: &str, email: &str) -> Result<(), PasswordPolicyError> {
        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        if password.to_lowercase() == email.to_lowercase() {
            return Err(PasswordPolicyError::MatchesEmail);
        }

        Ok(())
    }

    /// Validates a new password plus its confirmation.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the confirmation does not
    /// match or the password does not meet policy requirements.
    pub fn validate_with_confirmation(
        &self,
        password: &str,
        confirmation: &str,
        email: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }
        self.validate(password, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate("short", "desk@example.com"),
            Err(PasswordPolicyError::TooShort { min_length: 8 })
        );
    }

    #[test]
    fn test_password_matching_email_rejected() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate("Desk@Example.com", "desk@example.com"),
            Err(PasswordPolicyError::MatchesEmail)
        );
    }

    #[test]
    fn test_confirmation_mismatch_rejected() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate_with_confirmation(
                "a long password",
                "a different password",
                "desk@example.com"
            ),
            Err(PasswordPolicyError::ConfirmationMismatch)
        );
    }

    #[test]
    fn test_valid_password_accepted() {
        let policy = PasswordPolicy::default();
        assert!(
            policy
                .validate_with_confirmation(
                    "a long password",
                    "a long password",
                    "desk@example.com"
                )
                .is_ok()
        );
    }
}
