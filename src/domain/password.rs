//! Password policy shared by sign-up, password reset, and invite completion.

use super::errors::PasswordIssue;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Check `password` against the policy, reporting the first rule it breaks.
///
/// Rules, in order: length >= 8 characters, an uppercase letter, a lowercase
/// letter, and a digit (all ASCII).
pub fn validate_password(password: &str) -> Result<(), PasswordIssue> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordIssue::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordIssue::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::MissingDigit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strong_password() {
        assert_eq!(validate_password("Treino2024"), Ok(()));
    }

    #[test]
    fn test_reports_first_failure() {
        assert_eq!(validate_password("Ab1"), Err(PasswordIssue::TooShort));
        assert_eq!(
            validate_password("treino2024"),
            Err(PasswordIssue::MissingUppercase)
        );
        assert_eq!(
            validate_password("TREINO2024"),
            Err(PasswordIssue::MissingLowercase)
        );
        assert_eq!(
            validate_password("TreinoForte"),
            Err(PasswordIssue::MissingDigit)
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Seven characters, one of them multi-byte.
        assert_eq!(validate_password("Açaí12x"), Err(PasswordIssue::TooShort));
    }
}
