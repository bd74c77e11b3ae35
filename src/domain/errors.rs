//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided CPF fails length, repetition, or check-digit rules.
    InvalidCpf(String),

    /// The provided CNPJ fails length, repetition, or check-digit rules.
    InvalidCnpj(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid for its calling code.
    InvalidPhone { ddi: String, phone: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCpf(cpf) => write!(f, "Invalid CPF: {}", cpf),
            Self::InvalidCnpj(cnpj) => write!(f, "Invalid CNPJ: {}", cnpj),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone { ddi, phone } => {
                write!(f, "Invalid phone number for +{}: {}", ddi, phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reasons a password is rejected by the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    /// Fewer than the minimum number of characters.
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
}

impl fmt::Display for PasswordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Password must be at least 8 characters long"),
            Self::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            Self::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Self::MissingDigit => write!(f, "Password must contain at least one number"),
        }
    }
}

impl std::error::Error for PasswordIssue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidCpf("123".to_string());
        assert_eq!(err.to_string(), "Invalid CPF: 123");

        let err = ValidationError::InvalidPhone {
            ddi: "55".to_string(),
            phone: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid phone number for +55: 123");
    }

    #[test]
    fn test_password_issue_display() {
        assert!(PasswordIssue::TooShort.to_string().contains("8 characters"));
        assert!(PasswordIssue::MissingDigit.to_string().contains("number"));
    }
}
