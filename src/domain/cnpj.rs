//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and formatting.

use super::digits::{all_same, check_digit, cyclic_weights, mask, strip_non_digits, to_values};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CNPJ_LEN: usize = 14;

/// Check whether `input` holds a valid CNPJ.
///
/// Weights cycle 5..2 then 9..2 for the first check digit, and 6..2 then 9..2
/// for the second.
///
/// ```
/// use cyberfit_pro::domain::validate_cnpj;
///
/// assert!(validate_cnpj("11.222.333/0001-81"));
/// assert!(!validate_cnpj("11.222.333/0001-82"));
/// ```
pub fn validate_cnpj(input: &str) -> bool {
    let digits = strip_non_digits(input);
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }

    let values = to_values(&digits);

    let first = check_digit(&values[..12], cyclic_weights(5));
    if first != values[12] {
        return false;
    }

    let second = check_digit(&values[..13], cyclic_weights(6));
    second == values[13]
}

/// Mask a CNPJ as `XX.XXX.XXX/XXXX-XX`; other lengths pass through as digits.
pub fn format_cnpj(input: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.len() != CNPJ_LEN {
        return digits;
    }
    mask(&digits, &[(2, "."), (5, "."), (8, "/"), (12, "-")])
}

/// A validated CNPJ, stored as its 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Create a new Cnpj from free-form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCnpj` if the number fails validation.
    pub fn new(cnpj: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = cnpj.as_ref();
        if !validate_cnpj(raw) {
            return Err(ValidationError::InvalidCnpj(raw.to_string()));
        }
        Ok(Self(strip_non_digits(raw)))
    }

    /// The 14 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }

    /// Convert into the underlying digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cnpj::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
