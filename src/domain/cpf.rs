//! CPF (Cadastro de Pessoas Físicas) validation, formatting, and value object.

use super::digits::{all_same, check_digit, mask, strip_non_digits, to_values};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CPF_LEN: usize = 11;

/// Check whether `input` holds a valid CPF.
///
/// Non-digit characters are ignored, so both `"111.444.777-35"` and
/// `"11144477735"` are accepted. Never panics.
///
/// # Example
///
/// ```
/// use cyberfit_pro::domain::validate_cpf;
///
/// assert!(validate_cpf("111.444.777-35"));
/// assert!(!validate_cpf("111.444.777-36"));
/// assert!(!validate_cpf("11111111111"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    let digits = strip_non_digits(input);
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }

    let values = to_values(&digits);

    let first = check_digit(&values[..9], (2..=10).rev());
    if first != values[9] {
        return false;
    }

    let second = check_digit(&values[..10], (2..=11).rev());
    second == values[10]
}

/// Mask a CPF as `XXX.XXX.XXX-XX`.
///
/// Input with any length other than 11 digits is returned as bare digits.
pub fn format_cpf(input: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.len() != CPF_LEN {
        return digits;
    }
    mask(&digits, &[(3, "."), (6, "."), (9, "-")])
}

/// A validated CPF, stored as its 11 digits.
///
/// # Example
///
/// ```
/// use cyberfit_pro::domain::Cpf;
///
/// let cpf = Cpf::new("111.444.777-35").unwrap();
/// assert_eq!(cpf.as_str(), "11144477735");
/// assert_eq!(cpf.formatted(), "111.444.777-35");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Create a new Cpf from free-form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCpf` if the number fails validation.
    pub fn new(cpf: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = cpf.as_ref();
        if !validate_cpf(raw) {
            return Err(ValidationError::InvalidCpf(raw.to_string()));
        }
        Ok(Self(strip_non_digits(raw)))
    }

    /// The 11 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }

    /// Convert into the underlying digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
