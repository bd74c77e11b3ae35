//! Country-aware phone validation, formatting, and the PhoneNumber value object.

use super::digits::{mask, strip_non_digits};
use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calling code for Brazil, the default everywhere a DDI is optional.
pub const BRAZIL_DDI: &str = "55";

/// Two area-code digits (1-9), an optional mobile `9`, then eight digits.
static BRAZIL_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]{2}9?\d{8}$").expect("valid phone regex"));

const INTERNATIONAL_MIN_DIGITS: usize = 8;
const INTERNATIONAL_MAX_DIGITS: usize = 15;

/// Check whether `input` is a plausible phone number for calling code `ddi`.
///
/// For Brazil (`"55"`) the national shape is enforced; for any other DDI only
/// the digit count (8 to 15) is checked.
///
/// ```
/// use cyberfit_pro::domain::validate_phone;
///
/// assert!(validate_phone("(85) 98831-8679", "55"));
/// assert!(!validate_phone("123", "55"));
/// assert!(validate_phone("415 555 1234", "1"));
/// ```
pub fn validate_phone(input: &str, ddi: &str) -> bool {
    let digits = strip_non_digits(input);

    if ddi == BRAZIL_DDI {
        return BRAZIL_PHONE.is_match(&digits);
    }

    (INTERNATIONAL_MIN_DIGITS..=INTERNATIONAL_MAX_DIGITS).contains(&digits.len())
}

/// Format a phone number for display.
///
/// Brazilian numbers become `(AA) BBBBB-CCCC` (11 digits) or `(AA) BBBB-CCCC`
/// (10 digits); other Brazilian lengths come back as bare digits. Other DDIs
/// are rendered as `+{ddi} {digits}`.
pub fn format_phone(input: &str, ddi: &str) -> String {
    let digits = strip_non_digits(input);

    if ddi != BRAZIL_DDI {
        return format!("+{} {}", ddi, digits);
    }

    match digits.len() {
        11 => mask(&digits, &[(0, "("), (2, ") "), (7, "-")]),
        10 => mask(&digits, &[(0, "("), (2, ") "), (6, "-")]),
        _ => digits,
    }
}

/// A validated phone number paired with its calling code.
///
/// # Example
///
/// ```
/// use cyberfit_pro::domain::PhoneNumber;
///
/// let phone = PhoneNumber::brazilian("(85) 98831-8679").unwrap();
/// assert_eq!(phone.digits(), "85988318679");
/// assert_eq!(phone.formatted(), "(85) 98831-8679");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPhone")]
pub struct PhoneNumber {
    ddi: String,
    digits: String,
}

/// Unchecked shape used to route deserialization through `PhoneNumber::new`.
#[derive(Deserialize)]
struct RawPhone {
    #[serde(default = "default_ddi")]
    ddi: String,
    digits: String,
}

fn default_ddi() -> String {
    BRAZIL_DDI.to_string()
}

impl TryFrom<RawPhone> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(raw: RawPhone) -> Result<Self, Self::Error> {
        PhoneNumber::new(raw.digits, raw.ddi)
    }
}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating it against the rules for `ddi`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not valid for `ddi`.
    pub fn new(phone: impl AsRef<str>, ddi: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let ddi = ddi.into();

        if !validate_phone(raw, &ddi) {
            return Err(ValidationError::InvalidPhone {
                ddi,
                phone: raw.to_string(),
            });
        }

        Ok(Self {
            ddi,
            digits: strip_non_digits(raw),
        })
    }

    /// Shorthand for a number under [`BRAZIL_DDI`].
    pub fn brazilian(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new(phone, BRAZIL_DDI)
    }

    pub fn ddi(&self) -> &str {
        &self.ddi
    }

    /// The number with only digits (no formatting, no calling code).
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn formatted(&self) -> String {
        format_phone(&self.digits, &self.ddi)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
