//! Domain validators and value objects.
//!
//! The free functions (`validate_cpf`, `format_phone`, ...) are pure and total:
//! they return `bool` or a best-effort `String` and never panic. The value
//! objects (`Cpf`, `Cnpj`, `PhoneNumber`, `EmailAddress`) run the same checks at
//! construction time so invalid data cannot be represented past the form layer.

pub mod cnpj;
pub mod country;
pub mod cpf;
pub mod digits;
pub mod email;
pub mod errors;
pub mod password;
pub mod phone;
pub mod registration;

pub use cnpj::{format_cnpj, validate_cnpj, Cnpj};
pub use country::{countries, find_by_ddi, Country, COUNTRIES};
pub use cpf::{format_cpf, validate_cpf, Cpf};
pub use digits::strip_non_digits;
pub use email::{validate_email, EmailAddress};
pub use errors::{PasswordIssue, ValidationError};
pub use password::validate_password;
pub use phone::{format_phone, validate_phone, PhoneNumber, BRAZIL_DDI};
pub use registration::{Account, ProfileType, Registration, RegistrationForm};
