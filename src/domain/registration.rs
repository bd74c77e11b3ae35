//! Typed registrations, one variant per profile type.
//!
//! Forms arrive loosely typed ([`RegistrationForm`], every profile-specific field
//! optional). [`Registration::from_form`] checks the fields that the selected
//! profile requires and produces a variant that carries exactly those fields.

use super::cnpj::Cnpj;
use super::cpf::Cpf;
use super::email::EmailAddress;
use super::password::validate_password;
use super::phone::{PhoneNumber, BRAZIL_DDI};
use crate::error::{FieldError, RegistrationError, RegistrationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dashboard a user registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    #[serde(rename = "aluno")]
    Student,
    #[serde(rename = "instrutor")]
    Instructor,
    #[serde(rename = "academia")]
    Gym,
}

impl ProfileType {
    /// Backend table that stores profiles of this type.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Student => "alunos",
            Self::Instructor => "instrutores",
            Self::Gym => "academias",
        }
    }
}

/// Raw registration input as submitted by a sign-up form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub profile_type: Option<ProfileType>,
    pub email: String,
    pub full_name: String,
    #[serde(alias = "telefone")]
    pub phone: String,
    pub ddi: Option<String>,
    pub password: String,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub cref: Option<String>,
    pub address: Option<String>,
    /// Invite token from the instructor (students) or gym (instructors)
    pub token: Option<String>,
}

/// Fields every profile shares.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub email: EmailAddress,
    pub full_name: String,
    pub phone: PhoneNumber,
    /// Handed to the auth provider, never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "profile_type")]
pub enum Registration {
    #[serde(rename = "aluno")]
    Student {
        #[serde(flatten)]
        account: Account,
        cpf: Cpf,
        birth_date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        instructor_token: Option<String>,
    },
    #[serde(rename = "instrutor")]
    Instructor {
        #[serde(flatten)]
        account: Account,
        cpf: Cpf,
        cref: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        gym_token: Option<String>,
    },
    #[serde(rename = "academia")]
    Gym {
        #[serde(flatten)]
        account: Account,
        cnpj: Cnpj,
        address: String,
    },
}

impl Registration {
    /// Validate `form` against the rules of its profile type.
    ///
    /// `today` bounds the birth date. All failing fields are reported together.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::InvalidFields` listing every rejected field.
    pub fn from_form(form: RegistrationForm, today: NaiveDate) -> RegistrationResult<Self> {
        let mut errors = Vec::new();

        let Some(profile_type) = form.profile_type else {
            return Err(RegistrationError::InvalidFields(vec![FieldError::new(
                "profile_type",
                "Profile type is required",
            )]));
        };

        let email = capture(&mut errors, "email", EmailAddress::new(form.email));
        let full_name = capture(&mut errors, "full_name", check_full_name(&form.full_name));
        let ddi = form.ddi.unwrap_or_else(|| BRAZIL_DDI.to_string());
        let phone = capture(&mut errors, "phone", PhoneNumber::new(&form.phone, ddi));
        let password = capture(&mut errors, "password", validate_password(&form.password));

        let account = match (email, full_name, phone, password) {
            (Some(email), Some(full_name), Some(phone), Some(())) => Some(Account {
                email,
                full_name,
                phone,
                password: form.password,
            }),
            _ => None,
        };

        let token = non_blank(form.token.as_deref());

        let registration = match profile_type {
            ProfileType::Student => {
                let cpf = capture(&mut errors, "cpf", required_cpf(form.cpf.as_deref()));
                let birth_date = capture(
                    &mut errors,
                    "birth_date",
                    check_birth_date(form.birth_date.as_deref(), today),
                );
                match (account, cpf, birth_date) {
                    (Some(account), Some(cpf), Some(birth_date)) => Some(Registration::Student {
                        account,
                        cpf,
                        birth_date,
                        instructor_token: token,
                    }),
                    _ => None,
                }
            }
            ProfileType::Instructor => {
                let cpf = capture(&mut errors, "cpf", required_cpf(form.cpf.as_deref()));
                let cref = capture(
                    &mut errors,
                    "cref",
                    required_text(form.cref.as_deref(), "CREF is required"),
                );
                match (account, cpf, cref) {
                    (Some(account), Some(cpf), Some(cref)) => Some(Registration::Instructor {
                        account,
                        cpf,
                        cref: cref.to_uppercase(),
                        gym_token: token,
                    }),
                    _ => None,
                }
            }
            ProfileType::Gym => {
                let cnpj = capture(&mut errors, "cnpj", required_cnpj(form.cnpj.as_deref()));
                let address = capture(
                    &mut errors,
                    "address",
                    required_text(form.address.as_deref(), "Address is required"),
                );
                match (account, cnpj, address) {
                    (Some(account), Some(cnpj), Some(address)) => Some(Registration::Gym {
                        account,
                        cnpj,
                        address,
                    }),
                    _ => None,
                }
            }
        };

        match registration {
            Some(registration) if errors.is_empty() => Ok(registration),
            _ => Err(RegistrationError::InvalidFields(errors)),
        }
    }

    pub fn profile_type(&self) -> ProfileType {
        match self {
            Self::Student { .. } => ProfileType::Student,
            Self::Instructor { .. } => ProfileType::Instructor,
            Self::Gym { .. } => ProfileType::Gym,
        }
    }

    pub fn account(&self) -> &Account {
        match self {
            Self::Student { account, .. }
            | Self::Instructor { account, .. }
            | Self::Gym { account, .. } => account,
        }
    }

    pub fn table_name(&self) -> &'static str {
        self.profile_type().table_name()
    }
}

fn capture<T, E: fmt::Display>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    result: Result<T, E>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(FieldError::new(field, e.to_string()));
            None
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_text(value: Option<&str>, message: &'static str) -> Result<String, &'static str> {
    non_blank(value).ok_or(message)
}

fn check_full_name(name: &str) -> Result<String, &'static str> {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return Err("Enter first and last name");
    }
    Ok(words.join(" "))
}

fn required_cpf(value: Option<&str>) -> Result<Cpf, String> {
    let value = non_blank(value).ok_or_else(|| "CPF is required".to_string())?;
    Cpf::new(value).map_err(|e| e.to_string())
}

fn required_cnpj(value: Option<&str>) -> Result<Cnpj, String> {
    let value = non_blank(value).ok_or_else(|| "CNPJ is required".to_string())?;
    Cnpj::new(value).map_err(|e| e.to_string())
}

fn check_birth_date(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate, String> {
    let value = non_blank(value).ok_or_else(|| "Birth date is required".to_string())?;
    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|_| format!("Birth date must be YYYY-MM-DD, got: {}", value))?;
    if date > today {
        return Err("Birth date cannot be in the future".to_string());
    }
    Ok(date)
}
