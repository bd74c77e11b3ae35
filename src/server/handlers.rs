//! Request handlers for the validation line service.
//!
//! Each request is one JSON object tagged by `"op"`; each response is one JSON
//! object tagged by `"status"`. Handling is synchronous and never fails: bad
//! input is reported in the response body.

use crate::config::Config;
use crate::domain::{
    countries, format_cnpj, format_cpf, format_phone, validate_cnpj, validate_cpf,
    validate_email, validate_password, validate_phone, Registration, RegistrationForm,
};
use crate::error::{FieldError, ServiceError};
use crate::observability::ValidationMetrics;
use crate::rate_limit::{Clock, SubmissionLimiter, SystemClock};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// A request line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ValidateCpf {
        value: String,
    },
    ValidateCnpj {
        value: String,
    },
    FormatCpf {
        value: String,
    },
    FormatCnpj {
        value: String,
    },
    ValidatePhone {
        value: String,
        #[serde(default)]
        ddi: Option<String>,
    },
    FormatPhone {
        value: String,
        #[serde(default)]
        ddi: Option<String>,
    },
    ValidateEmail {
        value: String,
    },
    ValidatePassword {
        value: String,
    },
    Register {
        form: RegistrationForm,
    },
    /// A gym invites an instructor by email; limited per gym.
    InviteInstructor {
        gym_email: String,
        email: String,
    },
    Countries,
}

impl Request {
    /// Wire name of the operation, used in logs and metrics.
    pub fn op(&self) -> &'static str {
        match self {
            Self::ValidateCpf { .. } => "validate_cpf",
            Self::ValidateCnpj { .. } => "validate_cnpj",
            Self::FormatCpf { .. } => "format_cpf",
            Self::FormatCnpj { .. } => "format_cnpj",
            Self::ValidatePhone { .. } => "validate_phone",
            Self::FormatPhone { .. } => "format_phone",
            Self::ValidateEmail { .. } => "validate_email",
            Self::ValidatePassword { .. } => "validate_password",
            Self::Register { .. } => "register",
            Self::InviteInstructor { .. } => "invite_instructor",
            Self::Countries => "countries",
        }
    }
}

/// A response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok {
        result: Value,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<FieldError>,
        #[serde(skip_serializing_if = "Option::is_none")]
        retry_after_secs: Option<u64>,
    },
}

impl Response {
    pub fn ok(result: Value) -> Self {
        Self::Ok { result }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            fields: Vec::new(),
            retry_after_secs: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Validation service shared by every connection.
#[derive(Clone)]
pub struct ValidationService {
    default_ddi: String,
    clock: Arc<dyn Clock>,
    invite_limiter: SubmissionLimiter<String>,
    metrics: ValidationMetrics,
}

impl ValidationService {
    /// Build a service from `config`, reading time from `clock`.
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            default_ddi: config.default_ddi.clone(),
            invite_limiter: SubmissionLimiter::new(config.invite_cooldown(), clock.clone()),
            clock,
            metrics: ValidationMetrics::new(),
        }
    }

    /// Build a service on the system clock.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn metrics(&self) -> &ValidationMetrics {
        &self.metrics
    }

    /// Decode and handle one raw request line.
    ///
    /// Bytes that are not UTF-8 get an error response, like malformed JSON.
    pub fn handle_bytes(&self, line: &[u8]) -> String {
        match std::str::from_utf8(line) {
            Ok(line) => self.handle_line(line),
            Err(e) => {
                self.metrics.track_malformed();
                encode_response(&Response::error(ServiceError::InvalidEncoding(e).to_string()))
            }
        }
    }

    /// Parse and handle one request line, returning the encoded response.
    pub fn handle_line(&self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                self.metrics.track_malformed();
                Response::error(ServiceError::MalformedRequest(e).to_string())
            }
        };

        encode_response(&response)
    }

    /// Handle one parsed request.
    pub fn handle(&self, request: Request) -> Response {
        let op = request.op();

        let response = match request {
            Request::ValidateCpf { value } => validity(validate_cpf(&value)),
            Request::ValidateCnpj { value } => validity(validate_cnpj(&value)),
            Request::FormatCpf { value } => formatted(format_cpf(&value)),
            Request::FormatCnpj { value } => formatted(format_cnpj(&value)),
            Request::ValidatePhone { value, ddi } => {
                let ddi = ddi.unwrap_or_else(|| self.default_ddi.clone());
                validity(validate_phone(&value, &ddi))
            }
            Request::FormatPhone { value, ddi } => {
                let ddi = ddi.unwrap_or_else(|| self.default_ddi.clone());
                formatted(format_phone(&value, &ddi))
            }
            Request::ValidateEmail { value } => validity(validate_email(&value)),
            Request::ValidatePassword { value } => match validate_password(&value) {
                Ok(()) => Response::ok(json!({ "valid": true })),
                Err(issue) => Response::ok(json!({ "valid": false, "issue": issue.to_string() })),
            },
            Request::Register { form } => self.register(form),
            Request::InviteInstructor { gym_email, email } => {
                self.invite_instructor(gym_email, email)
            }
            Request::Countries => encode(countries()),
        };

        self.metrics.track_request(op, accepted(&response));
        response
    }

    fn register(&self, mut form: RegistrationForm) -> Response {
        if form.ddi.is_none() {
            form.ddi = Some(self.default_ddi.clone());
        }

        match Registration::from_form(form, self.clock.today()) {
            Ok(registration) => {
                tracing::debug!(
                    profile_type = registration.table_name(),
                    "Registration accepted"
                );
                match encode(&registration) {
                    Response::Ok {
                        result: Value::Object(mut map),
                    } => {
                        map.insert("table".to_string(), json!(registration.table_name()));
                        Response::ok(Value::Object(map))
                    }
                    other => other,
                }
            }
            Err(e) => Response::Error {
                message: e.to_string(),
                fields: e.fields().to_vec(),
                retry_after_secs: None,
            },
        }
    }

    /// Cooldown first, then the email; only valid invites start a new cooldown.
    fn invite_instructor(&self, gym_email: String, email: String) -> Response {
        if let Err(limited) = self.invite_limiter.check(&gym_email) {
            let secs = limited.retry_after_secs();
            self.metrics.track_rate_limited("invite_instructor", secs);
            return Response::Error {
                message: limited.to_string(),
                fields: Vec::new(),
                retry_after_secs: Some(secs),
            };
        }

        if !validate_email(&email) {
            return Response::Error {
                message: "Invalid email".to_string(),
                fields: vec![FieldError::new("email", "Invalid email")],
                retry_after_secs: None,
            };
        }

        if let Err(limited) = self.invite_limiter.try_acquire(gym_email.clone()) {
            let secs = limited.retry_after_secs();
            self.metrics.track_rate_limited("invite_instructor", secs);
            return Response::Error {
                message: limited.to_string(),
                fields: Vec::new(),
                retry_after_secs: Some(secs),
            };
        }

        tracing::debug!(gym = %gym_email, "Instructor invite accepted");
        Response::ok(json!({ "gym_email": gym_email, "email": email, "status": "pendente" }))
    }
}

fn validity(valid: bool) -> Response {
    Response::ok(json!({ "valid": valid }))
}

fn formatted(value: String) -> Response {
    Response::ok(json!({ "formatted": value }))
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Response {
    match serde_json::to_value(value) {
        Ok(result) => Response::ok(result),
        Err(e) => Response::error(format!("Failed to encode result: {}", e)),
    }
}

fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to encode response");
        r#"{"status":"error","message":"Failed to encode response"}"#.to_string()
    })
}

/// Whether a response accepted its input, for rejection counting.
fn accepted(response: &Response) -> bool {
    match response {
        Response::Ok { result } => result.get("valid").and_then(Value::as_bool).unwrap_or(true),
        Response::Error { .. } => false,
    }
}
