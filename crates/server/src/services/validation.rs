//! Validation rules for admin payloads.
//!
//! Rules run before any store access. All three fields are checked and every
//! failure is reported, in the order name, email, password.

use serde::{Deserialize, Serialize};

use shop_admin_core::{AdminName, Email, Password};

/// Raw request body for create and update.
///
/// Every field is optional at the parsing stage; [`Mode`] decides which are
/// required. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPayload {
    pub admin_name: Option<String>,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

/// Whether fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All fields required.
    Create,
    /// All fields optional, validated when present.
    Update,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered list of rejected fields. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    /// A single violation about the request body as a whole.
    #[must_use]
    pub fn body(message: &'static str) -> Self {
        Self(vec![FieldViolation {
            field: "body",
            message,
        }])
    }

    /// Returns the violations in reporting order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Names of the rejected fields, in order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|v| v.field)
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validated fields. In [`Mode::Create`] all three are `Some`.
#[derive(Debug, Clone)]
pub struct ValidatedAdmin {
    pub name: Option<AdminName>,
    pub email: Option<Email>,
    pub password: Option<Password>,
}

/// Validated create input.
#[derive(Debug, Clone)]
pub struct CreateInput {
    pub name: AdminName,
    pub email: Email,
    pub password: Password,
}

/// Apply one field's rule.
fn check<T, E>(
    raw: Option<&str>,
    mode: Mode,
    field: &'static str,
    required: &'static str,
    invalid: &'static str,
    parse: impl FnOnce(&str) -> Result<T, E>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let Some(raw) = raw else {
        if mode == Mode::Create {
            violations.push(FieldViolation {
                field,
                message: required,
            });
        }
        return None;
    };

    match parse(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(FieldViolation {
                field,
                message: invalid,
            });
            None
        }
    }
}

/// Fields that passed their rules, plus every rule that failed.
struct Checked {
    name: Option<AdminName>,
    email: Option<Email>,
    password: Option<Password>,
    violations: Vec<FieldViolation>,
}

fn check_all(payload: &AdminPayload, mode: Mode) -> Checked {
    let mut violations = Vec::new();

    let name = check(
        payload.admin_name.as_deref(),
        mode,
        "adminName",
        "Admin name is required",
        "Name must be at least 2 characters",
        AdminName::parse,
        &mut violations,
    );
    let email = check(
        payload.admin_email.as_deref(),
        mode,
        "adminEmail",
        "Email is required",
        "Invalid email format",
        Email::parse,
        &mut violations,
    );
    let password = check(
        payload.admin_password.as_deref(),
        mode,
        "adminPassword",
        "Password is required",
        "Password must be at least 6 characters",
        Password::parse,
        &mut violations,
    );

    Checked {
        name,
        email,
        password,
        violations,
    }
}

/// Validate a payload.
///
/// # Errors
///
/// Returns every violated rule, in field order.
pub fn validate(payload: &AdminPayload, mode: Mode) -> Result<ValidatedAdmin, Violations> {
    let checked = check_all(payload, mode);

    if !checked.violations.is_empty() {
        return Err(Violations(checked.violations));
    }

    Ok(ValidatedAdmin {
        name: checked.name,
        email: checked.email,
        password: checked.password,
    })
}

/// Validate a create payload, where every field is required.
///
/// # Errors
///
/// Returns every violated rule, in field order.
pub fn validate_create(payload: &AdminPayload) -> Result<CreateInput, Violations> {
    match check_all(payload, Mode::Create) {
        Checked {
            name: Some(name),
            email: Some(email),
            password: Some(password),
            violations,
        } if violations.is_empty() => Ok(CreateInput {
            name,
            email,
            password,
        }),
        Checked { violations, .. } => Err(Violations(violations)),
    }
}

/// Validate an update payload, where every field is optional.
///
/// # Errors
///
/// Returns every violated rule among the fields present.
pub fn validate_update(payload: &AdminPayload) -> Result<ValidatedAdmin, Violations> {
    validate(payload, Mode::Update)
}
