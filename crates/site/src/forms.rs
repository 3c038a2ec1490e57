//! Contact form parsing and validation.

use std::collections::BTreeMap;
use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::db::models::NewContact;

pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 254;

const REQUIRED: &str = "This field is required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Domains accepted without a dot or TLD.
const EMAIL_DOMAIN_ALLOWLIST: &[&str] = &["localhost"];

static EMAIL_USER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?:[-!#$%&'*+/=?^_`{}|~0-9A-Z]+(?:\.[-!#$%&'*+/=?^_`{}|~0-9A-Z]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f!#-\[\]-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")$"#,
    )
    .unwrap()
});

// TLD may contain hyphens (punycode) but not end with one.
static EMAIL_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z0-9-]{1,62}[A-Z0-9]$").unwrap()
});

static EMAIL_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\[([A-F0-9:.]+)\]$").unwrap());

fn is_valid_email_domain(domain: &str) -> bool {
    if EMAIL_DOMAIN_ALLOWLIST
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(domain))
    {
        return true;
    }
    if EMAIL_DOMAIN_RE.is_match(domain) {
        return true;
    }
    EMAIL_LITERAL_RE
        .captures(domain)
        .and_then(|caps| caps.get(1))
        .is_some_and(|ip| ip.as_str().parse::<IpAddr>().is_ok())
}

/// Email check: a dot-atom or quoted local part, then a hostname, an
/// allowlisted name, or a bracketed IP literal.
pub fn is_valid_email(email: &str) -> bool {
    let Some((user, domain)) = email.rsplit_once('@') else {
        return false;
    };
    EMAIL_USER_RE.is_match(user) && is_valid_email_domain(domain)
}

/// Raw contact form as posted by the browser.
///
/// Missing fields deserialize to empty strings so they surface as
/// "required" errors rather than a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub message: String,
}

/// Field name to error messages. Serialized as a map for templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the fields that failed, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn check_max_length(errors: &mut FormErrors, field: &str, value: &str, max: usize) {
    let length = value.chars().count();
    if length > max {
        errors.add(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, length
            ),
        );
    }
}

impl ContactForm {
    /// Validate and normalize the submission.
    ///
    /// Values are trimmed; on success the cleaned values are returned,
    /// otherwise every failing field is reported.
    pub fn validate(&self) -> Result<NewContact, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.add("name", REQUIRED);
        } else {
            check_max_length(&mut errors, "name", name, NAME_MAX_LENGTH);
        }

        if email.is_empty() {
            errors.add("email", REQUIRED);
        } else if email.chars().count() > EMAIL_MAX_LENGTH {
            check_max_length(&mut errors, "email", email, EMAIL_MAX_LENGTH);
        } else if !is_valid_email(email) {
            errors.add("email", INVALID_EMAIL);
        }

        if message.is_empty() {
            errors.add("message", REQUIRED);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewContact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}
