#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const COMMON_EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn next(&self) -> ContactField {
        let fields = ContactField::iter().collect::<Vec<ContactField>>();
        let idx = fields.iter().position(|e| e == self).unwrap_or(0);
        return fields[(idx + 1) % fields.len()];
    }

    pub fn previous(&self) -> ContactField {
        let fields = ContactField::iter().collect::<Vec<ContactField>>();
        let idx = fields.iter().position(|e| e == self).unwrap_or(0);
        return fields[(idx + fields.len() - 1) % fields.len()];
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Subject => self.subject.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
    }

    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Subject => self.subject = None,
            ContactField::Message => self.message = None,
        }
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    if !EMAIL_PATTERN.is_match(email) {
        return Some("Please enter a valid email address".to_string());
    }

    None
}

/// Suggests a common provider when the domain looks like a typo of one.
pub fn suggest_email(email: &str) -> Option<String> {
    if validate_email(email).is_some() {
        return None;
    }

    let mut parts = email.split('@');
    let local = parts.next()?;
    let domain = parts.next()?;

    COMMON_EMAIL_DOMAINS
        .iter()
        .find(|candidate| {
            candidate.len() > 3
                && domain.len() > 3
                && (candidate.contains(domain) || domain.contains(*candidate))
                && **candidate != domain
        })
        .map(|candidate| format!("Did you mean {local}@{candidate}?"))
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }

        errors.email = validate_email(&self.email);

        if self.subject.trim().is_empty() {
            errors.subject = Some("Subject is required".to_string());
        }

        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.message = Some(format!(
                "Message must be at least {MIN_MESSAGE_CHARS} characters long"
            ));
        }

        if errors.is_empty() {
            return Ok(());
        }

        return Err(errors);
    }
}
