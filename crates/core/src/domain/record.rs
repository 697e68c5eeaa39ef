use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::forms::{ContactForm, QuoteForm, StaffedQuoteForm, StaffingRole};

/// The three submission kinds accepted by the intake endpoints. The wire
/// tags are what the frontends and the provider database already use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Quote,
    StaffedQuote,
    Contact,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "cotizacion",
            Self::StaffedQuote => "cotizacion-inteligente",
            Self::Contact => "contacto",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical representation of one submission, resolved from whichever
/// form it arrived on. The forwarder consumes this instead of reaching
/// into per-form field names.
///
/// `company` is `Some` whenever the submission carried a company field,
/// even with an empty value; the provider payload mirrors that
/// distinction. `role_summary` holds a precomputed summary when the
/// handler produced one; `roles` stays available as the fallback source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadRecord {
    pub kind: FormKind,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub total_cost: u64,
    pub company: Option<String>,
    pub role_summary: Option<String>,
    pub roles: Vec<StaffingRole>,
}

impl LeadRecord {
    /// A record with no name, email, or phone identifies nobody and is
    /// refused before any provider call.
    pub fn has_contact_identity(&self) -> bool {
        !self.display_name.trim().is_empty()
            || !self.email.trim().is_empty()
            || !self.phone.trim().is_empty()
    }
}

/// First and last name joined with a single space, either side possibly
/// empty. The provider's title column has always held this exact shape.
fn display_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

impl QuoteForm {
    pub fn to_record(&self) -> LeadRecord {
        LeadRecord {
            kind: FormKind::Quote,
            display_name: display_name(&self.first_name, &self.last_name),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.comments.clone(),
            total_cost: self.total_cost,
            company: Some(self.company.clone()),
            role_summary: None,
            roles: Vec::new(),
        }
    }
}

impl StaffedQuoteForm {
    pub fn to_record(&self) -> LeadRecord {
        LeadRecord {
            kind: FormKind::StaffedQuote,
            roles: self.roles.clone(),
            ..self.quote.to_record()
        }
    }
}

impl ContactForm {
    pub fn to_record(&self) -> LeadRecord {
        LeadRecord {
            kind: FormKind::Contact,
            display_name: display_name(&self.name, ""),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            total_cost: 0,
            company: None,
            role_summary: None,
            roles: Vec::new(),
        }
    }
}
