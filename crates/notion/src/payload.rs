use chrono::{DateTime, Utc};
use leadrelay_core::LeadRecord;
use serde::Serialize;

/// Notion caps rich_text content at 2000 characters per fragment; longer
/// text is cut rather than split across fragments.
pub const RICH_TEXT_LIMIT: usize = 2000;

pub const ROLE_SUMMARY_DELIMITER: &str = "--- RESUMEN DE ROLES ---";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextFragment {
    pub text: TextContent,
}

impl TextFragment {
    pub fn new(content: impl Into<String>) -> Self {
        Self { text: TextContent { content: content.into() } }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TextFragment>,
}

impl TitleProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self { title: vec![TextFragment::new(content)] }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<TextFragment>,
}

impl RichTextProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self { rich_text: vec![TextFragment::new(content)] }
    }

    pub fn content(&self) -> &str {
        self.rich_text.first().map(|fragment| fragment.text.content.as_str()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailProperty {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhoneProperty {
    pub phone_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectProperty {
    pub select: SelectOption,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateValue {
    pub start: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumberProperty {
    pub number: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageParent {
    pub database_id: String,
}

/// Property names mirror the lead database's columns verbatim; renaming a
/// column in Notion breaks the mapping, not the code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageProperties {
    #[serde(rename = "Nombre")]
    pub name: TitleProperty,
    #[serde(rename = "Email")]
    pub email: EmailProperty,
    #[serde(rename = "Teléfono")]
    pub phone: PhoneProperty,
    #[serde(rename = "Tipo de Formulario")]
    pub form_kind: SelectProperty,
    #[serde(rename = "Fecha")]
    pub submitted_at: DateProperty,
    #[serde(rename = "Mensaje", skip_serializing_if = "Option::is_none")]
    pub message: Option<RichTextProperty>,
    #[serde(rename = "Costo Total", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<NumberProperty>,
    #[serde(rename = "Empresa", skip_serializing_if = "Option::is_none")]
    pub company: Option<RichTextProperty>,
    #[serde(rename = "Resumen de Roles", skip_serializing_if = "Option::is_none")]
    pub role_summary: Option<RichTextProperty>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PagePayload {
    pub parent: PageParent,
    pub properties: PageProperties,
}

/// Build the page-create body for one lead record.
///
/// The role summary is folded into the message body here; the separate
/// `Resumen de Roles` property is attached by the forwarder afterwards so
/// an attachment problem can be logged and skipped without touching the
/// rest of the payload.
pub fn build_page_payload(
    record: &LeadRecord,
    role_summary: Option<&str>,
    database_id: &str,
    submitted_at: DateTime<Utc>,
) -> PagePayload {
    let message = combined_message(&record.message, role_summary);

    PagePayload {
        parent: PageParent { database_id: database_id.to_string() },
        properties: PageProperties {
            name: TitleProperty::new(record.display_name.clone()),
            email: EmailProperty { email: record.email.clone() },
            phone: PhoneProperty { phone_number: record.phone.clone() },
            form_kind: SelectProperty {
                select: SelectOption { name: record.kind.as_str().to_string() },
            },
            submitted_at: DateProperty { date: DateValue { start: submitted_at.to_rfc3339() } },
            message: (!message.is_empty())
                .then(|| RichTextProperty::new(truncate_chars(&message, RICH_TEXT_LIMIT))),
            total_cost: (record.total_cost > 0)
                .then(|| NumberProperty { number: record.total_cost }),
            company: record.company.clone().map(RichTextProperty::new),
            role_summary: None,
        },
    }
}

/// Message body with the role summary appended under its delimiter; a
/// blank line separates it from any preexisting message.
pub fn combined_message(message: &str, role_summary: Option<&str>) -> String {
    match role_summary.filter(|summary| !summary.is_empty()) {
        Some(summary) if message.is_empty() => format!("{ROLE_SUMMARY_DELIMITER}\n{summary}"),
        Some(summary) => format!("{message}\n\n{ROLE_SUMMARY_DELIMITER}\n{summary}"),
        None => message.to_string(),
    }
}

/// The standalone summary property, independently truncated. `None` when
/// the truncated text comes out empty, which is the one way the optional
/// property can fail to attach.
pub fn role_summary_property(role_summary: &str) -> Option<RichTextProperty> {
    let truncated = truncate_chars(role_summary, RICH_TEXT_LIMIT);
    (!truncated.is_empty()).then(|| RichTextProperty::new(truncated))
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
