use std::sync::Arc;

use chrono::Utc;
use leadrelay_core::config::NotionConfig;
use leadrelay_core::{format_role_summary, FormKind, LeadRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::payload::{build_page_payload, role_summary_property, PagePayload};
use crate::transport::{HttpPageTransport, PageTransport, ProviderResponse, TransportError};

pub const CONFIRMATION_MESSAGE: &str = "Datos enviados correctamente a Notion";

/// Everything that can go wrong inside a forward attempt. Transport and
/// response-parse failures are distinct variants, but the wire receipt
/// collapses them: only provider-returned errors carry a status code.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("notion credentials are not configured")]
    MissingCredentials,
    #[error("lead record carries no contact identity")]
    EmptySubmission,
    #[error("notion rejected the page: status {status}")]
    Provider { status: u16, body: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("notion response body was not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// The `notion` field of every submission response. Field names are
/// wire-stable; the frontends already consume this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardReceipt {
    pub error: bool,
    pub mensaje: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notion_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ForwardReceipt {
    fn success(notion_id: String) -> Self {
        Self {
            error: false,
            mensaje: CONFIRMATION_MESSAGE.to_string(),
            notion_id: Some(notion_id),
            status_code: None,
            response: None,
        }
    }
}

impl From<ForwardError> for ForwardReceipt {
    fn from(error: ForwardError) -> Self {
        let (mensaje, status_code, response) = match error {
            ForwardError::MissingCredentials => (
                "Configuración incompleta: falta la credencial o la base de datos de Notion"
                    .to_string(),
                None,
                None,
            ),
            ForwardError::EmptySubmission => ("Datos de formulario inválidos".to_string(), None, None),
            ForwardError::Provider { status, body } => (
                format!("Error al enviar datos a Notion: Status {status} - {body}"),
                Some(status),
                Some(body),
            ),
            error @ (ForwardError::Transport(_) | ForwardError::InvalidResponse(_)) => {
                (format!("Error al procesar solicitud: {error}"), None, None)
            }
        };

        Self { error: true, mensaje, notion_id: None, status_code, response }
    }
}

/// Forwards lead records to the configured Notion database. Holds the
/// configuration it was constructed with; nothing is read from ambient
/// state mid-request.
pub struct NotionForwarder {
    config: NotionConfig,
    transport: Arc<dyn PageTransport>,
}

impl NotionForwarder {
    pub fn new(config: NotionConfig, transport: Arc<dyn PageTransport>) -> Self {
        Self { config, transport }
    }

    /// Production wiring: reqwest transport honoring the configured
    /// timeout and base URL override.
    pub fn from_config(config: NotionConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpPageTransport::new(config.timeout_secs, config.base_url.as_deref())?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// One best-effort forward. Always yields a receipt; failures are
    /// normalized, never raised.
    pub async fn forward(&self, record: &LeadRecord) -> ForwardReceipt {
        match self.try_forward(record).await {
            Ok(notion_id) => ForwardReceipt::success(notion_id),
            Err(error) => ForwardReceipt::from(error),
        }
    }

    async fn try_forward(&self, record: &LeadRecord) -> Result<String, ForwardError> {
        let (Some(credential), Some(database_id)) =
            (self.config.api_key.as_ref(), self.config.database_id.as_deref())
        else {
            return Err(ForwardError::MissingCredentials);
        };

        if !record.has_contact_identity() {
            return Err(ForwardError::EmptySubmission);
        }

        let role_summary = resolve_role_summary(record);
        let payload = build_payload(record, role_summary.as_deref(), database_id);

        let response = self.transport.create_page(credential, &payload).await?;
        interpret_response(response)
    }
}

fn build_payload(record: &LeadRecord, role_summary: Option<&str>, database_id: &str) -> PagePayload {
    let mut payload = build_page_payload(record, role_summary, database_id, Utc::now());

    if let Some(summary) = role_summary {
        match role_summary_property(summary) {
            Some(property) => payload.properties.role_summary = Some(property),
            None => warn!(
                form_kind = %record.kind,
                "role summary property could not be attached, forwarding without it"
            ),
        }
    }

    payload
}

/// Precomputed summary first; a non-empty role list is the fallback
/// source. Empty summaries count as absent.
fn resolve_role_summary(record: &LeadRecord) -> Option<String> {
    if record.kind != FormKind::StaffedQuote {
        return None;
    }

    if let Some(summary) = record.role_summary.as_deref().filter(|summary| !summary.is_empty()) {
        info!(
            form_kind = %record.kind,
            chars = summary.chars().count(),
            "using precomputed role summary"
        );
        return Some(summary.to_string());
    }

    if record.roles.is_empty() {
        return None;
    }

    let summary = format_role_summary(&record.roles);
    info!(
        form_kind = %record.kind,
        chars = summary.chars().count(),
        "computed role summary from role list"
    );
    Some(summary)
}

fn interpret_response(response: ProviderResponse) -> Result<String, ForwardError> {
    match response.status {
        // Notion documents 200 but has returned 201 for creations.
        200 | 201 => {
            let body: Value = serde_json::from_str(&response.body)?;
            Ok(body.get("id").and_then(Value::as_str).unwrap_or_default().to_string())
        }
        status => Err(ForwardError::Provider { status, body: response.body }),
    }
}
