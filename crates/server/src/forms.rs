//! Public form-intake endpoints.
//!
//! - `POST /api/formulario/cotizacion`              — standard quote
//! - `POST /api/formulario/cotizacion-inteligente`  — quote with staffing roles
//! - `POST /api/formulario/contacto`                — general contact
//!
//! Every endpoint validates, forwards the record to Notion, and answers
//! HTTP 200 with an envelope echoing the submission. Forwarding problems
//! travel inside the envelope's `notion` field; validation failures are
//! the only client-facing errors.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use leadrelay_core::errors::FormError;
use leadrelay_core::{format_role_summary, ContactForm, FormKind, QuoteForm, StaffedQuoteForm};
use leadrelay_notion::{ForwardReceipt, NotionForwarder};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct FormsState {
    forwarder: Arc<NotionForwarder>,
}

/// Response envelope shared by the three endpoints. `resumen_roles` only
/// appears on intelligent-quote responses.
#[derive(Debug, Serialize)]
pub struct SubmissionEnvelope<T> {
    pub status: &'static str,
    pub formulario: &'static str,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumen_roles: Option<String>,
    pub notion: ForwardReceipt,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(forwarder: Arc<NotionForwarder>) -> Router {
    Router::new()
        .route("/api/formulario/cotizacion", post(submit_quote))
        .route("/api/formulario/cotizacion-inteligente", post(submit_staffed_quote))
        .route("/api/formulario/contacto", post(submit_contact))
        .with_state(FormsState { forwarder })
}

async fn submit_quote(
    State(state): State<FormsState>,
    Json(form): Json<QuoteForm>,
) -> Result<Json<SubmissionEnvelope<QuoteForm>>, (StatusCode, Json<ApiError>)> {
    let correlation_id = new_correlation_id();
    form.validate()
        .map_err(|error| reject(&correlation_id, FormKind::Quote, &form.email, error))?;

    info!(
        event_name = "form.received",
        correlation_id = %correlation_id,
        form_kind = %FormKind::Quote,
        email = %form.email,
        "quote form received"
    );

    let receipt = state.forwarder.forward(&form.to_record()).await;
    log_forward_outcome(&correlation_id, FormKind::Quote, &form.email, &receipt);

    Ok(Json(SubmissionEnvelope {
        status: "ok",
        formulario: FormKind::Quote.as_str(),
        data: form,
        resumen_roles: None,
        notion: receipt,
    }))
}

async fn submit_staffed_quote(
    State(state): State<FormsState>,
    Json(form): Json<StaffedQuoteForm>,
) -> Result<Json<SubmissionEnvelope<StaffedQuoteForm>>, (StatusCode, Json<ApiError>)> {
    let correlation_id = new_correlation_id();
    form.validate()
        .map_err(|error| reject(&correlation_id, FormKind::StaffedQuote, &form.quote.email, error))?;

    // The summary is computed here so the caller sees exactly the text
    // that lands in Notion; the forwarder's own fallback stays unused.
    let role_summary = format_role_summary(&form.roles);

    info!(
        event_name = "form.received",
        correlation_id = %correlation_id,
        form_kind = %FormKind::StaffedQuote,
        email = %form.quote.email,
        roles = form.roles.len(),
        "intelligent quote form received"
    );

    let mut record = form.to_record();
    record.role_summary = Some(role_summary.clone());

    let receipt = state.forwarder.forward(&record).await;
    log_forward_outcome(&correlation_id, FormKind::StaffedQuote, &form.quote.email, &receipt);

    Ok(Json(SubmissionEnvelope {
        status: "ok",
        formulario: FormKind::StaffedQuote.as_str(),
        data: form,
        resumen_roles: Some(role_summary),
        notion: receipt,
    }))
}

async fn submit_contact(
    State(state): State<FormsState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmissionEnvelope<ContactForm>>, (StatusCode, Json<ApiError>)> {
    let correlation_id = new_correlation_id();
    form.validate()
        .map_err(|error| reject(&correlation_id, FormKind::Contact, &form.email, error))?;

    info!(
        event_name = "form.received",
        correlation_id = %correlation_id,
        form_kind = %FormKind::Contact,
        email = %form.email,
        "contact form received"
    );

    let receipt = state.forwarder.forward(&form.to_record()).await;
    log_forward_outcome(&correlation_id, FormKind::Contact, &form.email, &receipt);

    Ok(Json(SubmissionEnvelope {
        status: "ok",
        formulario: FormKind::Contact.as_str(),
        data: form,
        resumen_roles: None,
        notion: receipt,
    }))
}

fn new_correlation_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn reject(
    correlation_id: &str,
    form_kind: FormKind,
    email: &str,
    error: FormError,
) -> (StatusCode, Json<ApiError>) {
    warn!(
        event_name = "form.rejected",
        correlation_id = %correlation_id,
        form_kind = %form_kind,
        email = %email,
        error = %error,
        "form validation failed"
    );

    (StatusCode::BAD_REQUEST, Json(ApiError { error: error.to_string() }))
}

fn log_forward_outcome(
    correlation_id: &str,
    form_kind: FormKind,
    email: &str,
    receipt: &ForwardReceipt,
) {
    if receipt.error {
        error!(
            event_name = "form.forward_failed",
            correlation_id = %correlation_id,
            form_kind = %form_kind,
            email = %email,
            status_code = ?receipt.status_code,
            mensaje = %receipt.mensaje,
            "forwarding to notion failed"
        );
    } else {
        info!(
            event_name = "form.forwarded",
            correlation_id = %correlation_id,
            form_kind = %form_kind,
            email = %email,
            notion_id = ?receipt.notion_id,
            "form forwarded to notion"
        );
    }
}
