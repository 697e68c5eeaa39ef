use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Standard quote request as submitted by the public quote form.
///
/// Field renames follow the wire names the web frontends send; numeric
/// fields use unsigned types so negative values are rejected at
/// deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "comuna")]
    pub district: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "rubro")]
    pub business_category: String,
    #[serde(rename = "comentarios")]
    pub comments: String,
    #[serde(rename = "costoTotal")]
    pub total_cost: u64,
}

/// One staffing role line inside an intelligent quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRole {
    #[serde(rename = "tipoTurno")]
    pub shift_type: String,
    #[serde(rename = "horario")]
    pub schedule: String,
    #[serde(rename = "puestos")]
    pub positions: u32,
    #[serde(rename = "diasSemana")]
    pub days_per_week: u32,
    #[serde(rename = "horasDia")]
    pub hours_per_day: u32,
    #[serde(rename = "sueldoLiquido")]
    pub net_salary: u64,
    #[serde(rename = "costoEstimado")]
    pub estimated_cost: u64,
}

/// Intelligent quote request: the standard quote fields plus an ordered
/// list of staffing roles (possibly empty).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffedQuoteForm {
    #[serde(flatten)]
    pub quote: QuoteForm,
    pub roles: Vec<StaffingRole>,
}

/// General contact request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "origen", default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl QuoteForm {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)
    }
}

impl StaffedQuoteForm {
    pub fn validate(&self) -> Result<(), FormError> {
        self.quote.validate()
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is the provider's problem, not ours.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let invalid = || FormError::InvalidEmail(email.to_string());

    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_email, ContactForm, QuoteForm, StaffedQuoteForm};
    use crate::errors::FormError;

    fn quote_form() -> QuoteForm {
        QuoteForm {
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@empresa.cl".to_string(),
            phone: "+56911112222".to_string(),
            company: "Acme Ltda".to_string(),
            address: "Av. Siempre Viva 123".to_string(),
            district: "Providencia".to_string(),
            city: "Santiago".to_string(),
            business_category: "retail".to_string(),
            comments: "necesito 2 guardias".to_string(),
            total_cost: 1_500_000,
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        for email in ["ana@x.com", "a.b+c@sub.dominio.cl", "x@y.co"] {
            validate_email(email).expect(email);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "ana", "@x.com", "ana@", "ana@nodot", "a b@x.com", "a@b@c.com", "ana@.com", "ana@x.com."] {
            let error = validate_email(email).expect_err(email);
            assert_eq!(error, FormError::InvalidEmail(email.to_string()));
        }
    }

    #[test]
    fn quote_form_deserializes_from_wire_names() {
        let form: QuoteForm = serde_json::from_value(serde_json::json!({
            "nombre": "Ana",
            "apellido": "Rojas",
            "email": "ana@empresa.cl",
            "telefono": "+56911112222",
            "empresa": "Acme Ltda",
            "direccion": "Av. Siempre Viva 123",
            "comuna": "Providencia",
            "ciudad": "Santiago",
            "rubro": "retail",
            "comentarios": "necesito 2 guardias",
            "costoTotal": 1_500_000,
        }))
        .expect("quote form should deserialize");

        assert_eq!(form, quote_form());
    }

    #[test]
    fn negative_total_cost_is_rejected_at_deserialization() {
        let mut body = serde_json::to_value(quote_form()).expect("serialize");
        body["costoTotal"] = serde_json::json!(-1);

        assert!(serde_json::from_value::<QuoteForm>(body).is_err());
    }

    #[test]
    fn staffed_quote_flattens_base_fields() {
        let mut body = serde_json::to_value(quote_form()).expect("serialize");
        body["roles"] = serde_json::json!([{
            "tipoTurno": "Día",
            "horario": "08:00-20:00",
            "puestos": 2,
            "diasSemana": 5,
            "horasDia": 12,
            "sueldoLiquido": 550_000,
            "costoEstimado": 1_200_000,
        }]);

        let form: StaffedQuoteForm =
            serde_json::from_value(body).expect("staffed form should deserialize");
        assert_eq!(form.quote, quote_form());
        assert_eq!(form.roles.len(), 1);
        assert_eq!(form.roles[0].positions, 2);
    }

    #[test]
    fn contact_origin_is_optional_and_omitted_when_absent() {
        let form: ContactForm = serde_json::from_value(serde_json::json!({
            "nombre": "Ana",
            "email": "ana@x.com",
            "telefono": "123",
            "mensaje": "hola",
        }))
        .expect("contact form should deserialize");

        assert_eq!(form.origin, None);
        let echoed = serde_json::to_value(&form).expect("serialize");
        assert!(echoed.get("origen").is_none());
    }

    #[test]
    fn validate_surfaces_invalid_email() {
        let mut form = quote_form();
        form.email = "not-an-email".to_string();

        assert!(matches!(form.validate(), Err(FormError::InvalidEmail(_))));
    }
}
