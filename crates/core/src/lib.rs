pub mod config;
pub mod domain;
pub mod errors;
pub mod summary;

pub use domain::forms::{ContactForm, QuoteForm, StaffedQuoteForm, StaffingRole};
pub use domain::record::{FormKind, LeadRecord};
pub use errors::FormError;
pub use summary::format_role_summary;
