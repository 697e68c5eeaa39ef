//! Notion integration - forwards validated lead records to a Notion
//! database via the page-creation API.
//!
//! - **Payload** (`payload`) - typed page-create body matching the lead
//!   database's property schema
//! - **Transport** (`transport`) - outbound HTTP seam (reqwest in
//!   production, doubles in tests)
//! - **Forwarder** (`forwarder`) - precondition checks, role-summary
//!   resolution, and outcome normalization into the `notion` receipt
//!
//! One best-effort page-create call per submission; there are no retries
//! and no idempotency key, and the receipt reports failures in-band.

pub mod forwarder;
pub mod payload;
pub mod transport;

pub use forwarder::{ForwardError, ForwardReceipt, NotionForwarder, CONFIRMATION_MESSAGE};
pub use payload::{build_page_payload, PagePayload, RICH_TEXT_LIMIT};
pub use transport::{
    HttpPageTransport, PageTransport, ProviderResponse, TransportError, NOTION_API_URL,
    NOTION_VERSION,
};
