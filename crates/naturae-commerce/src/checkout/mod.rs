//! Checkout module.
//!
//! Orders are finalized by email rather than a payment gateway: these types
//! compose the subject/body text and the percent-encoded `mailto:` URL handed
//! to the external mail collaborator. Fire-and-forget; no result channel.

mod contact;
mod mail;
mod order;

pub use contact::{compose_contact, ContactForm};
pub use mail::{MailDraft, StoreInfo};
pub use order::compose_order;
