//! Contact service: validates and stores contact-form submissions.

use std::sync::Arc;

use crate::db::ContentStore;
use crate::error::AppResult;
use crate::forms::{ContactForm, FormErrors};
use crate::result_ext::ResultExt;

/// Notification shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you. We will be in touch soon.";

/// Outcome of a contact submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Stored with this ID.
    Accepted(i64),
    /// Nothing stored; the form must be shown again with these errors.
    Rejected(FormErrors),
}

/// Service for contact messages.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContentStore>,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Validate the form and store it if valid.
    ///
    /// Every valid submission creates a new row, including duplicates.
    pub async fn submit(&self, form: &ContactForm) -> AppResult<Submission> {
        let contact = match form.validate() {
            Ok(contact) => contact,
            Err(errors) => {
                tracing::debug!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Contact form rejected"
                );
                return Ok(Submission::Rejected(errors));
            }
        };

        let id = self
            .store
            .insert_contact(&contact)
            .await
            .log("storing contact message")?;

        tracing::info!(contact_id = id, "Contact message stored");
        Ok(Submission::Accepted(id))
    }
}
