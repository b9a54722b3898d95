//! Contact form mail composition.

use crate::checkout::{MailDraft, StoreInfo};
use serde::{Deserialize, Serialize};

/// Contact page fields. Required-field validation is a presentation concern;
/// the composition below accepts whatever it is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Compose the contact mail: a plain dump of the form fields.
pub fn compose_contact(form: &ContactForm, store: &StoreInfo) -> MailDraft {
    let subject = if form.subject.trim().is_empty() {
        "Demande de renseignement"
    } else {
        form.subject.trim()
    };

    let body = format!(
        "De: {first} {last}\nEmail: {email}\nTéléphone: {phone}\n\nMessage:\n{message}",
        first = form.first_name,
        last = form.last_name,
        email = form.email,
        phone = form.phone,
        message = form.message
    );

    MailDraft::new(store.email.clone(), format!("Contact: {subject}"), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreInfo {
        StoreInfo::new("Espace Naturaē", "info@espacenaturae.ca")
    }

    #[test]
    fn test_compose_contact() {
        let form = ContactForm {
            first_name: "Marie".to_string(),
            last_name: "Tremblay".to_string(),
            email: "marie@example.com".to_string(),
            phone: "450-555-0199".to_string(),
            subject: "Question sur le baume".to_string(),
            message: "Convient-il aux peaux sensibles ?".to_string(),
        };

        let draft = compose_contact(&form, &store());
        assert_eq!(draft.subject, "Contact: Question sur le baume");
        assert!(draft.body.starts_with("De: Marie Tremblay"));
        assert!(draft.body.contains("Téléphone: 450-555-0199"));
        assert!(draft.body.ends_with("Message:\nConvient-il aux peaux sensibles ?"));
    }

    #[test]
    fn test_blank_subject_gets_default() {
        let form = ContactForm {
            subject: "   ".to_string(),
            ..ContactForm::default()
        };
        let draft = compose_contact(&form, &store());
        assert_eq!(draft.subject, "Contact: Demande de renseignement");
    }
}
