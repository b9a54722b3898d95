//! Mail draft and `mailto:` URL composition.

use serde::{Deserialize, Serialize};

/// Store identity used in composed mail: display name and order inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreInfo {
    /// Store display name (e.g. "Espace Naturaē").
    pub name: String,
    /// Address order and contact mail is sent to.
    pub email: String,
}

impl StoreInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A composed mail, ready for hand-off to the external mail collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MailDraft {
    /// Recipient address.
    pub to: String,
    /// Subject line, unencoded.
    pub subject: String,
    /// Body text, unencoded.
    pub body: String,
}

impl MailDraft {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// The `mailto:` URL with subject and body percent-encoded for safe
    /// transport.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_url_encodes_subject_and_body() {
        let draft = MailDraft::new(
            "info@espacenaturae.ca",
            "Nouvelle commande - Espace Naturaē",
            "Bonjour,\n\nTotal : 18$ & merci ?",
        );
        let url = draft.mailto_url();

        assert!(url.starts_with("mailto:info@espacenaturae.ca?subject="));
        // No raw separators or whitespace may survive in the components.
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(query.matches('&').count(), 1); // only the subject/body separator
        assert_eq!(query.matches('?').count(), 0);
        assert!(query.contains("%20"));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn test_mailto_url_encodes_accents() {
        let draft = MailDraft::new("a@b.c", "é", "ā");
        let url = draft.mailto_url();
        assert!(url.contains("subject=%C3%A9"));
        assert!(url.contains("body=%C4%81"));
    }
}
