use serde::{Deserialize, Serialize};

pub type ContactId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    // Empty means "no tags"; the comma-joined form exists only at the UI boundary
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Contact {
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            email: draft.email,
            phone_number: draft.phone_number,
            tags: draft.tags,
        }
    }
}

/// A contact before the store has assigned it an id.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: Vec<String>,
}

impl ContactDraft {
    pub fn new(full_name: String, email: String, phone_number: String) -> Self {
        Self {
            full_name,
            email,
            phone_number,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_tags_field_when_empty() {
        let contact = Contact::new(
            1,
            ContactDraft::new("Ada".into(), "ada@example.com".into(), "555".into()),
        );
        let json = serde_json::to_string(&contact).unwrap();
        assert!(!json.contains("tags"));
    }

    #[test]
    fn deserializes_missing_tags_as_empty() {
        let json = r#"{"id":2,"full_name":"Ada","email":"ada@example.com","phone_number":"555"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.tags.is_empty());
    }

    #[test]
    fn draft_builder_sets_tags() {
        let draft = ContactDraft::new("Ada".into(), "ada@example.com".into(), "555".into())
            .with_tags(vec!["work".into()]);
        assert_eq!(draft.tags, vec!["work".to_string()]);
    }
}
