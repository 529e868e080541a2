//! # The Contact Store
//!
//! This module is the single source of truth for the contact collection. The
//! [`ContactStore`] owns every record; all reads and writes pass through it.
//!
//! ## Design Rationale
//!
//! The store is deliberately dumb about presentation:
//! - Accessors return **owned copies**, never references into the collection,
//!   so no client can mutate store state from the outside
//! - Mutations push a full snapshot to the registered [`ChangeListener`], so
//!   UIs re-render from data the store hands them instead of polling
//! - No I/O of any kind happens here
//!
//! ## Change Notification
//!
//! Exactly one listener can be registered at a time; registering another
//! replaces it. The listener runs synchronously, after the mutation has taken
//! effect, with a snapshot equal to what [`ContactStore::contacts`] would
//! return at that moment. Failed operations never notify.
//!
//! ## Id Assignment
//!
//! The next id is one plus the highest id currently in the store, or 1 when
//! the store is empty. Deleting the highest-numbered contact frees its id,
//! and an emptied store starts over at 1.

use crate::error::{Result, RoloError};
use crate::model::{Contact, ContactDraft, ContactId};
use log::debug;

/// Receives the full contact list after every successful mutation.
///
/// Implemented for any `FnMut(Vec<Contact>)` closure, so clients can
/// subscribe a render function directly.
pub trait ChangeListener {
    fn contacts_changed(&mut self, contacts: Vec<Contact>);
}

impl<F: FnMut(Vec<Contact>)> ChangeListener for F {
    fn contacts_changed(&mut self, contacts: Vec<Contact>) {
        self(contacts)
    }
}

/// In-memory contact collection. Does NOT persist data.
#[derive(Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    listener: Option<Box<dyn ChangeListener>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the standard starter contacts.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.contacts.push(Contact {
            id: 1,
            full_name: "Arthur Dent".to_string(),
            email: "dent@example.com".to_string(),
            phone_number: "12345678901".to_string(),
            tags: vec!["work".to_string(), "business".to_string()],
        });
        store.contacts.push(Contact {
            id: 2,
            full_name: "George Smiley".to_string(),
            email: "smiley@example.com".to_string(),
            phone_number: "12345678901".to_string(),
            tags: Vec::new(),
        });
        debug!("store seeded: contacts={}", store.contacts.len());
        store
    }

    /// Register the listener, replacing any previous one.
    pub fn subscribe<L: ChangeListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    /// Add a contact, assigning it the next free id. Returns a copy of the
    /// stored record.
    pub fn add(&mut self, draft: ContactDraft) -> Contact {
        let contact = Contact::new(self.next_id(), draft);
        self.contacts.push(contact.clone());
        debug!("contact added: id={} total={}", contact.id, self.contacts.len());
        self.notify();
        contact
    }

    /// Replace every field of the contact with `id` (the id itself is kept).
    /// Returns a copy of the updated record.
    pub fn update(&mut self, id: ContactId, draft: ContactDraft) -> Result<Contact> {
        let pos = self.position(id)?;
        let contact = Contact::new(id, draft);
        self.contacts[pos] = contact.clone();
        debug!("contact updated: id={}", id);
        self.notify();
        Ok(contact)
    }

    /// Remove the contact with `id`, returning a copy of the removed record.
    pub fn delete(&mut self, id: ContactId) -> Result<Contact> {
        let pos = self.position(id)?;
        let removed = self.contacts.remove(pos);
        debug!("contact deleted: id={} total={}", id, self.contacts.len());
        self.notify();
        Ok(removed)
    }

    /// Copy of the contact with `id`.
    pub fn contact(&self, id: ContactId) -> Result<Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(RoloError::ContactNotFound(id))
    }

    /// Copies of all contacts, in insertion order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Copies of the contacts carrying every tag in `required`. An empty
    /// `required` matches everything; a contact without tags matches nothing
    /// else. Comparison is exact and case sensitive.
    pub fn contacts_with_tags<T: AsRef<str>>(&self, required: &[T]) -> Vec<Contact> {
        if required.is_empty() {
            return self.contacts();
        }
        self.contacts
            .iter()
            .filter(|contact| {
                required
                    .iter()
                    .all(|required_tag| {
                        contact.tags.iter().any(|tag| tag.as_str() == required_tag.as_ref())
                    })
            })
            .cloned()
            .collect()
    }

    /// Every tag of every contact, in contact-then-tag order. Duplicates are
    /// NOT removed; callers wanting a distinct vocabulary deduplicate.
    pub fn all_tags(&self) -> Vec<String> {
        self.contacts
            .iter()
            .flat_map(|contact| contact.tags.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    fn next_id(&self) -> ContactId {
        self.contacts
            .iter()
            .map(|contact| contact.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn position(&self, id: ContactId) -> Result<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.id == id)
            .ok_or(RoloError::ContactNotFound(id))
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.contacts_changed(self.contacts.clone());
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: ContactStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ContactStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: ContactStore::seeded(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = ContactDraft::new(
                    format!("Test Contact {}", i + 1),
                    format!("contact{}@example.com", i + 1),
                    format!("555-01{:02}", i + 1),
                );
                self.store.add(draft);
            }
            self
        }

        pub fn with_tagged_contact(mut self, full_name: &str, tags: &[&str]) -> Self {
            let draft = ContactDraft::new(
                full_name.to_string(),
                format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
                "555-0100".to_string(),
            )
            .with_tags(tags.iter().map(|t| t.to_string()).collect());
            self.store.add(draft);
            self
        }
    }
}
