use crate::errors::contact_error::ContactError;
use crate::models::contact::{Contact, NewContact};
use crate::storage::ContactStore;
use log::trace;
use regex::Regex;

/// Three-way update intent for an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch {
    Keep,
    Clear,
    Set(String),
}

/// Changes to apply to a stored contact. `None` keeps the current
/// name/phone; `blacklisted` is always overwritten.
#[derive(Debug, Clone)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: FieldPatch,
    pub address: FieldPatch,
    pub blacklisted: bool,
}

pub struct ContactService {
    store: ContactStore,
    phone_format: Regex,
    email_format: Regex,
}

impl ContactService {
    pub fn new(store: ContactStore) -> Self {
        ContactService {
            store,
            phone_format: Regex::new(r"^\d{7,11}$").unwrap(),
            email_format: Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap(),
        }
    }

    /// Validates and stores a new contact. Blank email/address are stored
    /// as absent.
    pub fn add_contact(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        blacklisted: bool,
    ) -> Result<(), ContactError> {
        if name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }

        self.check_phone(phone)?;

        let email = normalize(email);
        if let Some(email) = email {
            self.check_email(email)?;
        }

        let record = NewContact {
            name,
            phone,
            email,
            address: normalize(address),
            blacklisted,
        };

        match self.store.insert(&record) {
            Some(new_id) => {
                trace!("contact {new_id} created");
                Ok(())
            }
            None => Err(ContactError::Store),
        }
    }

    /// Applies `patch` to the contact with `id` and rewrites the full row.
    /// A supplied name or phone is re-validated and fails the whole update
    /// when invalid.
    pub fn update_contact(&self, id: i32, patch: ContactPatch) -> Result<(), ContactError> {
        let Some(mut contact) = self.store.get(id) else {
            return Err(ContactError::NotFound(id));
        };

        if let Some(new_name) = patch.name {
            if new_name.trim().is_empty() {
                return Err(ContactError::EmptyName);
            }
            contact.name = new_name;
        }

        if let Some(new_phone) = patch.phone {
            self.check_phone(&new_phone)?;
            contact.phone = new_phone;
        }

        match patch.email {
            FieldPatch::Keep => {}
            FieldPatch::Clear => contact.email = None,
            FieldPatch::Set(value) => match normalize(&value) {
                Some(value) => {
                    self.check_email(value)?;
                    contact.email = Some(value.to_string());
                }
                None => contact.email = None,
            },
        }

        match patch.address {
            FieldPatch::Keep => {}
            FieldPatch::Clear => contact.address = None,
            FieldPatch::Set(value) => contact.address = normalize(&value).map(str::to_string),
        }

        contact.blacklisted = patch.blacklisted;

        if self.store.update(&contact) {
            Ok(())
        } else {
            Err(ContactError::Store)
        }
    }

    /// Deletes by id; a missing id reports not-found rather than failing
    /// fatally.
    pub fn delete_contact(&self, id: i32) -> Result<(), ContactError> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(ContactError::NotFound(id))
        }
    }

    pub fn get_contact(&self, id: i32) -> Option<Contact> {
        self.store.get(id)
    }

    /// Every stored contact, ordered by name ascending.
    pub fn all_contacts(&self) -> Vec<Contact> {
        let mut all = self.store.all();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Contacts whose name or phone contains `keyword`, ordered by name
    /// ascending. An empty keyword matches everything.
    pub fn search_contacts(&self, keyword: &str) -> Vec<Contact> {
        let mut results = self.store.search(keyword);
        results.sort_by(|a, b| a.name.cmp(&b.name));
        results
    }

    /// Marks the contact as blacklisted, leaving every other field as is.
    pub fn add_to_blacklist(&self, id: i32) -> Result<(), ContactError> {
        let Some(mut contact) = self.store.get(id) else {
            return Err(ContactError::NotFound(id));
        };

        contact.blacklisted = true;

        if self.store.update(&contact) {
            Ok(())
        } else {
            Err(ContactError::Store)
        }
    }

    /// First contact matching both fields exactly, if any.
    pub fn find_by_name_and_phone(&self, name: &str, phone: &str) -> Option<Contact> {
        self.all_contacts()
            .into_iter()
            .find(|contact| contact.name == name && contact.phone == phone)
    }

    fn check_phone(&self, phone: &str) -> Result<(), ContactError> {
        if self.phone_format.is_match(phone) {
            Ok(())
        } else {
            Err(ContactError::InvalidPhone)
        }
    }

    fn check_email(&self, email: &str) -> Result<(), ContactError> {
        if !self.email_format.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        let lowered = email.to_lowercase();
        if lowered.ends_with("@qq.com") || lowered.ends_with("@qq.cn") {
            return Err(ContactError::QqEmail);
        }

        Ok(())
    }
}

fn normalize(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}
