use crate::errors::store_error::StoreError;
use crate::models::contact::{Contact, NewContact};
use crate::schema::contacts::dsl::{address, blacklisted, contacts, email, id, name, phone};
use diesel::prelude::*;
use log::error;

mod sql;

/// Durable storage for contact rows. Every operation opens its own
/// connection and releases it on return; store-level faults are logged and
/// degrade to `false`/`None`/empty rather than propagating.
pub struct ContactStore {
    database_url: String,
}

impl ContactStore {
    /// Opens the store, creating the contacts table when missing.
    pub fn open(database_url: &str) -> Result<Self, StoreError> {
        let mut connection = SqliteConnection::establish(database_url)?;
        diesel::sql_query(sql::CREATE_CONTACTS_TABLE).execute(&mut connection)?;

        Ok(ContactStore {
            database_url: database_url.to_string(),
        })
    }

    fn connect(&self) -> Option<SqliteConnection> {
        match SqliteConnection::establish(&self.database_url) {
            Ok(connection) => Some(connection),
            Err(error) => {
                error!("Could not open contact database: {error}");
                None
            }
        }
    }

    /// Inserts a new row and returns the id the store assigned to it.
    pub fn insert(&self, contact: &NewContact) -> Option<i32> {
        let mut connection = self.connect()?;

        match diesel::insert_into(contacts)
            .values(contact)
            .returning(id)
            .get_result::<i32>(&mut connection)
        {
            Ok(new_id) => Some(new_id),
            Err(error) => {
                error!("Could not insert contact: {error}");
                None
            }
        }
    }

    /// Overwrites the full row matching `contact.id`, reporting whether it
    /// existed.
    pub fn update(&self, contact: &Contact) -> bool {
        let Some(mut connection) = self.connect() else {
            return false;
        };

        match diesel::update(contacts.find(contact.id))
            .set((
                name.eq(&contact.name),
                phone.eq(&contact.phone),
                email.eq(contact.email.as_deref()),
                address.eq(contact.address.as_deref()),
                blacklisted.eq(contact.blacklisted),
            ))
            .execute(&mut connection)
        {
            Ok(affected) => affected > 0,
            Err(error) => {
                error!("Could not update contact {}: {error}", contact.id);
                false
            }
        }
    }

    /// Deletes the row with `contact_id`, reporting whether it existed.
    pub fn delete(&self, contact_id: i32) -> bool {
        let Some(mut connection) = self.connect() else {
            return false;
        };

        match diesel::delete(contacts.find(contact_id)).execute(&mut connection) {
            Ok(affected) => affected > 0,
            Err(error) => {
                error!("Could not delete contact {contact_id}: {error}");
                false
            }
        }
    }

    pub fn get(&self, contact_id: i32) -> Option<Contact> {
        let mut connection = self.connect()?;

        match contacts
            .find(contact_id)
            .select(Contact::as_select())
            .first(&mut connection)
            .optional()
        {
            Ok(contact) => contact,
            Err(error) => {
                error!("Could not read contact {contact_id}: {error}");
                None
            }
        }
    }

    pub fn all(&self) -> Vec<Contact> {
        let Some(mut connection) = self.connect() else {
            return Vec::new();
        };

        match contacts.select(Contact::as_select()).load(&mut connection) {
            Ok(rows) => rows,
            Err(error) => {
                error!("Could not read contacts: {error}");
                Vec::new()
            }
        }
    }

    /// Rows whose name or phone contains `keyword`. Matching is SQLite
    /// `LIKE` under default collation, so it is ASCII case-insensitive.
    pub fn search(&self, keyword: &str) -> Vec<Contact> {
        let Some(mut connection) = self.connect() else {
            return Vec::new();
        };

        let pattern = format!("%{keyword}%");

        match contacts
            .filter(name.like(&pattern).or(phone.like(&pattern)))
            .select(Contact::as_select())
            .load(&mut connection)
        {
            Ok(rows) => rows,
            Err(error) => {
                error!("Could not search contacts: {error}");
                Vec::new()
            }
        }
    }
}
