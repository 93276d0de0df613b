use crate::schema::contacts;
use diesel::prelude::*;
use std::fmt;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub blacklisted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = contacts)]
pub struct NewContact<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub blacklisted: bool,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, phone: {}, email: {}, address: {}{}",
            self.id,
            self.name,
            self.phone,
            self.email.as_deref().unwrap_or("-"),
            self.address.as_deref().unwrap_or("-"),
            if self.blacklisted { " [blacklisted]" } else { "" }
        )
    }
}
