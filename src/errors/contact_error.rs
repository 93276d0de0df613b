use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Phone number must be 7 to 11 digits")]
    InvalidPhone,
    #[error("Email address is not in a valid format")]
    InvalidEmail,
    #[error("QQ email addresses are not accepted, please provide another address")]
    QqEmail,
    #[error("No contact with id {0}")]
    NotFound(i32),
    #[error("The contact store rejected the operation")]
    Store,
}
