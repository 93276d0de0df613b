use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not open contact database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Could not create contacts table: {0}")]
    Schema(#[from] diesel::result::Error),
}
