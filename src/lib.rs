pub mod errors;
pub mod menu;
pub mod models;
pub mod schema;
pub mod service;
pub mod storage;
