use contact_book::menu;
use contact_book::service::ContactService;
use contact_book::storage::ContactStore;
use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| String::from("contacts.db"));

    let store = match ContactStore::open(&database_url) {
        Ok(store) => store,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    info!("Contact database ready at {database_url}");

    let service = ContactService::new(store);
    menu::run(&service);

    ExitCode::SUCCESS
}
