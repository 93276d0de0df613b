use crate::service::{ContactPatch, ContactService, FieldPatch};
use std::io::{self, Write};

/// Runs the line menu until the operator quits or stdin closes.
pub fn run(service: &ContactService) {
    println!("Contact book");

    loop {
        print_menu();

        let Some(line) = read_line() else {
            break;
        };

        match line.trim().parse::<u32>() {
            Ok(1) => add_contact(service),
            Ok(2) => delete_contact(service),
            Ok(3) => update_contact(service),
            Ok(4) => get_contact(service),
            Ok(5) => list_contacts(service),
            Ok(6) => search_contacts(service),
            Ok(0) => {
                println!("Bye!");
                break;
            }
            _ => println!("No such option, please choose again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("===== Contact book =====");
    println!("1. Add contact");
    println!("2. Delete contact");
    println!("3. Update contact");
    println!("4. Look up contact by id");
    println!("5. List all contacts");
    println!("6. Search contacts by name or phone");
    println!("0. Quit");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

fn add_contact(service: &ContactService) {
    let Some(name) = prompt("Name: ") else { return };
    let Some(phone) = prompt("Phone: ") else { return };
    let Some(email) = prompt("Email: ") else { return };
    let Some(address) = prompt("Address: ") else {
        return;
    };
    let blacklisted = prompt_yes_no("Blacklist this contact? (y/n): ");

    match service.add_contact(&name, &phone, &email, &address, blacklisted) {
        Ok(()) => println!("Contact added."),
        Err(error) => println!("Could not add contact: {error}"),
    }
}

fn delete_contact(service: &ContactService) {
    let Some(id) = prompt_id("Id of the contact to delete: ") else {
        return;
    };

    match service.delete_contact(id) {
        Ok(()) => println!("Contact deleted."),
        Err(error) => println!("Could not delete contact: {error}"),
    }
}

fn update_contact(service: &ContactService) {
    let Some(id) = prompt_id("Id of the contact to update: ") else {
        return;
    };

    let Some(current) = service.get_contact(id) else {
        println!("No contact with id {id}");
        return;
    };

    println!("Enter new values, or leave blank to keep the current one.");

    let name = prompt(&format!("Name (current: {}): ", current.name));
    let phone = prompt(&format!("Phone (current: {}): ", current.phone));
    let email = prompt(&format!(
        "Email (current: {}): ",
        current.email.as_deref().unwrap_or("-")
    ));
    let address = prompt(&format!(
        "Address (current: {}): ",
        current.address.as_deref().unwrap_or("-")
    ));
    let blacklisted = prompt_yes_no("Blacklist this contact? (y/n): ");

    let patch = ContactPatch {
        name: name.filter(|value| !value.trim().is_empty()),
        phone: phone.filter(|value| !value.trim().is_empty()),
        email: to_field_patch(email),
        address: to_field_patch(address),
        blacklisted,
    };

    match service.update_contact(id, patch) {
        Ok(()) => println!("Contact updated."),
        Err(error) => println!("Could not update contact: {error}"),
    }
}

fn get_contact(service: &ContactService) {
    let Some(id) = prompt_id("Id of the contact to look up: ") else {
        return;
    };

    match service.get_contact(id) {
        Some(contact) => println!("{contact}"),
        None => println!("No contact found."),
    }
}

fn list_contacts(service: &ContactService) {
    let all = service.all_contacts();

    if all.is_empty() {
        println!("No contacts stored.");
        return;
    }

    for contact in all {
        println!("{contact}");
    }
}

fn search_contacts(service: &ContactService) {
    let Some(keyword) = prompt("Keyword (name or phone): ") else {
        return;
    };

    let results = service.search_contacts(&keyword);

    if results.is_empty() {
        println!("No matching contacts.");
        return;
    }

    for contact in results {
        println!("{contact}");
    }
}

// Blank input keeps the current value; clearing a field is only reachable
// through the service API.
fn to_field_patch(input: Option<String>) -> FieldPatch {
    match input {
        Some(value) if !value.trim().is_empty() => FieldPatch::Set(value),
        _ => FieldPatch::Keep,
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    read_line()
}

fn prompt_id(label: &str) -> Option<i32> {
    let line = prompt(label)?;

    match line.trim().parse::<i32>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("Please enter a valid numeric id.");
            None
        }
    }
}

fn prompt_yes_no(label: &str) -> bool {
    match prompt(label) {
        Some(answer) => {
            let answer = answer.trim();
            answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
        }
        None => false,
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();

    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
