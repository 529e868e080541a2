use colored::Colorize;
use rolo::model::Contact;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH_MAX: usize = 32;

pub(super) fn print_success(content: &str) {
    println!("{}", content.green());
}

pub(super) fn print_error(content: &str) {
    println!("{}", content.red());
}

pub(super) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts.");
        return;
    }

    let id_width = contacts
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = contacts
        .iter()
        .map(|c| c.full_name.width().min(NAME_WIDTH_MAX))
        .max()
        .unwrap_or(0);
    let email_width = contacts.iter().map(|c| c.email.width()).max().unwrap_or(0);

    for contact in contacts {
        let name = truncate_to_width(&contact.full_name, NAME_WIDTH_MAX);
        let name_padding = " ".repeat(name_width.saturating_sub(name.width()));
        let email_padding = " ".repeat(email_width.saturating_sub(contact.email.width()));

        let tags = if contact.tags.is_empty() {
            String::new()
        } else {
            format!("  {}", contact.tags.join(", "))
        };

        println!(
            "  {:>width$}. {}{}  {}{}  {}{}",
            contact.id,
            name,
            name_padding,
            contact.email,
            email_padding,
            contact.phone_number,
            tags.dimmed(),
            width = id_width
        );
    }
}

pub(super) fn print_contact(contact: &Contact) {
    println!(
        "{} {}",
        format!("{}.", contact.id).yellow(),
        contact.full_name.bold()
    );
    println!("--------------------------------");
    println!("Email: {}", contact.email);
    println!("Phone: {}", contact.phone_number);
    if !contact.tags.is_empty() {
        println!("Tags:  {}", contact.tags.join(", "));
    }
}

pub(super) fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("No tags.");
        return;
    }
    println!("{}", tags.join(", "));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
