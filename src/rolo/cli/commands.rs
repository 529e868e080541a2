//! # CLI Layer
//!
//! This module is **one possible UI client** for rolo—it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles command parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Command Parsing**: Convert session input lines into typed commands via clap
//! 2. **Context Setup**: Build the store and subscribe the roster renderer to it
//! 3. **Dispatch**: Call the appropriate `ContactStore` operation
//! 4. **Output Formatting**: Render contacts and feedback (colors, columns)
//!
//! ## Structure
//!
//! - `run()`: Entry point (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` and wires the change notification
//! - `run_session()`: The read-parse-dispatch loop
//! - `handle_*()`: Per-command handlers that call the store and format output

use super::print;
use super::setup::{clean_tags, split_line, Cli, SessionCli, SessionCommand};
use clap::Parser;
use log::debug;
use rolo::error::{Result, RoloError};
use rolo::model::{Contact, ContactDraft, ContactId};
use rolo::store::ContactStore;
use std::io::{BufRead, Write};

struct AppContext {
    store: ContactStore,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    rolo::logging::init(cli.verbose)?;

    let mut ctx = init_context(&cli);
    debug!("session starting: contacts={}", ctx.store.len());

    // Render once on startup; afterwards the store notification drives rendering.
    print::print_contacts(&ctx.store.contacts());

    run_session(&mut ctx)
}

fn init_context(cli: &Cli) -> AppContext {
    let mut store = if cli.no_seed {
        ContactStore::new()
    } else {
        ContactStore::seeded()
    };
    store.subscribe(|contacts: Vec<Contact>| print::print_contacts(&contacts));
    AppContext { store }
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    let attended = console::user_attended();
    if attended {
        println!("Type 'help' for commands, 'quit' to leave.");
    }

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let mut line = String::new();

    loop {
        if attended {
            print!("rolo> ");
            std::io::stdout().flush()?;
        }
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "exit" | "quit" | "q") {
            break;
        }

        let words = match split_line(input) {
            Ok(words) => words,
            Err(e) => {
                print::print_error(&e.to_string());
                continue;
            }
        };
        match SessionCli::try_parse_from(&words) {
            Ok(session) => {
                if let Err(e) = dispatch(ctx, session.command) {
                    print::print_error(&e.to_string());
                }
            }
            // clap renders its own help, usage and error output
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    if attended {
        println!("Goodbye.");
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Add {
            name,
            email,
            phone,
            tags,
        } => handle_add(ctx, name, email, phone, tags),
        SessionCommand::Update {
            id,
            name,
            email,
            phone,
            tags,
        } => handle_update(ctx, id, name, email, phone, tags),
        SessionCommand::Delete { id } => handle_delete(ctx, id),
        SessionCommand::Show { id } => handle_show(ctx, id),
        SessionCommand::List => handle_list(ctx),
        SessionCommand::Filter { tags } => handle_filter(ctx, tags),
        SessionCommand::Tags => handle_tags(ctx),
        SessionCommand::Export => handle_export(ctx),
    }
}

fn build_draft(
    name: String,
    email: String,
    phone: String,
    tags: Vec<String>,
) -> Result<ContactDraft> {
    if name.trim().is_empty() {
        return Err(RoloError::Input("Name cannot be empty".to_string()));
    }
    if email.trim().is_empty() {
        return Err(RoloError::Input("Email cannot be empty".to_string()));
    }
    if phone.trim().is_empty() {
        return Err(RoloError::Input("Phone number cannot be empty".to_string()));
    }
    Ok(ContactDraft::new(name, email, phone).with_tags(clean_tags(tags)))
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    tags: Vec<String>,
) -> Result<()> {
    let draft = build_draft(name, email, phone, tags)?;
    let contact = ctx.store.add(draft);
    print::print_success(&format!(
        "Contact added ({}): {}",
        contact.id, contact.full_name
    ));
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: ContactId,
    name: String,
    email: String,
    phone: String,
    tags: Vec<String>,
) -> Result<()> {
    let draft = build_draft(name, email, phone, tags)?;
    let contact = ctx.store.update(id, draft)?;
    print::print_success(&format!(
        "Contact updated ({}): {}",
        contact.id, contact.full_name
    ));
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: ContactId) -> Result<()> {
    let removed = ctx.store.delete(id)?;
    print::print_success(&format!(
        "Contact deleted ({}): {}",
        removed.id, removed.full_name
    ));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: ContactId) -> Result<()> {
    let contact = ctx.store.contact(id)?;
    print::print_contact(&contact);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print::print_contacts(&ctx.store.contacts());
    Ok(())
}

fn handle_filter(ctx: &AppContext, tags: Vec<String>) -> Result<()> {
    let required = clean_tags(tags);
    print::print_contacts(&ctx.store.contacts_with_tags(&required));
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    print::print_tags(&ctx.store.all_tags());
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let json = serde_json::to_string_pretty(&ctx.store.contacts())?;
    println!("{}", json);
    Ok(())
}
