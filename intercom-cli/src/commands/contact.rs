//! Contact command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::{
    ContactRepository, HttpContactRepository, IntercomClient, ScrollSource, UserIdentifiers,
};
use intercom_core::domain::contact::{Contact, ContactListParams};

use super::{print_json, print_json_line};
use crate::config::Config;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Find a single contact by id or user id
    Find {
        /// Intercom id
        #[arg(long)]
        id: Option<String>,

        /// Contact user id (a generated UUID)
        #[arg(long)]
        user_id: Option<String>,
    },
    /// List one page of contacts
    List {
        #[arg(long)]
        page: Option<i64>,

        #[arg(long)]
        per_page: Option<i64>,

        /// Only contacts with this email address
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        tag_id: Option<String>,

        #[arg(long)]
        segment_id: Option<String>,
    },
    /// Walk through every contact
    Scroll,
    /// Delete a contact
    Delete {
        /// Intercom id
        id: String,
    },
}

/// Handle contact commands
pub async fn handle_contact_command(command: ContactCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        ContactCommands::Find { id, user_id } => {
            let identifiers = UserIdentifiers {
                id,
                user_id,
                email: None,
            };
            find_contact(&client, &identifiers, config.json).await
        }
        ContactCommands::List {
            page,
            per_page,
            email,
            tag_id,
            segment_id,
        } => {
            let params = ContactListParams {
                page,
                per_page,
                email,
                tag_id,
                segment_id,
            };
            list_contacts(&client, &params, config.json).await
        }
        ContactCommands::Scroll => scroll_contacts(&client.contacts(), config.json).await,
        ContactCommands::Delete { id } => delete_contact(&client, &id, config.json).await,
    }
}

async fn find_contact(
    client: &IntercomClient,
    identifiers: &UserIdentifiers,
    json: bool,
) -> Result<()> {
    let contact = client
        .contacts()
        .find(identifiers)
        .await
        .context("Failed to find contact")?;

    if json {
        return print_json(&contact);
    }

    println!("{}", "Contact Details:".bold());
    println!("  ID:      {}", contact.id.cyan());
    println!("  Name:    {}", contact.name.bold());
    println!("  User ID: {}", contact.user_id);
    if !contact.email.is_empty() {
        println!("  Email:   {}", contact.email);
    }
    if !contact.pseudonym.is_empty() {
        println!("  Alias:   {}", contact.pseudonym.dimmed());
    }
    if let Some(created_at) = contact.created_at {
        println!("  Created: {}", created_at.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}

async fn list_contacts(
    client: &IntercomClient,
    params: &ContactListParams,
    json: bool,
) -> Result<()> {
    let list = client
        .contacts()
        .list(params)
        .await
        .context("Failed to list contacts")?;

    if json {
        return print_json(&list);
    }

    if list.contacts.is_empty() {
        println!("{}", "No contacts found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} contact(s):", list.contacts.len()).bold()
        );
        println!();
        for contact in &list.contacts {
            print_contact_summary(contact);
        }
    }
    Ok(())
}

async fn scroll_contacts(contacts: &HttpContactRepository, json: bool) -> Result<()> {
    let mut scroller = contacts.scroller();
    let mut total = 0;

    while let Some(page) = scroller
        .next_page()
        .await
        .context("Failed to scroll contacts")?
    {
        total += page.contacts.len();
        for contact in &page.contacts {
            if json {
                print_json_line(contact)?;
            } else {
                print_contact_summary(contact);
            }
        }
    }

    if !json {
        println!("{}", format!("{} contact(s) in total", total).bold());
    }
    Ok(())
}

async fn delete_contact(client: &IntercomClient, id: &str, json: bool) -> Result<()> {
    let contact = client
        .contacts()
        .delete(id)
        .await
        .context("Failed to delete contact")?;

    if json {
        return print_json(&contact);
    }
    println!(
        "{}",
        format!("✓ Contact {} deleted successfully!", contact.id)
            .green()
            .bold()
    );
    Ok(())
}

fn print_contact_summary(contact: &Contact) {
    let label = if contact.name.is_empty() {
        &contact.pseudonym
    } else {
        &contact.name
    };
    println!("  {} {}", "▸".cyan(), label.bold());
    println!("    ID:      {}", contact.id.dimmed());
    println!("    User ID: {}", contact.user_id.dimmed());
    if !contact.email.is_empty() {
        println!("    Email:   {}", contact.email.dimmed());
    }
    println!();
}
