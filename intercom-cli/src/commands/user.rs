//! User command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::{
    HttpUserRepository, IntercomClient, ScrollSource, UserIdentifiers, UserRepository,
};
use intercom_core::domain::user::{User, UserListParams};

use super::{print_json, print_json_line};
use crate::config::Config;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Find a single user
    Find {
        /// Intercom id
        #[arg(long)]
        id: Option<String>,

        /// Your own user id
        #[arg(long)]
        user_id: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List one page of users
    List {
        #[arg(long)]
        page: Option<i64>,

        #[arg(long)]
        per_page: Option<i64>,

        /// Only users with this tag
        #[arg(long)]
        tag_id: Option<String>,

        /// Only users in this segment
        #[arg(long)]
        segment_id: Option<String>,
    },
    /// Walk through every user
    Scroll,
    /// Delete a user
    Delete {
        /// Intercom id
        id: String,
    },
}

/// Handle user commands
pub async fn handle_user_command(command: UserCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        UserCommands::Find { id, user_id, email } => {
            let identifiers = UserIdentifiers { id, user_id, email };
            find_user(&client, &identifiers, config.json).await
        }
        UserCommands::List {
            page,
            per_page,
            tag_id,
            segment_id,
        } => {
            let params = UserListParams {
                page,
                per_page,
                tag_id,
                segment_id,
            };
            list_users(&client, &params, config.json).await
        }
        UserCommands::Scroll => scroll_users(&client.users(), config.json).await,
        UserCommands::Delete { id } => delete_user(&client, &id, config.json).await,
    }
}

async fn find_user(
    client: &IntercomClient,
    identifiers: &UserIdentifiers,
    json: bool,
) -> Result<()> {
    let user = client
        .users()
        .find(identifiers)
        .await
        .context("Failed to find user")?;

    if json {
        return print_json(&user);
    }
    print_user_details(&user);
    Ok(())
}

async fn list_users(client: &IntercomClient, params: &UserListParams, json: bool) -> Result<()> {
    let list = client
        .users()
        .list(params)
        .await
        .context("Failed to list users")?;

    if json {
        return print_json(&list);
    }

    if list.users.is_empty() {
        println!("{}", "No users found.".yellow());
        return Ok(());
    }

    let header = match list.total_count {
        Some(total) => format!("Showing {} of {} user(s):", list.users.len(), total),
        None => format!("Found {} user(s):", list.users.len()),
    };
    println!("{}", header.bold());
    println!();
    for user in &list.users {
        print_user_summary(user);
    }
    if let Some(pages) = &list.pages {
        println!(
            "{}",
            format!(
                "Page {} of {}",
                pages.page.unwrap_or(1),
                pages.total_pages.unwrap_or(1)
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Print every user of a fresh scroll session, page by page
async fn scroll_users(users: &HttpUserRepository, json: bool) -> Result<()> {
    let mut scroller = users.scroller();
    let mut total = 0;

    while let Some(page) = scroller
        .next_page()
        .await
        .context("Failed to scroll users")?
    {
        total += page.users.len();
        for user in &page.users {
            if json {
                print_json_line(user)?;
            } else {
                print_user_summary(user);
            }
        }
    }

    if !json {
        println!("{}", format!("{} user(s) in total", total).bold());
    }
    Ok(())
}

async fn delete_user(client: &IntercomClient, id: &str, json: bool) -> Result<()> {
    let user = client
        .users()
        .delete(id)
        .await
        .context("Failed to delete user")?;

    if json {
        return print_json(&user);
    }
    println!(
        "{}",
        format!("✓ User {} deleted successfully!", user.id)
            .green()
            .bold()
    );
    Ok(())
}

/// Print a user summary
fn print_user_summary(user: &User) {
    let label = if user.name.is_empty() {
        &user.email
    } else {
        &user.name
    };
    println!("  {} {}", "▸".cyan(), label.bold());
    println!("    ID:      {}", user.id.dimmed());
    if !user.user_id.is_empty() {
        println!("    User ID: {}", user.user_id.dimmed());
    }
    if !user.email.is_empty() {
        println!("    Email:   {}", user.email.dimmed());
    }
    println!();
}

/// Print detailed user information
fn print_user_details(user: &User) {
    println!("{}", "User Details:".bold());
    println!("  ID:        {}", user.id.cyan());
    println!("  Name:      {}", user.name.bold());
    println!("  User ID:   {}", user.user_id);
    println!("  Email:     {}", user.email);
    if !user.phone.is_empty() {
        println!("  Phone:     {}", user.phone);
    }
    if let Some(signed_up_at) = user.signed_up_at {
        println!("  Signed up: {}", signed_up_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(last_request_at) = user.last_request_at {
        println!("  Last seen: {}", last_request_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(sessions) = user.session_count {
        println!("  Sessions:  {}", sessions);
    }
    if !user.companies.is_empty() {
        let names: Vec<_> = user.companies.iter().map(|c| c.name.as_str()).collect();
        println!("  Companies: {}", names.join(", "));
    }
    if !user.tags.is_empty() {
        let names: Vec<_> = user.tags.iter().map(|t| t.name.as_str()).collect();
        println!("  Tags:      {}", names.join(", "));
    }
    if !user.custom_attributes.is_empty() {
        println!("\n{}", "Custom attributes:".bold());
        for (key, value) in &user.custom_attributes {
            println!("  {}: {}", key.cyan(), value);
        }
    }
}
