//! Admin command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::AdminRepository;

use super::print_json;
use crate::config::Config;

/// Admin subcommands
#[derive(Subcommand)]
pub enum AdminCommands {
    /// List admins and teams
    List,
}

/// Handle admin commands
pub async fn handle_admin_command(command: AdminCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        AdminCommands::List => {
            let list = client
                .admins()
                .list()
                .await
                .context("Failed to list admins")?;

            if config.json {
                return print_json(&list);
            }

            if list.admins.is_empty() {
                println!("{}", "No admins found.".yellow());
                return Ok(());
            }

            println!("{}", format!("Found {} admin(s):", list.admins.len()).bold());
            println!();
            for admin in &list.admins {
                println!("  {} {} {}", "▸".cyan(), admin.name.bold(), admin.kind.dimmed());
                println!("    ID:    {}", admin.id.dimmed());
                if !admin.email.is_empty() {
                    println!("    Email: {}", admin.email.dimmed());
                }
                println!();
            }
            Ok(())
        }
    }
}
