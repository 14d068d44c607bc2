//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod admin;
mod company;
mod contact;
mod segment;
mod tag;
mod user;

pub use admin::AdminCommands;
pub use company::CompanyCommands;
pub use contact::ContactCommands;
pub use segment::SegmentCommands;
pub use tag::TagCommands;
pub use user::UserCommands;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// User management
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Contact (lead) management
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Company management
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// Workspace admins and teams
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Tag management
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Segments
    Segment {
        #[command(subcommand)]
        command: SegmentCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::User { command } => user::handle_user_command(command, config).await,
        Commands::Contact { command } => contact::handle_contact_command(command, config).await,
        Commands::Company { command } => company::handle_company_command(command, config).await,
        Commands::Admin { command } => admin::handle_admin_command(command, config).await,
        Commands::Tag { command } => tag::handle_tag_command(command, config).await,
        Commands::Segment { command } => segment::handle_segment_command(command, config).await,
    }
}

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Print one record of a stream as a single JSON line (NDJSON)
fn print_json_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", json_line(value)?);
    Ok(())
}

fn json_line<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use intercom_core::domain::user::User;

    #[test]
    fn test_json_line_is_one_line_per_record() {
        let users = [
            User {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
                ..Default::default()
            },
            User {
                id: "u2".to_string(),
                ..Default::default()
            },
        ];

        let lines: Vec<String> = users.iter().map(|u| json_line(u).unwrap()).collect();

        for line in &lines {
            assert!(!line.contains('\n'));
        }
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["id"], "u1");
        assert_eq!(first["email"], "a@b.com");
    }
}
