//! Tag command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::TagRepository;

use super::print_json;
use crate::config::Config;

/// Tag subcommands
#[derive(Subcommand)]
pub enum TagCommands {
    /// List all tags
    List,
    /// Delete a tag
    Delete {
        /// Tag id
        id: String,
    },
}

/// Handle tag commands
pub async fn handle_tag_command(command: TagCommands, config: &Config) -> Result<()> {
    let tags = config.client()?.tags();

    match command {
        TagCommands::List => {
            let list = tags.list().await.context("Failed to list tags")?;

            if config.json {
                return print_json(&list);
            }

            if list.tags.is_empty() {
                println!("{}", "No tags found.".yellow());
            } else {
                println!("{}", format!("Found {} tag(s):", list.tags.len()).bold());
                for tag in &list.tags {
                    println!("  {} {} {}", "▸".cyan(), tag.name.bold(), tag.id.dimmed());
                }
            }
            Ok(())
        }
        TagCommands::Delete { id } => {
            tags.delete(&id).await.context("Failed to delete tag")?;
            println!(
                "{}",
                format!("✓ Tag {} deleted successfully!", id).green().bold()
            );
            Ok(())
        }
    }
}
