//! Segment command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::SegmentRepository;
use intercom_core::domain::segment::Segment;

use super::print_json;
use crate::config::Config;

/// Segment subcommands
#[derive(Subcommand)]
pub enum SegmentCommands {
    /// List all segments
    List,
    /// Show one segment
    Find {
        /// Segment id
        id: String,
    },
}

/// Handle segment commands
pub async fn handle_segment_command(command: SegmentCommands, config: &Config) -> Result<()> {
    let segments = config.client()?.segments();

    match command {
        SegmentCommands::List => {
            let list = segments.list().await.context("Failed to list segments")?;

            if config.json {
                return print_json(&list);
            }

            if list.segments.is_empty() {
                println!("{}", "No segments found.".yellow());
            } else {
                println!(
                    "{}",
                    format!("Found {} segment(s):", list.segments.len()).bold()
                );
                println!();
                for segment in &list.segments {
                    print_segment_summary(segment);
                }
            }
            Ok(())
        }
        SegmentCommands::Find { id } => {
            let segment = segments
                .find(&id)
                .await
                .with_context(|| format!("Failed to find segment {}", id))?;

            if config.json {
                return print_json(&segment);
            }
            print_segment_summary(&segment);
            Ok(())
        }
    }
}

fn print_segment_summary(segment: &Segment) {
    println!("  {} {}", "▸".cyan(), segment.name.bold());
    println!("    ID:          {}", segment.id.dimmed());
    if !segment.person_type.is_empty() {
        println!("    Person type: {}", segment.person_type.dimmed());
    }
    if let Some(updated_at) = segment.updated_at {
        println!(
            "    Updated:     {}",
            updated_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
    println!();
}
