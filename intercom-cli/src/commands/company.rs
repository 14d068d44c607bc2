//! Company command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use intercom_client::{
    CompanyIdentifiers, CompanyRepository, HttpCompanyRepository, IntercomClient, ScrollSource,
};
use intercom_core::domain::company::{Company, CompanyListParams};

use super::{print_json, print_json_line};
use crate::config::Config;

/// Company subcommands
#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Find a single company
    Find {
        /// Intercom id
        #[arg(long)]
        id: Option<String>,

        /// Your own company id
        #[arg(long)]
        company_id: Option<String>,

        /// Company name
        #[arg(long)]
        name: Option<String>,
    },
    /// List one page of companies
    List {
        #[arg(long)]
        page: Option<i64>,

        #[arg(long)]
        per_page: Option<i64>,

        #[arg(long)]
        tag_id: Option<String>,

        #[arg(long)]
        segment_id: Option<String>,
    },
    /// Walk through every company
    Scroll,
}

/// Handle company commands
pub async fn handle_company_command(command: CompanyCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        CompanyCommands::Find {
            id,
            company_id,
            name,
        } => {
            let identifiers = CompanyIdentifiers {
                id,
                company_id,
                name,
            };
            find_company(&client, &identifiers, config.json).await
        }
        CompanyCommands::List {
            page,
            per_page,
            tag_id,
            segment_id,
        } => {
            let params = CompanyListParams {
                page,
                per_page,
                tag_id,
                segment_id,
            };
            list_companies(&client, &params, config.json).await
        }
        CompanyCommands::Scroll => scroll_companies(&client.companies(), config.json).await,
    }
}

async fn find_company(
    client: &IntercomClient,
    identifiers: &CompanyIdentifiers,
    json: bool,
) -> Result<()> {
    let company = client
        .companies()
        .find(identifiers)
        .await
        .context("Failed to find company")?;

    if json {
        return print_json(&company);
    }
    print_company_details(&company);
    Ok(())
}

async fn list_companies(
    client: &IntercomClient,
    params: &CompanyListParams,
    json: bool,
) -> Result<()> {
    let list = client
        .companies()
        .list(params)
        .await
        .context("Failed to list companies")?;

    if json {
        return print_json(&list);
    }

    if list.companies.is_empty() {
        println!("{}", "No companies found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} company(ies):", list.companies.len()).bold()
        );
        println!();
        for company in &list.companies {
            print_company_summary(company);
        }
    }
    Ok(())
}

async fn scroll_companies(companies: &HttpCompanyRepository, json: bool) -> Result<()> {
    let mut scroller = companies.scroller();
    let mut total = 0;

    while let Some(page) = scroller
        .next_page()
        .await
        .context("Failed to scroll companies")?
    {
        total += page.companies.len();
        for company in &page.companies {
            if json {
                print_json_line(company)?;
            } else {
                print_company_summary(company);
            }
        }
    }

    if !json {
        println!("{}", format!("{} company(ies) in total", total).bold());
    }
    Ok(())
}

fn print_company_summary(company: &Company) {
    println!("  {} {}", "▸".cyan(), company.name.bold());
    println!("    ID:         {}", company.id.dimmed());
    if !company.company_id.is_empty() {
        println!("    Company ID: {}", company.company_id.dimmed());
    }
    println!();
}

fn print_company_details(company: &Company) {
    println!("{}", "Company Details:".bold());
    println!("  ID:         {}", company.id.cyan());
    println!("  Name:       {}", company.name.bold());
    println!("  Company ID: {}", company.company_id);
    if let Some(plan) = &company.plan {
        println!("  Plan:       {}", plan.name);
    }
    if let Some(users) = company.user_count {
        println!("  Users:      {}", users);
    }
    if let Some(spend) = company.monthly_spend {
        println!("  Spend:      {}", spend);
    }
    if let Some(created_at) = company.created_at {
        println!("  Created:    {}", created_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if !company.tags.is_empty() {
        let names: Vec<_> = company.tags.iter().map(|t| t.name.as_str()).collect();
        println!("  Tags:       {}", names.join(", "));
    }
}
