//! TrueBudget CLI - Local-first monthly budgeting assistant
//!
//! Usage:
//!   truebudget init                          Initialize database
//!   truebudget income add -n Job -a 2000     Record income
//!   truebudget expense add -n Rent -a 900 -c Rent
//!   truebudget plan                          Show the monthly plan
//!   truebudget advise                        Ask the local LLM for advice

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Status => commands::cmd_status(&cli.db, cli.config.as_deref(), cli.no_encrypt),
        Commands::Income { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(IncomeAction::List) => {
                    let config = commands::load_config(cli.config.as_deref())?;
                    commands::cmd_income_list(&db, &config)
                }
                Some(IncomeAction::Add {
                    name,
                    amount,
                    frequency,
                }) => commands::cmd_income_add(&db, &name, amount, &frequency).map(|_| ()),
                Some(IncomeAction::Delete { id }) => commands::cmd_income_delete(&db, id),
            }
        }
        Commands::Expense { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(ExpenseAction::List) => {
                    let config = commands::load_config(cli.config.as_deref())?;
                    commands::cmd_expense_list(&db, &config)
                }
                Some(ExpenseAction::Add {
                    name,
                    amount,
                    frequency,
                    category,
                }) => commands::cmd_expense_add(&db, &name, amount, &frequency, &category)
                    .map(|_| ()),
                Some(ExpenseAction::Delete { id }) => commands::cmd_expense_delete(&db, id),
            }
        }
        Commands::Profile { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(ProfileAction::Show) => commands::cmd_profile_show(&db),
                Some(ProfileAction::Set {
                    location,
                    goal_type,
                    goal_value,
                    focus,
                }) => commands::cmd_profile_set(
                    &db,
                    commands::ProfileUpdate {
                        location,
                        goal_type,
                        goal_value,
                        focus,
                    },
                )
                .map(|_| ()),
            }
        }
        Commands::Plan { savings, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_plan(&db, &config, savings, json)
        }
        Commands::Advise { model, savings } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let config = commands::load_config(cli.config.as_deref())?;
            let client = commands::advice_client(model.as_deref());
            commands::cmd_advise(&db, &config, &client, savings)
                .await
                .map(|_| ())
        }
        Commands::Ollama { action } => match action {
            OllamaAction::Status { model } => {
                let client = commands::advice_client(model.as_deref());
                commands::cmd_ollama_status(&client).await.map(|_| ())
            }
        },
        Commands::Reset { yes } => commands::cmd_reset(&cli.db, yes, cli.no_encrypt),
    }
}
