//! Advice and Ollama command implementations

use anyhow::{bail, Context, Result};
use truebudget_core::advice::{self, AdviceBackend, AdviceClient, AdvicePayload};
use truebudget_core::config::BudgetConfig;
use truebudget_core::db::Database;

use super::load_plan;

/// Build the advice client from the environment, optionally overriding the model
pub fn advice_client(model: Option<&str>) -> AdviceClient {
    let client = AdviceClient::from_env();
    match model {
        Some(model) => client.with_model(model),
        None => client,
    }
}

fn print_setup_help(client: &AdviceClient) {
    println!("\n⚠️  Could not connect to Ollama at {}", client.host());
    println!("\nTo set up Ollama:");
    println!("  1. Install Ollama: https://ollama.com/download");
    println!("  2. Start the server: ollama serve");
    println!("  3. Pull the model: ollama pull {}", client.model());
    println!("  4. Set environment variable: export OLLAMA_HOST={}", client.host());
}

/// Ask the advice backend to explain the current plan; returns the cleaned text
pub async fn cmd_advise(
    db: &Database,
    config: &BudgetConfig,
    client: &AdviceClient,
    savings_override: Option<f64>,
) -> Result<String> {
    let (plan, profile) = load_plan(db, config, savings_override)?;
    let location = profile.as_ref().and_then(|p| p.location.as_deref());
    let payload = AdvicePayload::from_plan(&plan, location);

    if !client.health_check().await {
        print_setup_help(client);
        bail!("Advice service unavailable at {}", client.host());
    }

    println!("🤖 Asking {} for advice...\n", client.model());
    let text = advice::advise(client, &payload)
        .await
        .context("Failed to generate advice")?;

    println!("{}", text);
    println!();
    println!("   (All numbers were computed locally; the model only explains them.)");

    Ok(text)
}

/// Check whether the Ollama server is reachable
pub async fn cmd_ollama_status(client: &AdviceClient) -> Result<bool> {
    println!("🔍 Checking Ollama connection...\n");
    println!("  Host:  {}", client.host());
    println!("  Model: {}\n", client.model());

    print!("Checking Ollama availability... ");
    if client.health_check().await {
        println!("✅ Connected");
        Ok(true)
    } else {
        println!("❌ Failed");
        print_setup_help(client);
        Ok(false)
    }
}
