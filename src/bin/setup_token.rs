//! setup-token — First-time setup for the 1v1Me API client.
//!
//! Reads the bearer token interactively (hidden input) to avoid leaking it
//! into shell history, validates it with one live call, and saves it to
//! `config.toml`. Use `--auth-token` only for scripted/CI use.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;

use onevone_api::Client;
use onevone_api::config::{AccountConfig, AppConfig, CONFIG_PATH, SettingsConfig};

#[derive(Parser)]
#[command(
    name = "setup-token",
    about = "Validate a bearer token and save it to config.toml"
)]
struct Cli {
    /// Bearer token. If omitted, reads interactively with hidden input
    /// (recommended).
    #[arg(long)]
    auth_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Path::new(CONFIG_PATH);

    println!("=== 1v1Me API — Token Setup ===\n");

    // ── Step 1: Read token ─────────────────────────────────────────
    let auth_token = match cli.auth_token {
        Some(token) => token,
        None => {
            let token = rpassword::prompt_password("Enter bearer token: ")
                .context("failed to read token")?;
            if token.trim().is_empty() {
                bail!("token cannot be empty");
            }
            token.trim().to_string()
        }
    };

    // ── Step 2: Validate with a live call ──────────────────────────
    println!("Validating token...");
    let client = Client::new(&auth_token).context("token is not a valid header value")?;
    let me = client
        .get_self_user_info()
        .await
        .context("validation request failed — check network and token")?;

    // The API reports auth failures in the body, not via status codes
    if let Some(err) = me.get("error") {
        bail!("service rejected the token: {err}");
    }
    let username = me
        .get("username")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");
    println!("  Authenticated as: {username}");
    println!();

    // ── Step 3: Save token to config.toml ──────────────────────────
    println!("Saving token to {}...", config_path.display());
    let mut config = match AppConfig::load(config_path) {
        Ok(existing) => existing,
        Err(_) => AppConfig {
            account: AccountConfig {
                auth_token: String::new(),
            },
            settings: SettingsConfig::default(),
        },
    };
    config.account.auth_token = auth_token;
    config.save(config_path)?;
    println!("  Config saved");
    println!();

    // ── Summary ────────────────────────────────────────────────────
    println!("=== Setup Complete ===");
    println!();
    println!("Next steps:");
    println!("  cargo run --bin onevone -- matches");
    println!("  cargo run --bin onevone -- send-message <convo-id> --text \"gg\"");

    Ok(())
}
