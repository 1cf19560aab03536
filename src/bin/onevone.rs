//! onevone — command-line front end for the 1v1Me API client.
//!
//! One subcommand per API operation; every command issues a single request
//! and prints the raw JSON response pretty-printed. The bearer token comes
//! from `--token`, the `ONEVONE_TOKEN` environment variable (a `.env` file
//! works), or `config.toml` — in that order.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use onevone_api::config::{AppConfig, CONFIG_PATH};
use onevone_api::{Client, ConversationRef, Error, MessageBody};

#[derive(Parser)]
#[command(name = "onevone", about = "1v1Me API client")]
struct Args {
    /// Bearer token (falls back to ONEVONE_TOKEN, then config.toml)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a message to a conversation (bare id or inbox URL)
    SendMessage {
        /// Conversation id, or an inbox URL containing `convo=<id>`
        conversation: String,
        /// Message text (wins over --giphy-id and --imgur-id)
        #[arg(long)]
        text: Option<String>,
        /// Giphy animated-image id
        #[arg(long)]
        giphy_id: Option<String>,
        /// Imgur image id
        #[arg(long)]
        imgur_id: Option<String>,
    },
    /// Place a bet on a stake
    Bet {
        game_id: u64,
        team_id: u64,
        /// Bet amount in dollars
        amount: u64,
    },
    /// List open stakes
    Matches {
        /// Number of stakes to list (default from config, then 20)
        #[arg(long)]
        amount: Option<u32>,
    },
    /// React to a message
    React { message_id: u64, reaction: String },
    /// Cheer a team on a live broadcast
    Cheer {
        tv_id: u64,
        team_id: u64,
        amount: u64,
    },
    /// Show the teams playing in a stake
    Teams { game_id: u64 },
    /// Show play-by-play entries for a match
    PlayByPlay {
        game_id: u64,
        /// Number of plays to fetch
        #[arg(long, default_value_t = 20)]
        amount: u32,
    },
    /// Show your own user info
    Whoami,
    /// Show another user's info
    User { user_id: u64 },
    /// List live broadcasts
    Watch,
}

/// A bare number is a conversation id; anything else is treated as a URL.
fn parse_conversation(raw: &str) -> ConversationRef {
    match raw.parse::<u64>() {
        Ok(id) => ConversationRef::Id(id),
        Err(_) => ConversationRef::Url(raw.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::load(Path::new(CONFIG_PATH)).ok();
    let token = args
        .token
        .or_else(|| std::env::var("ONEVONE_TOKEN").ok())
        .or_else(|| config.as_ref().map(|c| c.account.auth_token.clone()))
        .context("no token — pass --token, set ONEVONE_TOKEN, or run setup-token")?;

    let client = Client::new(&token)?;

    let response = match args.command {
        Command::SendMessage {
            conversation,
            text,
            giphy_id,
            imgur_id,
        } => {
            let body =
                MessageBody::select(text, giphy_id, imgur_id).ok_or(Error::EmptyMessage)?;
            client
                .send_message(parse_conversation(&conversation), body)
                .await?
        }
        Command::Bet {
            game_id,
            team_id,
            amount,
        } => {
            info!("Placing ${amount} on team {team_id} in stake {game_id}");
            client.bet(game_id, team_id, amount).await?
        }
        Command::Matches { amount } => {
            let amount = amount.or_else(|| config.as_ref().map(|c| c.settings.page_size));
            client.get_matches(amount).await?
        }
        Command::React {
            message_id,
            reaction,
        } => client.send_reaction(message_id, &reaction).await?,
        Command::Cheer {
            tv_id,
            team_id,
            amount,
        } => client.cheer(tv_id, team_id, amount).await?,
        Command::Teams { game_id } => client.get_teams_info(game_id).await?,
        Command::PlayByPlay { game_id, amount } => {
            client.get_play_by_play(game_id, amount).await?
        }
        Command::Whoami => client.get_self_user_info().await?,
        Command::User { user_id } => client.get_user_info(user_id).await?,
        Command::Watch => client.get_live_streams().await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
