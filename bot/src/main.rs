use bot_db::{ButterbeanDb, approved_users::ApprovedUsers};
use bot_lib::{
    commands::{
        help::help,
        memes::{add, bb, beanfo, remove},
        pronoun_picker::pickpronoun,
        quotes::{bobross, bovonto},
        register::register,
        roles::{callme, imnot, join, leave, listroles},
        tarot::tarot,
        welcome::resend,
    },
    config,
    data::{RawAppState, State},
    event_handler::event_handler,
    pitch_schedule::pitch_interval,
};
use clap::Parser;
use color_eyre::eyre::{OptionExt, Result, WrapErr};
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variables that may hold the bot token, in order of preference.
const TOKEN_VARS: [&str; 3] = ["DISCORD_TOKEN", "BOT_TOKEN", "TOKEN"];

/// The cli arguments for the bot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Don't start the discord bot
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,

    /// Path to the config file
    #[arg(short, long, default_value_t = String::from("config.toml"))]
    pub config: String,

    /// Allow a username to add and remove memes. Can be repeated.
    #[arg(short, long)]
    pub approve: Vec<String>,
}

fn discord_token() -> Result<String> {
    TOKEN_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .ok_or_eyre("Expected a DISCORD_TOKEN (or BOT_TOKEN / TOKEN) environment variable")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tokens can come from the real environment too, a missing .env is fine.
    dotenv().ok();
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .finish()
        .init();

    let Args {
        dry_run,
        config: config_path,
        approve,
    } = Args::parse();
    let token = discord_token()?;
    let config =
        config::Config::create_from_file(&config_path).wrap_err("Failed to load config")?;

    let db = ButterbeanDb::open(&config.db_path)?;

    if !approve.is_empty() {
        let approved_users = ApprovedUsers::new(&db)?;
        for username in &approve {
            approved_users.approve(username)?;
        }
        db.flush()?;
    }

    let guild_id = serenity::GuildId::new(config.guild_id);
    let prefix = config.command_prefix.clone();
    let state_db = db.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                bb(),
                add(),
                remove(),
                beanfo(),
                resend(),
                bobross(),
                bovonto(),
                callme(),
                imnot(),
                join(),
                leave(),
                listroles(),
                pickpronoun(),
                tarot(),
                help(),
                register(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                async fn on_error(error: poise::FrameworkError<'_, State, color_eyre::eyre::Error>) {
                    tracing::error!("{}", error);
                }

                Box::pin(on_error(error))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;

                if let Some(schedule) = config.bovonto_schedule.clone() {
                    let http = Arc::clone(&ctx.http);
                    let icon = config.icons.bovonto.clone();
                    tokio::spawn(async move { pitch_interval(http, schedule, icon).await });
                }

                Ok(Arc::new(RawAppState::new(config, state_db, config_path)?))
            })
        });

    let client = serenity::ClientBuilder::new(
        token,
        serenity::GatewayIntents::non_privileged()
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_MEMBERS
            | serenity::GatewayIntents::GUILD_MESSAGES,
    )
    .framework(framework.build())
    .await;

    if dry_run {
        println!("Bot setup worked, dry run enabled, exiting");
        return Ok(());
    }

    let mut client = client.wrap_err("Failed to start bot (serenity)")?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting bot");

    let result = client
        .start()
        .await
        .wrap_err("Failed to start bot (startup)");

    db.flush()?;

    result
}
