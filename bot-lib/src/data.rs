use crate::{config::Config, content::tarot::TarotDeck};
use bot_db::{ButterbeanDb, approved_users::ApprovedUsers, memes::MemeStore};
use bot_traits::TraceErr;
use color_eyre::eyre::{Error, Result, WrapErr};
use std::{path::Path, sync::Arc};
use tokio::sync::RwLock;

/// The global state of the bot, handed to every command.
pub type State = Arc<RawAppState>;

pub struct RawAppState {
    pub config: Arc<RwLock<Config>>,
    /// Config file watcher that refreshes the config if it changes
    ///
    /// Attached to the state to keep the watcher alive
    _watcher: notify::RecommendedWatcher,
    pub memes: MemeStore,
    pub approved_users: ApprovedUsers,
    pub tarot: TarotDeck,
}

impl RawAppState {
    pub fn new(config: Config, db: ButterbeanDb, config_path: String) -> Result<RawAppState> {
        let memes = MemeStore::new(&db)?;
        let approved_users = ApprovedUsers::new(&db)?;
        let tarot = TarotDeck::load(config.tarot_deck_path.as_deref()).trace_err_or(TarotDeck::Missing);

        let config = Arc::new(RwLock::new(config));

        use notify::{
            Event, EventKind, RecursiveMode, Watcher,
            event::{AccessKind, AccessMode},
        };

        let config_clone = Arc::clone(&config);
        let reload_config_path = config_path.clone();

        let mut watcher = notify::recommended_watcher(move |res| match res {
            Ok(Event {
                kind: EventKind::Access(AccessKind::Close(AccessMode::Write)),
                ..
            }) => {
                tracing::info!("config changed, reloading...");

                config_clone.blocking_write().reload(&*reload_config_path);
            }
            Err(e) => tracing::error!("watch error: {:?}", e),
            _ => {}
        })
        .wrap_err("Failed to create file watcher")?;

        watcher
            .watch(Path::new(&config_path), RecursiveMode::NonRecursive)
            .wrap_err("Failed to watch config file")?;

        Ok(RawAppState {
            config,
            _watcher: watcher,
            memes,
            approved_users,
            tarot,
        })
    }
}

// User data, which is stored and accessible in all command invocations
pub type PoiseContext<'a> = poise::Context<'a, State, Error>;
