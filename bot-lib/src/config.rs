use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct Config {
    /// The id of the guild the bot is in.
    pub guild_id: u64,
    /// Prefix for text commands, eg. `!bb`.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Where the embedded database lives.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Who may add and remove memes.
    #[serde(default)]
    pub approval: ApprovalSource,
    /// The roles bracketing the self-service pronoun roles.
    #[serde(default)]
    pub role_anchors: RoleAnchorNames,
    /// JSON tarot deck, see `content::tarot`.
    pub tarot_deck_path: Option<PathBuf>,
    /// Periodic Bovonto pitches. Off when missing.
    pub bovonto_schedule: Option<PitchSchedule>,
    /// The help text for the bot. `/help`
    pub help_text: Option<Arc<String>>,
    /// Replaces the built in welcome text.
    pub greeting: Option<Arc<String>>,
    #[serde(default)]
    pub icons: Icons,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ApprovalSource {
    /// Usernames stored in the `approved_users` table, matched by substring.
    #[default]
    Table,
    /// A fixed list of usernames, matched exactly.
    List { users: Vec<String> },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RoleAnchorNames {
    /// The highest pronoun role. Anything above it is staff.
    pub upper: String,
    /// The role just below the pronoun roles.
    pub lower: String,
}

impl Default for RoleAnchorNames {
    fn default() -> Self {
        RoleAnchorNames {
            upper: "he/him".to_owned(),
            lower: "Catillac Cat".to_owned(),
        }
    }
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PitchSchedule {
    pub channel_id: u64,
    /// Seconds between pitches.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub interval: Duration,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Icons {
    pub bob_ross: Option<String>,
    pub bovonto: Option<String>,
    pub timey: Option<String>,
}

fn default_command_prefix() -> String {
    "!".to_owned()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("butterbean.db")
}

impl Config {
    /// Fetches the config from the config file in the root directory.
    pub fn create_from_file(config_path: impl AsRef<Path>) -> Result<Config> {
        let file = std::fs::read_to_string(config_path).wrap_err("Could not read config file")?;

        toml::from_str(&file).wrap_err("Could not parse config file")
    }

    /// Reloads the config file and updates the configuration.
    ///
    /// A broken file leaves the current config in place.
    pub fn reload(&mut self, config_path: impl AsRef<Path>) {
        match Config::create_from_file(config_path) {
            Ok(config) => *self = config,
            Err(e) => tracing::error!("Keeping old config: {:?}", e),
        }
    }
}
