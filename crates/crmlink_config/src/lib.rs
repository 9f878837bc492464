// --- File: crates/crmlink_config/src/lib.rs ---
//! Layered configuration for crmlink.
//!
//! Sources, lowest precedence first:
//! 1. `config/default.*` (relative to `CONFIG_DIR`, default `config`)
//! 2. `config/{RUN_ENV}.*` (`RUN_ENV` defaults to `debug`)
//! 3. environment variables `CRMLINK__SECTION__KEY`
//!
//! String values equal to `"secret_from_env"` are then replaced from
//! `CRMLINK_SECRET_<PATH>` or the legacy `<SERVICE>_<KEY>` variable.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the application configuration from files and the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    let default_path = format!("{config_dir}/default");
    let env_path = format!("{config_dir}/{run_env}");
    debug!(%default_path, %env_path, %prefix, "Loading configuration");

    let builder = Config::builder()
        .add_source(File::with_name(&default_path).required(false))
        .add_source(File::with_name(&env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let mut raw: serde_json::Value = builder.build()?.try_deserialize()?;
    env_vars::inject_env_vars(&mut raw);

    serde_json::from_value(raw)
        .map_err(|err| ConfigError::Message(format!("failed to parse configuration: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// `DOTENV_OVERRIDE` wins, then a first CLI argument starting with `.env`,
/// then `.env`. A missing file is not an error. Returns the path used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
