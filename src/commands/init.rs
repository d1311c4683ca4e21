//! Initialization command.
//!
//! Writes `config.json` (merging any flags given) and creates the database
//! schema, so the first `serve` starts against a ready database.

use super::OverrideArgs;
use crate::{
    db::db::Db,
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if DataStorage::new().get_path(CONFIG_FILE_NAME)?.exists() {
        msg_warning!(Message::ConfigOverwritten);
    }

    // environment values are not persisted, only file contents and flags
    let mut config = Config::read_file()?;
    config.apply_overrides(args.overrides.into());
    let config_path = config.save()?;
    msg_success!(Message::ConfigSaved(config_path.display().to_string()));

    let db_path = config.database.resolve_path()?;
    Db::open(&db_path)?;
    msg_success!(Message::DatabaseInitialized(db_path.display().to_string()));

    Ok(())
}
