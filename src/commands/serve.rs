//! Web server command.
//!
//! Loads the configuration, brings the database schema up to date once, then
//! serves HTTP until Ctrl-C.

use super::OverrideArgs;
use crate::{
    db::store::Store,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
    web::{self, AppState},
};
use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    overrides: OverrideArgs,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::read()?;
    config.apply_overrides(args.overrides.into());

    msg_info!(Message::ServerStarting(env!("CARGO_PKG_VERSION").to_string()));

    let db_path = config.database.resolve_path()?;
    let store = Store::open(&db_path)?;
    msg_info!(Message::DatabaseOpened(db_path.display().to_string()));

    let state = AppState::new(store)?;
    let address = config.server.address();
    let listener = TcpListener::bind(&address).await.with_context(|| format!("failed to bind {}", address))?;
    msg_success!(Message::ServerListening(listener.local_addr()?.to_string()));

    web::serve(listener, state).await?;
    msg_info!(Message::ServerStopped);

    Ok(())
}
