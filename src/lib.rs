//! # Taskdesk
//!
//! A small web task manager: tasks with priorities and completion state,
//! grouped into optional categories, stored in SQLite and rendered as
//! server-side HTML.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, delete and complete tasks
//! - **Filtering**: Combine title search, category, priority and status filters
//! - **Categories**: Named groups; deleting one keeps its tasks uncategorized
//! - **Migrations**: Versioned schema applied once at startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
