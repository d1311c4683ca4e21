//! Core library modules for taskdesk.
//!
//! Domain types and the ambient pieces shared by the CLI and the web server.
//!
//! - **Domain**: [`task`] and [`category`] records, validated input, filters
//! - **Errors**: [`error::AppError`], the failure type of every store operation
//! - **Infrastructure**: configuration, data directory, console messages

pub mod category;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
