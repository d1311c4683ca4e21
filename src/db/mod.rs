//! Database layer for taskdesk.
//!
//! SQLite persistence for tasks and categories. The schema is created and
//! evolved by the versioned migrations in [`migrations`]; the data-access
//! objects [`tasks::Tasks`] and [`categories::Categories`] borrow a connection,
//! normally the per-request transaction handed out by [`store::Store`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::{categories::Categories, store::Store, tasks::Tasks};
//! use taskdesk::libs::task::{TaskInput, TaskFilter};
//!
//! let store = Store::open_in_memory()?;
//! let tasks = store.transaction(|tx| {
//!     let work = Categories::new(tx).create("Work")?;
//!     Tasks::new(tx).insert(&TaskInput::new("Review code").with_category(work))?;
//!     Tasks::new(tx).fetch(&TaskFilter::all())
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Referential integrity
//!
//! `tasks.category_id` references `categories.id` and foreign keys are enforced
//! on every connection. Deleting a category therefore clears the reference on
//! its tasks before the category row is removed, inside the same transaction.

/// Data access for categories.
pub mod categories;

/// Connection setup.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Shared store handle and per-request transactions.
pub mod store;

/// Data access for tasks, including filtered listing.
pub mod tasks;
