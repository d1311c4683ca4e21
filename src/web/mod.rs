//! HTTP surface of taskdesk.
//!
//! | Method     | Path                              | Behavior                          |
//! |------------|-----------------------------------|-----------------------------------|
//! | GET        | `/`                               | list and filter tasks             |
//! | POST       | `/`                               | create a task (`add_task` present)|
//! | GET / POST | `/edit/{task_id}`                 | edit form / apply edit            |
//! | POST       | `/delete/{task_id}`               | delete a task                     |
//! | POST       | `/toggle/{task_id}`               | flip completion                   |
//! | GET / POST | `/categories`                     | list / create categories          |
//! | POST       | `/delete_category/{category_id}`  | delete a category, orphaning tasks|
//!
//! Mutations answer with `303 See Other` to a GET page. Failures render an
//! error page with 404 (unknown id), 400 (invalid input) or 500.

pub mod categories;
pub mod error;
pub mod forms;
pub mod server;
pub mod tasks;
pub mod templates;

pub use server::{router, serve, AppState};
