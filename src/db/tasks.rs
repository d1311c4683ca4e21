use super::categories::Categories;
use crate::libs::error::{AppError, AppResult};
use crate::libs::task::{CompletionFilter, Priority, Task, TaskFilter, TaskInput};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SELECT_TASKS: &str = "SELECT t.id, t.title, t.description, t.priority, t.category_id, t.completed, t.created_at, c.name
    FROM tasks t
    LEFT JOIN categories c ON c.id = t.category_id";
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.id DESC";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, category_id, completed) VALUES (?1, ?2, ?3, ?4, FALSE)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, priority = ?4, category_id = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const TOGGLE_TASK: &str = "UPDATE tasks SET completed = NOT completed WHERE id = ?1";
const CLEAR_CATEGORY: &str = "UPDATE tasks SET category_id = NULL WHERE category_id = ?1";

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: AppError| FromSqlError::Other(e.to_string().into()))
    }
}

/// Data access for the `tasks` table.
///
/// Borrows a connection, usually the transaction handed out by
/// [`Store::transaction`](super::store::Store::transaction).
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    /// Persists a new, not yet completed task and returns its id.
    pub fn insert(&self, input: &TaskInput) -> AppResult<i64> {
        self.ensure_category(input.category_id)?;
        self.conn.execute(
            INSERT_TASK,
            params![input.title, input.description, input.priority, input.category_id],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(task_id = id, title = %input.title, "task inserted");

        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Option<Task>> {
        self.conn
            .query_row(&format!("{} WHERE t.id = ?1", SELECT_TASKS), params![id], row_to_task)
            .optional()
            .map_err(Into::into)
    }

    /// Like [`Tasks::get_by_id`] but a missing task is [`AppError::NotFound`].
    pub fn get(&self, id: i64) -> AppResult<Task> {
        self.get_by_id(id)?.ok_or_else(|| AppError::task_not_found(id))
    }

    /// Returns the tasks matching every predicate of `filter`, newest first.
    pub fn fetch(&self, filter: &TaskFilter) -> AppResult<Vec<Task>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(search) = &filter.search {
            clauses.push("ulower(t.title) LIKE ? ESCAPE '\\'");
            values.push(Value::Text(format!("%{}%", escape_like(&search.to_lowercase()))));
        }
        if let Some(category_id) = filter.category_id {
            clauses.push("t.category_id = ?");
            values.push(Value::Integer(category_id));
        }
        if let Some(priority) = filter.priority {
            clauses.push("t.priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }
        match filter.completion {
            CompletionFilter::All => {}
            CompletionFilter::Active => clauses.push("t.completed = FALSE"),
            CompletionFilter::Completed => clauses.push("t.completed = TRUE"),
        }

        let sql = if clauses.is_empty() {
            format!("{} {}", SELECT_TASKS, ORDER_NEWEST_FIRST)
        } else {
            format!("{} WHERE {} {}", SELECT_TASKS, clauses.join(" AND "), ORDER_NEWEST_FIRST)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map(params_from_iter(values.iter()), row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Overwrites title, description, priority and category of task `id`.
    pub fn update(&self, id: i64, input: &TaskInput) -> AppResult<()> {
        self.ensure_category(input.category_id)?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![id, input.title, input.description, input.priority, input.category_id],
        )?;
        if affected == 0 {
            return Err(AppError::task_not_found(id));
        }
        tracing::debug!(task_id = id, "task updated");

        Ok(())
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(AppError::task_not_found(id));
        }
        tracing::debug!(task_id = id, "task deleted");

        Ok(())
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&self, id: i64) -> AppResult<bool> {
        let affected = self.conn.execute(TOGGLE_TASK, params![id])?;
        if affected == 0 {
            return Err(AppError::task_not_found(id));
        }
        let completed: bool = self
            .conn
            .query_row("SELECT completed FROM tasks WHERE id = ?1", params![id], |row| row.get(0))?;
        tracing::debug!(task_id = id, completed, "task toggled");

        Ok(completed)
    }

    /// Detaches every task from `category_id`, returning how many were touched.
    pub fn clear_category(&self, category_id: i64) -> AppResult<usize> {
        let affected = self.conn.execute(CLEAR_CATEGORY, params![category_id])?;
        Ok(affected)
    }

    fn ensure_category(&self, category_id: Option<i64>) -> AppResult<()> {
        match category_id {
            Some(id) if !Categories::new(self.conn).exists(id)? => Err(AppError::invalid(format!("category {} does not exist", id))),
            _ => Ok(()),
        }
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: row.get(3)?,
        category_id: row.get(4)?,
        completed: row.get(5)?,
        created_at: row.get(6)?,
        category: row.get(7)?,
    })
}

/// Escapes `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
