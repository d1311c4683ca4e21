use super::tasks::Tasks;
use crate::libs::category::{normalize_name, Category};
use crate::libs::error::{AppError, AppResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_CATEGORIES: &str = "SELECT c.id, c.name, COUNT(t.id)
    FROM categories c
    LEFT JOIN tasks t ON t.category_id = c.id";
const GROUP_BY_CATEGORY: &str = "GROUP BY c.id, c.name";
const INSERT_CATEGORY: &str = "INSERT INTO categories (name) VALUES (?1)";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const CATEGORY_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)";

/// Data access for the `categories` table.
pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Categories { conn }
    }

    /// All categories ordered by name, each with its task count.
    pub fn list(&self) -> AppResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!("{} {} ORDER BY c.name", SELECT_CATEGORIES, GROUP_BY_CATEGORY))?;
        let categories = stmt.query_map([], row_to_category)?.collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        self.conn
            .query_row(
                &format!("{} WHERE c.id = ?1 {}", SELECT_CATEGORIES, GROUP_BY_CATEGORY),
                params![id],
                row_to_category,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Exact, case-sensitive lookup.
    pub fn get_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        self.conn
            .query_row(
                &format!("{} WHERE c.name = ?1 {}", SELECT_CATEGORIES, GROUP_BY_CATEGORY),
                params![name],
                row_to_category,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = self.conn.query_row(CATEGORY_EXISTS, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Creates a category from a submitted name.
    ///
    /// The name is trimmed first. Blank names and names that already exist are
    /// skipped and yield `Ok(None)`; otherwise the new id is returned.
    pub fn create(&self, raw_name: &str) -> AppResult<Option<i64>> {
        let Some(name) = normalize_name(raw_name)? else {
            tracing::debug!("blank category name ignored");
            return Ok(None);
        };
        if self.get_by_name(&name)?.is_some() {
            tracing::debug!(%name, "duplicate category name ignored");
            return Ok(None);
        }

        self.conn.execute(INSERT_CATEGORY, params![name])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(category_id = id, %name, "category inserted");

        Ok(Some(id))
    }

    /// Detaches every task from the category, then removes it.
    ///
    /// Returns the number of tasks that lost their category.
    pub fn delete(&self, id: i64) -> AppResult<usize> {
        if !self.exists(id)? {
            return Err(AppError::category_not_found(id));
        }

        let orphaned = Tasks::new(self.conn).clear_category(id)?;
        self.conn.execute(DELETE_CATEGORY, params![id])?;
        tracing::debug!(category_id = id, orphaned, "category deleted");

        Ok(orphaned)
    }
}

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        task_count: row.get(2)?,
    })
}
