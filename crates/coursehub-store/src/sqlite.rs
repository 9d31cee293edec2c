// ABOUTME: SQLite-backed course store holding one JSON document per course.
// ABOUTME: Provides upsert, point reads, category-filtered listing, and deletes.

use std::path::Path;

use coursehub_core::Course;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use ulid::Ulid;

/// Errors that can occur during course store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document-style course storage over SQLite. Each row holds the full course
/// as JSON; `category` and `updated_at` are mirrored into columns so listing
/// can filter and order without touching the documents.
pub struct CourseStore {
    conn: Connection,
}

impl CourseStore {
    /// Open or create the course database at the given path.
    /// Runs migrations to ensure the schema is up to date.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS courses (
                course_id TEXT PRIMARY KEY,
                category TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                doc TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS courses_category ON courses(category);",
        )?;

        Ok(Self { conn })
    }

    /// Upsert a course document by course_id.
    pub fn put_course(&self, course: &Course) -> Result<(), StoreError> {
        let doc = serde_json::to_string(course)?;
        self.conn.execute(
            "INSERT INTO courses (course_id, category, updated_at, doc)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(course_id) DO UPDATE SET
                category = excluded.category,
                updated_at = excluded.updated_at,
                doc = excluded.doc",
            params![
                course.course_id.to_string(),
                course.category,
                course.updated_at.to_rfc3339(),
                doc,
            ],
        )?;
        Ok(())
    }

    /// Fetch a single course by id. Returns None when the id is unknown.
    pub fn get_course(&self, course_id: &Ulid) -> Result<Option<Course>, StoreError> {
        let doc: Option<String> = self
            .conn
            .query_row(
                "SELECT doc FROM courses WHERE course_id = ?1",
                params![course_id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match doc {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    /// List courses, newest-first, optionally filtered to an exact category.
    pub fn list_courses(&self, category: Option<&str>) -> Result<Vec<Course>, StoreError> {
        let mut courses = Vec::new();

        match category {
            Some(category) => {
                let mut stmt = self.conn.prepare(
                    "SELECT doc FROM courses WHERE category = ?1 ORDER BY updated_at DESC",
                )?;
                let rows = stmt.query_map(params![category], |row| row.get::<_, String>(0))?;
                for doc in rows {
                    courses.push(serde_json::from_str(&doc?)?);
                }
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare("SELECT doc FROM courses ORDER BY updated_at DESC")?;
                let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
                for doc in rows {
                    courses.push(serde_json::from_str(&doc?)?);
                }
            }
        }

        Ok(courses)
    }

    /// Delete a course by id. Returns true when a row was removed.
    pub fn delete_course(&self, course_id: &Ulid) -> Result<bool, StoreError> {
        let affected = self.conn.execute(
            "DELETE FROM courses WHERE course_id = ?1",
            params![course_id.to_string()],
        )?;
        Ok(affected > 0)
    }

    /// Number of stored courses. Used by the seeder to report what it wrote.
    pub fn count(&self) -> Result<u64, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
