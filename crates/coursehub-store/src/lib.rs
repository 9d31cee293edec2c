// ABOUTME: Persistence layer for coursehub, wrapping the course database file.
// ABOUTME: Courses are stored as JSON documents keyed by course id.

pub mod sqlite;

pub use sqlite::{CourseStore, StoreError};
