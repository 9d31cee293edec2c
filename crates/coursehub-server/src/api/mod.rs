// ABOUTME: API module containing the HTTP handler functions for the coursehub REST API.
// ABOUTME: Organized into sub-modules for course reads and delegated user updates.

pub mod courses;
pub mod users;
