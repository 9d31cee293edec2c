// ABOUTME: Shared domain types for coursehub, used by the server, store, and client.
// ABOUTME: Defines course records, identity-provider user shapes, and the response envelope.

pub mod course;
pub mod envelope;
pub mod user;

pub use course::{Chapter, ChapterKind, Course, CourseLevel, CourseStatus, Section};
pub use envelope::{Envelope, ErrorBody};
pub use user::{UserMetadata, UserRecord, UserUpdate};
