// ABOUTME: Defines the Course record and its nested section/chapter structure.
// ABOUTME: Courses are plain records passed unmodified between the store and the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Difficulty level shown on course cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Publication status. Only published courses are meant for the storefront,
/// but the API does not filter on this; the seeder sets it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    Published,
}

/// What kind of content a chapter carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterKind {
    Text,
    Video,
    Quiz,
}

/// A single chapter inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_id: Ulid,
    pub title: String,
    pub content_kind: ChapterKind,
    pub content: String,
}

/// A titled group of chapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub section_id: Ulid,
    pub title: String,
    pub description: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// A course listing, owned by a teacher. Stored as a single document and
/// returned to clients unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub course_id: Ulid,
    pub teacher_id: String,
    pub teacher_name: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Price in cents; None means the course is free.
    pub price_cents: Option<u64>,
    pub level: CourseLevel,
    pub status: CourseStatus,
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new draft course with the required fields. Generates a fresh
    /// ULID, sets both timestamps to now, and leaves the optional fields empty.
    pub fn new(
        teacher_id: String,
        teacher_name: String,
        title: String,
        category: String,
        level: CourseLevel,
    ) -> Self {
        let now = Utc::now();
        Self {
            course_id: Ulid::new(),
            teacher_id,
            teacher_name,
            title,
            description: None,
            category,
            price_cents: None,
            level,
            status: CourseStatus::Draft,
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Section {
    /// Create an empty section with a fresh ULID.
    pub fn new(title: String) -> Self {
        Self {
            section_id: Ulid::new(),
            title,
            description: None,
            chapters: Vec::new(),
        }
    }
}

impl Chapter {
    /// Create a chapter with a fresh ULID.
    pub fn new(title: String, content_kind: ChapterKind, content: String) -> Self {
        Self {
            chapter_id: Ulid::new(),
            title,
            content_kind,
            content,
        }
    }
}
