// ABOUTME: Entry point for the coursehub binary.
// ABOUTME: Loads .env, initializes tracing, and runs the serve or seed command.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use coursehub_core::{Chapter, ChapterKind, Course, CourseLevel, CourseStatus, Section};
use coursehub_server::{AppState, AuthLayer, IdentityClient, ServerConfig, create_router};
use coursehub_store::CourseStore;

#[derive(Parser)]
#[command(name = "coursehub", about = "Course marketplace REST API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Write demo courses into the store
    Seed {
        /// Delete all existing courses first
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursehub=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env().context("loading configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Seed { reset } => seed(&config, reset),
    }
}

fn open_store(config: &ServerConfig) -> anyhow::Result<CourseStore> {
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;
    Ok(CourseStore::open(&config.data_dir.join("courses.db"))?)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config)?;

    let mut identity = IdentityClient::new(config.clerk_secret_key.clone().unwrap_or_default());
    if let Some(base_url) = &config.clerk_api_base_url {
        identity = identity.with_base_url(base_url);
    }

    let auth = if config.clerk_secret_key.is_some() {
        Some(AuthLayer::new(Arc::new(identity.clone())))
    } else {
        tracing::warn!("CLERK_SECRET_KEY is not set; user routes are unauthenticated");
        None
    };

    let state = Arc::new(AppState::new(store, identity));
    let router = create_router(state, auth);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "coursehub server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn seed(config: &ServerConfig, reset: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;

    if reset {
        let existing = store.list_courses(None)?;
        for course in &existing {
            store.delete_course(&course.course_id)?;
        }
        tracing::info!("removed {} existing courses", existing.len());
    }

    let courses = demo_courses();
    for course in &courses {
        store.put_course(course)?;
        tracing::info!(course_id = %course.course_id, title = %course.title, "seeded course");
    }

    tracing::info!("store now holds {} courses", store.count()?);
    Ok(())
}

/// Demo catalog used by `coursehub seed`.
fn demo_courses() -> Vec<Course> {
    let mut rust = Course::new(
        "user_seed_teacher_1".to_string(),
        "Nina Alvarez".to_string(),
        "Rust for Backend Developers".to_string(),
        "programming".to_string(),
        CourseLevel::Intermediate,
    );
    rust.description = Some("Build and ship production HTTP services in Rust.".to_string());
    rust.price_cents = Some(4900);
    rust.status = CourseStatus::Published;
    let mut section = Section::new("Getting Started".to_string());
    section.chapters.push(Chapter::new(
        "Why Rust".to_string(),
        ChapterKind::Video,
        "https://cdn.coursehub.app/rust/why-rust.mp4".to_string(),
    ));
    section.chapters.push(Chapter::new(
        "Toolchain Setup".to_string(),
        ChapterKind::Text,
        "Install rustup, then add the stable toolchain.".to_string(),
    ));
    rust.sections.push(section);

    let mut design = Course::new(
        "user_seed_teacher_2".to_string(),
        "Miles Okafor".to_string(),
        "Foundations of Visual Design".to_string(),
        "design".to_string(),
        CourseLevel::Beginner,
    );
    design.description = Some("Color, typography, and layout from first principles.".to_string());
    design.status = CourseStatus::Published;

    let mut ml = Course::new(
        "user_seed_teacher_1".to_string(),
        "Nina Alvarez".to_string(),
        "Practical Machine Learning".to_string(),
        "data-science".to_string(),
        CourseLevel::Advanced,
    );
    ml.description = Some("Train, evaluate, and deploy models end to end.".to_string());
    ml.price_cents = Some(9900);

    vec![rust, design, ml]
}
