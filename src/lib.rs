pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod notification;
pub mod palette;
pub mod render;
pub mod shape;

pub use error::{AppError, AppResult};

/// Entrypoint used by the binary and higher-level integrations.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting shapetap");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("shutdown complete");
    Ok(())
}
