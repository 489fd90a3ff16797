//! Wallpath CLI Application
//!
//! Command-line interface for planning and executing wall-finishing robot
//! trajectories.

mod args;
mod cli;
mod renderer;

use std::time::Instant;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use jiff::Timestamp;
use log::{info, warn};
use renderer::TerminalRenderer;
use wallpath_core::{
    broker::{ROBOT_STATUS, TRAJECTORY_COMMANDS},
    params::RequestLog,
    ControllerBuilder, LogLevel, WallpathError,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let controller = ControllerBuilder::new()
        .with_database_path(database_file)
        .with_subscriber(TRAJECTORY_COMMANDS, |message| {
            info!("Processing trajectory command: {message}");
            Ok(())
        })
        .with_subscriber(ROBOT_STATUS, |message| {
            info!("Robot status update: {message}");
            Ok(())
        })
        .build()
        .await
        .context("Failed to initialize controller")?;

    let cli = Cli::new(controller, TerminalRenderer::new(!no_color));

    let name = command.name();
    let request_id = Timestamp::now().as_millisecond().to_string();
    info!("Request {request_id}: {name}");

    let started = Instant::now();
    let outcome = cli.handle(command).await;
    let execution_time = started.elapsed().as_secs_f64();
    info!("Request {request_id} completed in {execution_time:.3}s");

    let (level, message) = match &outcome {
        Ok(()) => (LogLevel::Info, format!("{name} - ok")),
        Err(e) => {
            let rejected = e
                .downcast_ref::<WallpathError>()
                .is_some_and(WallpathError::is_validation);
            let level = if rejected { LogLevel::Warning } else { LogLevel::Error };
            (level, format!("{name} - {e:#}"))
        }
    };
    let record = RequestLog {
        level,
        message,
        request_id: Some(request_id),
        execution_time: Some(execution_time),
    };
    if let Err(e) = cli.controller().log_request(&record).await {
        warn!("Failed to record request: {e}");
    }

    outcome
}
