//! Command argument structures and their handlers.
//!
//! Each subcommand has a clap `Args` struct converted into the matching core
//! parameter type with `From`, so the core stays free of clap derives.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wallpath_core::{
    display::{
        DeleteResult, GenerationResult, Messages, ProcessResult, PublishResult, RobotActions,
        SaveResult, TrajectorySummaries,
    },
    params::{
        GenerateTrajectory, Id, ListMessages, ListTrajectories, ProcessMessages, PublishMessage,
        SaveTrajectory, SessionActions,
    },
    Controller, Obstacle, WallpathError,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Parses an obstacle given as `x,y,width,height`.
fn parse_obstacle(value: &str) -> std::result::Result<Obstacle, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{value}': {e}"))?;

    match parts[..] {
        [x, y, width, height] => Ok(Obstacle::new(x, y, width, height)),
        _ => Err(format!(
            "expected x,y,width,height but got {} values",
            parts.len()
        )),
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Wall width in meters
    #[arg(long)]
    pub width: f64,
    /// Wall height in meters
    #[arg(long)]
    pub height: f64,
    /// Width of the tool footprint in meters
    #[arg(long, default_value_t = 0.1)]
    pub tool_width: f64,
    /// Overlap between neighbouring lanes in meters
    #[arg(long, default_value_t = 0.02)]
    pub overlap: f64,
    /// Clearance kept around obstacles in meters
    #[arg(long, default_value_t = 0.05)]
    pub safety_margin: f64,
    /// Obstacle rectangle as x,y,width,height (repeatable)
    #[arg(long = "obstacle", value_parser = parse_obstacle, allow_hyphen_values = true)]
    pub obstacles: Vec<Obstacle>,
    /// Store the generated trajectory
    #[arg(long)]
    pub save: bool,
    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&GenerateArgs> for GenerateTrajectory {
    fn from(val: &GenerateArgs) -> Self {
        GenerateTrajectory {
            wall_width: val.width,
            wall_height: val.height,
            obstacles: val.obstacles.clone(),
            tool_width: val.tool_width,
            overlap: val.overlap,
            safety_margin: val.safety_margin,
        }
    }
}

#[derive(Args)]
pub struct SaveArgs {
    /// JSON document with wall_width, wall_height, obstacles and trajectory
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ListArgs {
    /// Maximum number of trajectories to show
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

impl From<ListArgs> for ListTrajectories {
    fn from(val: ListArgs) -> Self {
        ListTrajectories { limit: val.limit }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    /// ID of the trajectory to show
    pub id: u64,
    /// Print the trajectory as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the trajectory to delete
    pub id: u64,
}

impl From<DeleteArgs> for Id {
    fn from(val: DeleteArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct ExecuteArgs {
    /// ID of the trajectory to execute
    pub id: u64,
    /// Print the execution report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ActionsArgs {
    /// Session identifier printed by `execute`
    pub session_id: String,
}

impl From<ActionsArgs> for SessionActions {
    fn from(val: ActionsArgs) -> Self {
        SessionActions {
            session_id: val.session_id,
        }
    }
}

#[derive(Args)]
pub struct MessagesArgs {
    /// Topic to list
    pub topic: String,
    /// Maximum number of messages to show
    #[arg(long, default_value_t = 50)]
    pub limit: u32,
}

impl From<MessagesArgs> for ListMessages {
    fn from(val: MessagesArgs) -> Self {
        ListMessages {
            topic: val.topic,
            limit: val.limit,
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Only deliver messages of this topic
    #[arg(long)]
    pub topic: Option<String>,
}

impl From<ProcessArgs> for ProcessMessages {
    fn from(val: ProcessArgs) -> Self {
        ProcessMessages { topic: val.topic }
    }
}

#[derive(Args)]
pub struct PublishArgs {
    /// Topic to publish to
    pub topic: String,
    /// Message text
    pub message: String,
    /// Priority; above 5 the message is delivered immediately
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub priority: i32,
}

impl From<PublishArgs> for PublishMessage {
    fn from(val: PublishArgs) -> Self {
        PublishMessage {
            topic: val.topic,
            message: val.message,
            priority: val.priority,
        }
    }
}

/// Runs commands against a controller and renders their results.
pub struct Cli {
    controller: Controller,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(controller: Controller, renderer: TerminalRenderer) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub async fn handle(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Generate(args) => self.generate(&args).await,
            Commands::Save(args) => self.save(&args).await,
            Commands::List(args) => self.list(args.into()).await,
            Commands::Show(args) => self.show(&args).await,
            Commands::Delete(args) => self.delete(args.into()).await,
            Commands::Execute(args) => self.execute(&args).await,
            Commands::Actions(args) => self.actions(args.into()).await,
            Commands::Messages(args) => self.messages(args.into()).await,
            Commands::Process(args) => self.process(args.into()).await,
            Commands::Publish(args) => self.publish(args.into()).await,
            Commands::Status => self.status().await,
        }
    }

    async fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let report = self
            .controller
            .generate_trajectory(&args.into())
            .await
            .context("Failed to generate trajectory")?;

        let saved_as = if args.save {
            let stored = self
                .controller
                .save_generated(&report)
                .await
                .context("Failed to save trajectory")?;
            Some(stored.id)
        } else {
            None
        };

        if args.json {
            let mut value = serde_json::to_value(&report).context("Failed to serialize report")?;
            if let (Some(id), Some(object)) = (saved_as, value.as_object_mut()) {
                object.insert("trajectory_id".to_string(), id.into());
            }
            return self.renderer.render_json(&value);
        }

        let result = GenerationResult::new(&report);
        let result = match saved_as {
            Some(id) => result.saved_as(id),
            None => result,
        };
        self.renderer.render(&result.to_string());
        Ok(())
    }

    async fn save(&self, args: &SaveArgs) -> Result<()> {
        let text = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let document: SaveTrajectory = serde_json::from_str(&text)
            .with_context(|| format!("Invalid trajectory document {}", args.file.display()))?;

        let stored = self
            .controller
            .save_trajectory(&document)
            .await
            .context("Failed to save trajectory")?;
        self.renderer.render(&SaveResult(stored).to_string());
        Ok(())
    }

    async fn list(&self, params: ListTrajectories) -> Result<()> {
        let summaries = self
            .controller
            .list_trajectories(&params)
            .await
            .context("Failed to list trajectories")?;
        self.renderer
            .render(&TrajectorySummaries(summaries).to_string());
        Ok(())
    }

    async fn show(&self, args: &ShowArgs) -> Result<()> {
        let trajectory = self
            .controller
            .get_trajectory(&Id { id: args.id })
            .await
            .context("Failed to load trajectory")?
            .ok_or(WallpathError::TrajectoryNotFound { id: args.id })?;

        if args.json {
            return self.renderer.render_json(&trajectory);
        }
        self.renderer.render(&trajectory.to_string());
        Ok(())
    }

    async fn delete(&self, params: Id) -> Result<()> {
        self.controller
            .delete_trajectory(&params)
            .await
            .context("Failed to delete trajectory")?;
        self.renderer.render(&DeleteResult::new(params.id).to_string());
        Ok(())
    }

    async fn execute(&self, args: &ExecuteArgs) -> Result<()> {
        let report = self
            .controller
            .execute_trajectory(&Id { id: args.id })
            .await
            .context("Failed to execute trajectory")?;

        if args.json {
            return self.renderer.render_json(&report);
        }
        self.renderer.render(&report.to_string());
        Ok(())
    }

    async fn actions(&self, params: SessionActions) -> Result<()> {
        let actions = self
            .controller
            .robot_actions(&params)
            .await
            .context("Failed to load robot actions")?;
        self.renderer
            .render(&RobotActions::new(params.session_id, actions).to_string());
        Ok(())
    }

    async fn messages(&self, params: ListMessages) -> Result<()> {
        let messages = self
            .controller
            .list_messages(&params)
            .await
            .context("Failed to list messages")?;
        self.renderer
            .render(&Messages::new(params.topic, messages).to_string());
        Ok(())
    }

    async fn process(&self, params: ProcessMessages) -> Result<()> {
        let processed = self
            .controller
            .process_messages(&params)
            .await
            .context("Failed to process messages")?;
        let result = ProcessResult {
            processed,
            topic: params.topic,
        };
        self.renderer.render(&result.to_string());
        Ok(())
    }

    async fn publish(&self, params: PublishMessage) -> Result<()> {
        let queued = self
            .controller
            .publish(&params)
            .await
            .context("Failed to publish message")?;
        self.renderer.render(&PublishResult(queued).to_string());
        Ok(())
    }

    async fn status(&self) -> Result<()> {
        let status = self
            .controller
            .system_status()
            .await
            .context("Failed to read system status")?;
        self.renderer.render(&status.to_string());
        Ok(())
    }
}
